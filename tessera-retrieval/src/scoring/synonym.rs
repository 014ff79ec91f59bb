//! Synonym scorer over the expanded keyword list.
//!
//! Applies the lexical scorer's content-substring rule to each expanded
//! term. Expansion is optional: an empty expanded list scores zero, it
//! never fails a request.

use tessera_core::models::{Chunk, Score};

use super::keyword::{CONTENT_MATCH_POINTS, MAX_REPEAT_BONUS};

/// Score a chunk against the synonym-expanded keyword list.
///
/// Per expanded term present in content: 5 points plus the capped
/// repeat bonus, normalized by `5 * expanded term count`.
pub fn score(chunk: &Chunk, expanded_keywords: &[String]) -> Score {
    if expanded_keywords.is_empty() {
        return Score::ZERO;
    }

    let content = chunk.content.to_lowercase();

    let mut points = 0.0;
    for term in expanded_keywords {
        let needle = term.to_lowercase();
        if needle.is_empty() {
            continue;
        }
        let occurrences = content.matches(&needle).count();
        if occurrences > 0 {
            points += CONTENT_MATCH_POINTS;
            points += ((occurrences - 1) as f64).min(MAX_REPEAT_BONUS);
        }
    }

    Score::new(points / (CONTENT_MATCH_POINTS * expanded_keywords.len() as f64))
}
