//! Lexical keyword scorer.
//!
//! Exact structured-keyword matches are the strongest relevance signal;
//! raw content occurrence is weaker but still useful, and repetition
//! rewards topical density without unbounded inflation.

use tessera_core::models::{Chunk, Score};

/// Points for an exact match against the chunk's keyword list.
pub const EXACT_KEYWORD_POINTS: f64 = 10.0;
/// Points when a chunk keyword and the query keyword contain each other
/// (either direction).
pub const PARTIAL_KEYWORD_POINTS: f64 = 3.0;
/// Points for the keyword occurring in the chunk content.
pub const CONTENT_MATCH_POINTS: f64 = 5.0;
/// Cap on the repeat-occurrence bonus.
pub const MAX_REPEAT_BONUS: f64 = 5.0;

/// Score a chunk against the raw keyword list.
///
/// Per keyword: exact keyword-list match earns 10, otherwise a
/// cross-substring keyword match earns 3; content occurrence earns 5
/// plus `min(occurrences - 1, 5)` for repeats. The sum is normalized by
/// `10 * keyword count` and clamped to [0, 1]. Matching is
/// case-insensitive throughout.
pub fn score(chunk: &Chunk, keywords: &[String]) -> Score {
    if keywords.is_empty() {
        return Score::ZERO;
    }

    let content = chunk.content.to_lowercase();
    let chunk_keywords: Vec<String> = chunk
        .keywords
        .iter()
        .map(|k| k.to_lowercase())
        .filter(|k| !k.is_empty())
        .collect();

    let mut points = 0.0;
    for keyword in keywords {
        let needle = keyword.to_lowercase();
        if needle.is_empty() {
            continue;
        }

        if chunk_keywords.iter().any(|k| *k == needle) {
            points += EXACT_KEYWORD_POINTS;
        } else if chunk_keywords
            .iter()
            .any(|k| k.contains(&needle) || needle.contains(k.as_str()))
        {
            points += PARTIAL_KEYWORD_POINTS;
        }

        let occurrences = content.matches(&needle).count();
        if occurrences > 0 {
            points += CONTENT_MATCH_POINTS;
            points += ((occurrences - 1) as f64).min(MAX_REPEAT_BONUS);
        }
    }

    Score::new(points / (EXACT_KEYWORD_POINTS * keywords.len() as f64))
}
