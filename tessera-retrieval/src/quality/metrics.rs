//! Quality sub-score heuristics.
//!
//! Each dimension is a cheap, deterministic text heuristic in `[0, 1]`.
//! They deliberately avoid language models or per-corpus statistics so
//! the same chunk always scores the same.

use std::sync::LazyLock;

use regex::Regex;

use tessera_core::models::{Chunk, Score};

/// Sentence-terminal punctuation, Latin and CJK fullwidth.
pub const SENTENCE_TERMINALS: [char; 6] = ['.', '!', '?', '。', '！', '？'];

/// Content shorter than this scores a proportional length penalty.
const LENGTH_BAND_LOW: usize = 100;
/// Content longer than this scores an inverse-proportional penalty.
const LENGTH_BAND_HIGH: usize = 2_000;

/// Tokens at or above this many chars count as technical vocabulary.
const LONG_TOKEN_CHARS: usize = 7;

/// Dates, percentages, and unit-suffixed quantities. Matching any of
/// these marks the content as carrying specific facts.
static FACT_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"\d{4}[-./]\d{1,2}[-./]\d{1,2}|\d+(?:[.,]\d+)?\s*(?:%|퍼센트|년|월|일|시간|시|분|만원|원|명|개|회|건|층|km|kg|㎡|m)",
    )
    .ok()
});

/// Fraction of query keywords present in the chunk, via its keyword
/// list or its content, case-insensitive. No keywords means no
/// coverage signal.
pub fn keyword_coverage(chunk: &Chunk, keywords: &[String]) -> f64 {
    if keywords.is_empty() {
        return 0.0;
    }
    let content = chunk.content.to_lowercase();
    let chunk_keywords: Vec<String> = chunk.keywords.iter().map(|k| k.to_lowercase()).collect();
    let matched = keywords
        .iter()
        .map(|keyword| keyword.to_lowercase())
        .filter(|needle| {
            !needle.is_empty()
                && (chunk_keywords.iter().any(|k| k == needle) || content.contains(needle.as_str()))
        })
        .count();
    matched as f64 / keywords.len() as f64
}

/// 1.0 inside the 100..=2000 char band, proportionally less outside.
pub fn length_band(chars: usize) -> f64 {
    if chars == 0 {
        0.0
    } else if chars < LENGTH_BAND_LOW {
        chars as f64 / LENGTH_BAND_LOW as f64
    } else if chars <= LENGTH_BAND_HIGH {
        1.0
    } else {
        LENGTH_BAND_HIGH as f64 / chars as f64
    }
}

fn ends_with_terminal(content: &str) -> bool {
    content
        .trim_end()
        .chars()
        .next_back()
        .map(|last| SENTENCE_TERMINALS.contains(&last))
        .unwrap_or(false)
}

pub fn has_specific_facts(content: &str) -> bool {
    FACT_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(content))
}

fn has_domain_terms(content: &str, domain_terms: &[String]) -> bool {
    let lowered = content.to_lowercase();
    domain_terms
        .iter()
        .filter(|term| !term.is_empty())
        .any(|term| lowered.contains(term.to_lowercase().as_str()))
}

/// Keyword coverage 0.5, length band 0.3, terminal punctuation 0.2.
pub fn completeness(chunk: &Chunk, keywords: &[String]) -> Score {
    let coverage = keyword_coverage(chunk, keywords);
    let length = length_band(chunk.content_chars());
    let structural = if ends_with_terminal(&chunk.content) {
        1.0
    } else {
        0.0
    };
    Score::new(0.5 * coverage + 0.3 * length + 0.2 * structural)
}

/// Base 0.5, +0.2 domain terms, +0.2 specific facts, +0.1 source
/// attribution.
pub fn accuracy(chunk: &Chunk, domain_terms: &[String]) -> Score {
    let mut value = 0.5;
    if has_domain_terms(&chunk.content, domain_terms) {
        value += 0.2;
    }
    if has_specific_facts(&chunk.content) {
        value += 0.2;
    }
    if !chunk.metadata.source.trim().is_empty() {
        value += 0.1;
    }
    Score::new(value)
}

/// Base 0.5, up to +0.3 for readable sentence length, up to +0.2 for
/// vocabulary balance, +0.1 for specific facts.
pub fn clarity(chunk: &Chunk) -> Score {
    let mut value = 0.5;
    value += sentence_length_bonus(&chunk.content);
    value += vocabulary_bonus(&chunk.content);
    if has_specific_facts(&chunk.content) {
        value += 0.1;
    }
    Score::new(value)
}

fn average_sentence_chars(content: &str) -> f64 {
    let mut total = 0usize;
    let mut count = 0usize;
    for sentence in content.split(&SENTENCE_TERMINALS[..]) {
        let trimmed = sentence.trim();
        if trimmed.is_empty() {
            continue;
        }
        total += trimmed.chars().count();
        count += 1;
    }
    if count == 0 {
        0.0
    } else {
        total as f64 / count as f64
    }
}

fn sentence_length_bonus(content: &str) -> f64 {
    let average = average_sentence_chars(content);
    if (20.0..=100.0).contains(&average) {
        0.3
    } else if (10.0..20.0).contains(&average) || (100.0..=150.0).contains(&average) {
        0.2
    } else {
        0.0
    }
}

fn vocabulary_bonus(content: &str) -> f64 {
    let mut tokens = 0usize;
    let mut long_tokens = 0usize;
    for token in content.split_whitespace() {
        tokens += 1;
        if token.chars().count() >= LONG_TOKEN_CHARS {
            long_tokens += 1;
        }
    }
    if tokens == 0 {
        return 0.0;
    }
    let ratio = long_tokens as f64 / tokens as f64;
    if (0.1..=0.5).contains(&ratio) {
        0.2
    } else if (0.05..0.1).contains(&ratio) || (0.5..=0.7).contains(&ratio) {
        0.1
    } else {
        0.0
    }
}
