//! Full-corpus fallback scan.
//!
//! Bounds the risk of lexical-index misses causing false "no results":
//! when the scorer stages come back thin, the whole corpus is fetched
//! and filtered by a case-insensitive substring match over the union of
//! raw and expanded keywords.

use std::collections::HashSet;

/// Distinct lowercased filter terms: `keywords ∪ expanded_keywords`.
pub fn filter_terms(keywords: &[String], expanded_keywords: &[String]) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut terms = Vec::new();
    for term in keywords.iter().chain(expanded_keywords) {
        let lower = term.to_lowercase();
        if !lower.is_empty() && seen.insert(lower.clone()) {
            terms.push(lower);
        }
    }
    terms
}

/// Case-insensitive substring test against pre-lowercased terms.
pub fn matches_any_term(content: &str, terms: &[String]) -> bool {
    if terms.is_empty() {
        return false;
    }
    let haystack = content.to_lowercase();
    terms.iter().any(|term| haystack.contains(term))
}
