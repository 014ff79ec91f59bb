//! Budget-constrained greedy selection.

use tessera_core::models::EnhancedChunk;

use super::budget::ResolvedBudget;

/// Select a prefix of the ranked candidates under the budget.
///
/// The first candidate is always taken so a non-empty pool yields a
/// non-empty result even when that one chunk alone exceeds the char
/// budget. The walk stops at the first candidate that would break
/// either limit; later, shorter candidates are not reconsidered, which
/// keeps the selected count monotone in the budget.
pub fn select(ranked: Vec<EnhancedChunk>, budget: &ResolvedBudget) -> Vec<EnhancedChunk> {
    let mut selected = Vec::new();
    let mut used_chars = 0usize;
    for candidate in ranked {
        if selected.len() >= budget.max_chunks {
            break;
        }
        let length = candidate.chunk.content_chars();
        if !selected.is_empty() && used_chars + length > budget.max_context_chars {
            break;
        }
        used_chars += length;
        selected.push(candidate);
    }
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::models::{
        Chunk, ChunkMetadata, ContextInfo, QualityMetrics, Score, ScoreBreakdown,
    };

    fn candidate(id: &str, content_len: usize) -> EnhancedChunk {
        EnhancedChunk {
            chunk: Chunk {
                id: id.into(),
                document_id: "doc".into(),
                content: "a".repeat(content_len),
                keywords: Vec::new(),
                embedding: None,
                metadata: ChunkMetadata::default(),
            },
            breakdown: ScoreBreakdown::default(),
            total_score: Score::ZERO,
            quality: QualityMetrics::default(),
            context: ContextInfo::default(),
        }
    }

    fn budget(max_chunks: usize, max_context_chars: usize) -> ResolvedBudget {
        ResolvedBudget {
            max_chunks,
            max_context_chars,
        }
    }

    #[test]
    fn first_candidate_survives_an_oversized_budget_check() {
        let selected = select(vec![candidate("a", 500)], &budget(3, 100));
        assert_eq!(selected.len(), 1);
    }

    #[test]
    fn stops_at_the_first_over_budget_candidate() {
        // The trailing short candidates would fit, but selection is a
        // prefix: once 91 breaks the budget nothing after it is taken.
        let selected = select(
            vec![
                candidate("a", 10),
                candidate("b", 91),
                candidate("c", 5),
                candidate("d", 5),
            ],
            &budget(10, 20),
        );
        let ids: Vec<_> = selected.iter().map(|s| s.chunk.id.as_str()).collect();
        assert_eq!(ids, ["a"]);
    }

    #[test]
    fn exact_fit_is_allowed() {
        let selected = select(
            vec![candidate("a", 60), candidate("b", 40)],
            &budget(10, 100),
        );
        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn chunk_cap_limits_the_prefix() {
        let selected = select(
            vec![candidate("a", 10), candidate("b", 10), candidate("c", 10)],
            &budget(2, 1_000),
        );
        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn zero_chunk_cap_selects_nothing() {
        let selected = select(vec![candidate("a", 10)], &budget(0, 1_000));
        assert!(selected.is_empty());
    }

    #[test]
    fn widening_the_budget_never_drops_chunks() {
        let pool = || {
            vec![
                candidate("a", 10),
                candidate("b", 91),
                candidate("c", 5),
                candidate("d", 5),
            ]
        };
        let mut previous = 0;
        for chars in [5, 20, 101, 106, 500] {
            let count = select(pool(), &budget(10, chars)).len();
            assert!(count >= previous, "budget {chars} shrank the selection");
            previous = count;
        }
    }
}
