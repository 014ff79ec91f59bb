//! Candidate ranking.
//!
//! Fusion can emit overlapping candidates when a chunk surfaces in
//! more than one stage. Ranking collapses duplicates and imposes a
//! total, deterministic order on what remains.

pub mod dedup;

use tessera_core::models::ScoredChunk;

/// Deduplicate and order candidates: total score descending, then
/// source position ascending, then chunk id ascending. The full key
/// keeps equal-scored runs stable across repeated searches.
pub fn rank(candidates: Vec<ScoredChunk>) -> Vec<ScoredChunk> {
    let mut ranked = dedup::collapse(candidates);
    ranked.sort_by(|a, b| {
        b.total_score
            .value()
            .total_cmp(&a.total_score.value())
            .then_with(|| a.chunk.metadata.position.cmp(&b.chunk.metadata.position))
            .then_with(|| a.chunk.id.cmp(&b.chunk.id))
    });
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use tessera_core::models::{Chunk, ChunkMetadata, Score, ScoreBreakdown};

    fn scored(id: &str, total: f64, position: u32) -> ScoredChunk {
        ScoredChunk {
            chunk: Chunk {
                id: id.into(),
                document_id: "doc".into(),
                content: String::new(),
                keywords: Vec::new(),
                embedding: None,
                metadata: ChunkMetadata {
                    position,
                    ..Default::default()
                },
            },
            breakdown: ScoreBreakdown::default(),
            total_score: Score::new(total),
        }
    }

    #[test]
    fn orders_by_score_descending() {
        let ranked = rank(vec![
            scored("a", 0.2, 0),
            scored("b", 0.9, 1),
            scored("c", 0.5, 2),
        ]);
        let ids: Vec<_> = ranked.iter().map(|s| s.chunk.id.as_str()).collect();
        assert_eq!(ids, ["b", "c", "a"]);
    }

    #[test]
    fn ties_break_on_position_then_id() {
        let ranked = rank(vec![
            scored("z", 0.5, 4),
            scored("b", 0.5, 2),
            scored("a", 0.5, 2),
        ]);
        let ids: Vec<_> = ranked.iter().map(|s| s.chunk.id.as_str()).collect();
        assert_eq!(ids, ["a", "b", "z"]);
    }

    #[test]
    fn duplicates_are_collapsed_before_ordering() {
        let ranked = rank(vec![
            scored("a", 0.3, 0),
            scored("a", 0.7, 0),
            scored("b", 0.5, 1),
        ]);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].chunk.id, "a");
        assert_eq!(ranked[0].total_score.value(), 0.7);
    }
}
