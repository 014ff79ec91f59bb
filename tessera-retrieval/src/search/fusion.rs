//! Weighted score fusion across stage results.
//!
//! Folds every stage's entries into one `ScoredChunk` per chunk id.
//! Each stage fills its own breakdown dimension; when two stages scored
//! the same dimension of the same chunk (scorer stage plus fallback),
//! the higher value wins. Totals are recomputed from the merged
//! breakdown, so the fused score does not depend on stage order.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tessera_core::config::ScoringWeights;
use tessera_core::models::ScoredChunk;

use super::stage::SearchStage;

/// Merge stage results into one entry per chunk id. The returned order
/// is unspecified; the ranker imposes the total order.
pub fn fuse(stages: &[SearchStage], weights: &ScoringWeights) -> Vec<ScoredChunk> {
    let mut merged: HashMap<String, ScoredChunk> = HashMap::new();

    for stage in stages {
        for candidate in &stage.results {
            match merged.entry(candidate.chunk.id.clone()) {
                Entry::Occupied(mut occupied) => {
                    let entry = occupied.get_mut();
                    entry.breakdown = entry.breakdown.merge_max(candidate.breakdown);
                    entry.total_score = weights.fuse(&entry.breakdown);
                }
                Entry::Vacant(vacant) => {
                    vacant.insert(candidate.clone());
                }
            }
        }
    }

    merged.into_values().collect()
}
