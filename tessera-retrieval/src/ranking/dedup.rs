//! Duplicate collapse for fused candidates.

use std::collections::HashMap;

use tessera_core::models::ScoredChunk;

/// Collapse candidates sharing a chunk id down to one entry each,
/// keeping the occurrence with the higher total score. Ties keep the
/// first occurrence.
pub fn collapse(candidates: Vec<ScoredChunk>) -> Vec<ScoredChunk> {
    let mut by_id: HashMap<String, ScoredChunk> = HashMap::with_capacity(candidates.len());
    for candidate in candidates {
        match by_id.entry(candidate.chunk.id.clone()) {
            std::collections::hash_map::Entry::Occupied(mut entry) => {
                if candidate.total_score.value() > entry.get().total_score.value() {
                    entry.insert(candidate);
                }
            }
            std::collections::hash_map::Entry::Vacant(entry) => {
                entry.insert(candidate);
            }
        }
    }
    by_id.into_values().collect()
}
