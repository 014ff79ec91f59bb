//! Bounded-batch parallel scoring.
//!
//! Scoring a candidate is side-effect-free, so batches score on the
//! rayon pool with each batch owning its output buffer. Cancellation is
//! observed between batches; a cancelled call leaves no partial state
//! behind.

use rayon::prelude::*;

use tessera_core::config::ScoringWeights;
use tessera_core::errors::{RetrievalError, RetrievalResult};
use tessera_core::models::{Chunk, ScoreBreakdown, ScoredChunk};
use tessera_core::traits::{Cancellable, CancellationToken};

/// Score `chunks` in batches of `batch_size`, wrapping each into a
/// `ScoredChunk` with the total fused from `weights`.
///
/// Output order follows input order, so callers stay deterministic.
pub fn score_batched<F>(
    chunks: Vec<Chunk>,
    batch_size: usize,
    weights: &ScoringWeights,
    cancel: &CancellationToken,
    score_fn: F,
) -> RetrievalResult<Vec<ScoredChunk>>
where
    F: Fn(&Chunk) -> ScoreBreakdown + Sync,
{
    let batch_size = batch_size.max(1);
    let mut scored = Vec::with_capacity(chunks.len());

    for batch in chunks.chunks(batch_size) {
        if cancel.is_cancelled() {
            return Err(RetrievalError::Cancelled);
        }
        let mut local: Vec<ScoredChunk> = batch
            .par_iter()
            .map(|chunk| ScoredChunk::new(chunk.clone(), score_fn(chunk), weights))
            .collect();
        scored.append(&mut local);
    }

    Ok(scored)
}
