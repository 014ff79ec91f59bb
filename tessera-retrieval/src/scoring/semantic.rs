//! Semantic scorer: cosine similarity between query and chunk
//! embeddings.

use tessera_core::models::Score;

/// Cosine similarity of two vectors, tolerant of differing lengths.
///
/// The shorter vector is treated as zero-padded at the tail (never
/// truncated), so mixed-dimension corpora still compare. Returns 0 when
/// either magnitude is zero.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let len = a.len().max(b.len());
    if len == 0 {
        return 0.0;
    }

    let mut dot = 0.0;
    let mut mag_a = 0.0;
    let mut mag_b = 0.0;
    for i in 0..len {
        let x = a.get(i).copied().unwrap_or(0.0);
        let y = b.get(i).copied().unwrap_or(0.0);
        dot += x * y;
        mag_a += x * x;
        mag_b += y * y;
    }

    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }
    dot / (mag_a.sqrt() * mag_b.sqrt())
}

/// Score an optional embedding pair.
///
/// Cosine similarity is mathematically in [-1, 1]; negative similarity
/// is treated as no signal and clamps to 0, since fusion assumes
/// non-negative inputs. Either side absent scores 0.
pub fn score(query_embedding: Option<&[f64]>, chunk_embedding: Option<&[f64]>) -> Score {
    match (query_embedding, chunk_embedding) {
        (Some(query), Some(chunk)) => Score::new(cosine_similarity(query, chunk)),
        _ => Score::ZERO,
    }
}
