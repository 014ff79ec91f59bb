use crate::errors::EmbeddingResult;

/// Embedding generation for query text.
///
/// Invoked at most once per search call, for the query only. Chunk
/// embeddings are assumed already attached by ingestion.
pub trait IEmbeddingProvider: Send + Sync {
    /// Embed a single text, returning a vector of floats.
    fn embed(&self, text: &str) -> EmbeddingResult<Vec<f64>>;

    /// Human-readable provider name, used in degradation logs.
    fn name(&self) -> &str;
}
