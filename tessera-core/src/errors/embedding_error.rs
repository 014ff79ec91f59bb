/// Embedding provider errors. Never fatal to a search: the semantic
/// dimension degrades to zero instead.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("provider unavailable: {provider}")]
    ProviderUnavailable { provider: String },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}
