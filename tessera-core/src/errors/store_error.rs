/// Chunk-store adapter errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store query failed: {message}")]
    QueryFailed { message: String },

    #[error("store connection lost: {message}")]
    ConnectionLost { message: String },

    #[error("store timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },
}
