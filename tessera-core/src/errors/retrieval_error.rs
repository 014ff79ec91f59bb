use super::store_error::StoreError;

/// Pipeline-level errors surfaced to callers.
#[derive(Debug, thiserror::Error)]
pub enum RetrievalError {
    /// Keywords and raw text are both empty. Failed fast, no store call
    /// was made.
    #[error("invalid query: keywords and raw text are both empty")]
    InvalidQuery,

    /// Every stage failed to fetch. A single failing stage is not an
    /// error; it just contributes an empty result set.
    #[error("store unavailable during {stage} stage: {source}")]
    StoreUnavailable {
        stage: String,
        #[source]
        source: StoreError,
    },

    /// All strategies and the fallback scan yielded zero candidates.
    /// Expected for off-corpus queries, not a crash condition.
    #[error("no results found for query")]
    NoResults,

    /// The caller's cancellation token fired mid-request.
    #[error("search cancelled")]
    Cancelled,
}
