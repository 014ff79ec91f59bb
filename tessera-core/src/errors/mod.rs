//! Error taxonomy. One enum per subsystem; nothing here is fatal to the
//! host process. Every failure mode degrades to fewer or lower-quality
//! results.

mod config_error;
mod embedding_error;
mod retrieval_error;
mod store_error;

pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use retrieval_error::RetrievalError;
pub use store_error::StoreError;

pub type ConfigResult<T> = Result<T, ConfigError>;
pub type EmbeddingResult<T> = Result<T, EmbeddingError>;
pub type RetrievalResult<T> = Result<T, RetrievalError>;
pub type StoreResult<T> = Result<T, StoreError>;
