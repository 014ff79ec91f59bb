//! # tessera-core
//!
//! Foundation crate for the Tessera retrieval engine.
//! Defines all types, traits, errors, and config.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::RetrievalConfig;
pub use errors::{RetrievalError, RetrievalResult};
pub use models::{Chunk, EnhancedChunk, QueryAnalysis, Score, ScoredChunk, SearchMetrics};
