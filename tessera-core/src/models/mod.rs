//! Data model for the retrieval pipeline.
//!
//! Chunks enter from the (external) ingestion side, get re-wrapped with
//! score breakdowns during search, and leave as enhanced chunks with
//! quality metrics attached. Nothing in here is mutated in place.

pub mod chunk;
pub mod metrics;
pub mod query;
pub mod score;
pub mod scored;

pub use chunk::{Chunk, ChunkMetadata, DocumentType};
pub use metrics::{SearchMetrics, SearchOutcome, StageMetrics};
pub use query::{QueryAnalysis, QueryCategory, QueryComplexity, SearchOptions};
pub use score::Score;
pub use scored::{ContextInfo, EnhancedChunk, Importance, QualityMetrics, ScoreBreakdown, ScoredChunk};
