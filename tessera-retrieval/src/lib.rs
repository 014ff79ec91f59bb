//! # tessera-retrieval
//!
//! The retrieval engine. Multi-strategy search over a chunk corpus:
//! concurrent keyword/synonym/semantic stages with a full-scan fallback,
//! weighted score fusion, deterministic dedup ranking, and
//! quality-budgeted selection of the final context.
//!
//! ## Architecture
//!
//! ```text
//! RetrievalEngine
//! ├── MultiStageSearcher
//! │   ├── Keyword Stage (lexical scoring)
//! │   ├── Synonym Stage (expanded-term scoring)
//! │   ├── Semantic Stage (cosine similarity)
//! │   ├── Fallback Scan (case-insensitive substring)
//! │   └── Fusion (per-id breakdown merge, weighted total)
//! ├── Ranker
//! │   └── Dedup (higher total wins) + deterministic ordering
//! ├── QualityOptimizer
//! │   ├── Metrics (completeness, accuracy, clarity)
//! │   ├── Budget (complexity-tiered char/chunk limits)
//! │   └── Selection (greedy prefix under budget)
//! ├── StaticSynonymExpander (built-in ISynonymExpander)
//! └── MemoryChunkStore (built-in IChunkStore)
//! ```

pub mod engine;
pub mod expansion;
pub mod quality;
pub mod ranking;
pub mod scoring;
pub mod search;
pub mod store;

pub use engine::RetrievalEngine;
pub use expansion::{NoopExpander, StaticSynonymExpander};
pub use search::MultiStageSearcher;
pub use store::MemoryChunkStore;
