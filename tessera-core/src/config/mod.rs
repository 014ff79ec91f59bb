//! Engine configuration. All heuristic constants live behind named
//! structs here, never inline at call sites.

pub mod defaults;
mod retrieval_config;

pub use retrieval_config::{
    BudgetPolicy, QualityConfig, QualityWeights, RetrievalConfig, ScoringWeights,
};
