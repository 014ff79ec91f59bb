use serde::{Deserialize, Serialize};

use super::scored::EnhancedChunk;

/// Outcome of one search stage, kept for observability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageMetrics {
    /// Stage name ("keyword", "synonym", "semantic", "fallback").
    pub name: String,
    /// Candidates the stage contributed before fusion.
    pub candidates: usize,
    /// False when the stage's store fetch failed and it contributed an
    /// empty result set.
    pub success: bool,
    pub duration_ms: u64,
}

/// Aggregate numbers for one search call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchMetrics {
    /// Total candidates processed across all stages, duplicates included.
    pub total_processed: usize,
    /// Distinct chunks after fusion and dedup.
    pub unique_results: usize,
    /// Mean fused score over the deduplicated candidate set.
    pub average_relevance: f64,
    /// Per-strategy means over the deduplicated candidate set.
    pub average_keyword: f64,
    pub average_synonym: f64,
    pub average_semantic: f64,
    pub execution_time_ms: u64,
    pub stages: Vec<StageMetrics>,
}

/// What a successful search returns: the selected chunks in final order
/// plus the metrics for the call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchOutcome {
    pub chunks: Vec<EnhancedChunk>,
    pub metrics: SearchMetrics,
}
