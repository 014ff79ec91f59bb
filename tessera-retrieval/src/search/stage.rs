//! Per-stage result records.

use std::fmt;
use std::time::Duration;

use tessera_core::errors::StoreError;
use tessera_core::models::{ScoredChunk, StageMetrics};

/// The four retrieval strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StageName {
    Keyword,
    Synonym,
    Semantic,
    Fallback,
}

impl StageName {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Keyword => "keyword",
            Self::Synonym => "synonym",
            Self::Semantic => "semantic",
            Self::Fallback => "fallback",
        }
    }
}

impl fmt::Display for StageName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One named, weighted search attempt. Created and discarded within a
/// single orchestrator invocation; only the metrics snapshot outlives
/// the call.
#[derive(Debug)]
pub struct SearchStage {
    pub name: StageName,
    /// Fusion weight of the strategy this stage feeds (1.0 for the
    /// fallback, which scores every dimension).
    pub weight: f64,
    pub results: Vec<ScoredChunk>,
    pub duration: Duration,
    pub success: bool,
    /// The fetch error when `success` is false.
    pub error: Option<StoreError>,
}

impl SearchStage {
    pub fn succeeded(
        name: StageName,
        weight: f64,
        results: Vec<ScoredChunk>,
        duration: Duration,
    ) -> Self {
        Self {
            name,
            weight,
            results,
            duration,
            success: true,
            error: None,
        }
    }

    pub fn failed(name: StageName, weight: f64, error: StoreError, duration: Duration) -> Self {
        Self {
            name,
            weight,
            results: Vec::new(),
            duration,
            success: false,
            error: Some(error),
        }
    }

    pub fn metrics(&self) -> StageMetrics {
        StageMetrics {
            name: self.name.to_string(),
            candidates: self.results.len(),
            success: self.success,
            duration_ms: self.duration.as_millis() as u64,
        }
    }
}
