use serde::{Deserialize, Serialize};

use super::defaults;
use crate::errors::{ConfigError, ConfigResult};
use crate::models::query::QueryComplexity;
use crate::models::score::Score;
use crate::models::scored::ScoreBreakdown;

/// Fusion weights for the three retrieval strategies.
///
/// Fixed per engine instance, never per-query adaptive, so results stay
/// reproducible.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub keyword: f64,
    pub synonym: f64,
    pub semantic: f64,
}

impl ScoringWeights {
    /// Fuse a breakdown into the total score.
    pub fn fuse(&self, breakdown: &ScoreBreakdown) -> Score {
        Score::new(
            self.keyword * breakdown.keyword.value()
                + self.synonym * breakdown.synonym.value()
                + self.semantic * breakdown.semantic.value(),
        )
    }
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            keyword: defaults::DEFAULT_KEYWORD_WEIGHT,
            synonym: defaults::DEFAULT_SYNONYM_WEIGHT,
            semantic: defaults::DEFAULT_SEMANTIC_WEIGHT,
        }
    }
}

/// Combination weights for the four quality dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityWeights {
    pub relevance: f64,
    pub completeness: f64,
    pub accuracy: f64,
    pub clarity: f64,
}

impl QualityWeights {
    pub fn combine(
        &self,
        relevance: Score,
        completeness: Score,
        accuracy: Score,
        clarity: Score,
    ) -> Score {
        Score::new(
            self.relevance * relevance.value()
                + self.completeness * completeness.value()
                + self.accuracy * accuracy.value()
                + self.clarity * clarity.value(),
        )
    }
}

impl Default for QualityWeights {
    fn default() -> Self {
        Self {
            relevance: defaults::DEFAULT_RELEVANCE_WEIGHT,
            completeness: defaults::DEFAULT_COMPLETENESS_WEIGHT,
            accuracy: defaults::DEFAULT_ACCURACY_WEIGHT,
            clarity: defaults::DEFAULT_CLARITY_WEIGHT,
        }
    }
}

/// Context-budget sizing per complexity tier. A policy knob, not a hard
/// contract: caller-supplied `SearchOptions` override the derived values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetPolicy {
    /// Character baseline the multipliers scale.
    pub baseline_chars: usize,
    pub simple_multiplier: f64,
    pub medium_multiplier: f64,
    pub complex_multiplier: f64,
    pub simple_max_chunks: usize,
    pub medium_max_chunks: usize,
    pub complex_max_chunks: usize,
}

impl BudgetPolicy {
    pub fn multiplier_for(&self, tier: QueryComplexity) -> f64 {
        match tier {
            QueryComplexity::Simple => self.simple_multiplier,
            QueryComplexity::Medium => self.medium_multiplier,
            QueryComplexity::Complex => self.complex_multiplier,
        }
    }

    pub fn max_chunks_for(&self, tier: QueryComplexity) -> usize {
        match tier {
            QueryComplexity::Simple => self.simple_max_chunks,
            QueryComplexity::Medium => self.medium_max_chunks,
            QueryComplexity::Complex => self.complex_max_chunks,
        }
    }
}

impl Default for BudgetPolicy {
    fn default() -> Self {
        Self {
            baseline_chars: defaults::DEFAULT_CONTEXT_CHAR_BASELINE,
            simple_multiplier: defaults::DEFAULT_SIMPLE_MULTIPLIER,
            medium_multiplier: defaults::DEFAULT_MEDIUM_MULTIPLIER,
            complex_multiplier: defaults::DEFAULT_COMPLEX_MULTIPLIER,
            simple_max_chunks: defaults::DEFAULT_SIMPLE_MAX_CHUNKS,
            medium_max_chunks: defaults::DEFAULT_MEDIUM_MAX_CHUNKS,
            complex_max_chunks: defaults::DEFAULT_COMPLEX_MAX_CHUNKS,
        }
    }
}

/// Knobs for the quality heuristics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QualityConfig {
    /// Case-insensitive terms whose presence marks domain-relevant
    /// content for the accuracy score.
    pub domain_terms: Vec<String>,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            domain_terms: defaults::DEFAULT_DOMAIN_TERMS
                .iter()
                .map(|t| (*t).to_string())
                .collect(),
        }
    }
}

/// Retrieval engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetrievalConfig {
    pub scoring: ScoringWeights,
    pub quality_weights: QualityWeights,
    pub budget: BudgetPolicy,
    pub quality: QualityConfig,
    /// Per-stage fetch limit passed to the store.
    pub stage_fetch_limit: usize,
    /// Fallback full scan triggers below this many distinct candidates.
    pub fallback_min_candidates: usize,
    /// Candidates scored per parallel batch.
    pub batch_size: usize,
}

impl RetrievalConfig {
    /// Parse a TOML override file. Missing fields keep their defaults.
    pub fn from_toml_str(s: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject weights and limits the pipeline cannot work with.
    pub fn validate(&self) -> ConfigResult<()> {
        let weights = [
            ("scoring.keyword", self.scoring.keyword),
            ("scoring.synonym", self.scoring.synonym),
            ("scoring.semantic", self.scoring.semantic),
            ("quality_weights.relevance", self.quality_weights.relevance),
            (
                "quality_weights.completeness",
                self.quality_weights.completeness,
            ),
            ("quality_weights.accuracy", self.quality_weights.accuracy),
            ("quality_weights.clarity", self.quality_weights.clarity),
            ("budget.simple_multiplier", self.budget.simple_multiplier),
            ("budget.medium_multiplier", self.budget.medium_multiplier),
            ("budget.complex_multiplier", self.budget.complex_multiplier),
        ];
        for (name, value) in weights {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidWeight {
                    name: name.to_string(),
                    value,
                });
            }
        }

        let limits = [
            ("stage_fetch_limit", self.stage_fetch_limit),
            ("batch_size", self.batch_size),
            ("budget.baseline_chars", self.budget.baseline_chars),
        ];
        for (name, value) in limits {
            if value == 0 {
                return Err(ConfigError::InvalidLimit {
                    name: name.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            scoring: ScoringWeights::default(),
            quality_weights: QualityWeights::default(),
            budget: BudgetPolicy::default(),
            quality: QualityConfig::default(),
            stage_fetch_limit: defaults::DEFAULT_STAGE_FETCH_LIMIT,
            fallback_min_candidates: defaults::DEFAULT_FALLBACK_MIN_CANDIDATES,
            batch_size: defaults::DEFAULT_SCORING_BATCH_SIZE,
        }
    }
}
