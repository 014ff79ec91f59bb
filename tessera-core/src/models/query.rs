use serde::{Deserialize, Serialize};

/// Broad category of what the query is asking for. Produced by the
/// (external) query-analysis side; biases budget sizing, not scoring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryCategory {
    Factual,
    Summary,
    Comparison,
    Analysis,
    #[default]
    General,
}

impl QueryCategory {
    /// Categories that need material from several documents at once get
    /// a wider context budget.
    pub fn wants_wide_context(self) -> bool {
        matches!(self, Self::Comparison | Self::Analysis)
    }
}

/// How much work answering the query is expected to take.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryComplexity {
    #[default]
    Simple,
    Medium,
    Complex,
}

impl QueryComplexity {
    /// The next tier up, saturating at `Complex`.
    pub fn promoted(self) -> Self {
        match self {
            Self::Simple => Self::Medium,
            Self::Medium => Self::Complex,
            Self::Complex => Self::Complex,
        }
    }
}

/// The input contract of the pipeline: one analyzed query.
///
/// `keywords` holds normalized, particle-stripped tokens;
/// `expanded_keywords` the synonym-expanded superset when the caller
/// already ran expansion (left empty, the engine asks its own expander).
/// A query with both `keywords` and `raw_text` empty is invalid and is
/// rejected before any store call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryAnalysis {
    pub raw_text: String,
    pub keywords: Vec<String>,
    pub expanded_keywords: Vec<String>,
    /// Query embedding, when the caller already computed one. Absent,
    /// the engine asks its embedding provider once per request.
    pub embedding: Option<Vec<f64>>,
    pub category: QueryCategory,
    pub complexity: QueryComplexity,
}

impl QueryAnalysis {
    /// True when there is nothing to search with.
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty() && self.raw_text.trim().is_empty()
    }
}

/// Caller-side knobs for one search call. `None` fields fall back to the
/// budget policy derived from the query's category and complexity.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    pub max_chunks: Option<usize>,
    pub max_context_chars: Option<usize>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_is_detected() {
        let q = QueryAnalysis::default();
        assert!(q.is_empty());

        let q = QueryAnalysis {
            raw_text: "   ".into(),
            ..Default::default()
        };
        assert!(q.is_empty(), "whitespace-only raw text is still empty");

        let q = QueryAnalysis {
            keywords: vec!["금연구역".into()],
            ..Default::default()
        };
        assert!(!q.is_empty());
    }

    #[test]
    fn complexity_promotes_one_tier_and_saturates() {
        assert_eq!(QueryComplexity::Simple.promoted(), QueryComplexity::Medium);
        assert_eq!(QueryComplexity::Medium.promoted(), QueryComplexity::Complex);
        assert_eq!(QueryComplexity::Complex.promoted(), QueryComplexity::Complex);
    }

    #[test]
    fn comparison_and_analysis_want_wide_context() {
        assert!(QueryCategory::Comparison.wants_wide_context());
        assert!(QueryCategory::Analysis.wants_wide_context());
        assert!(!QueryCategory::Factual.wants_wide_context());
        assert!(!QueryCategory::General.wants_wide_context());
    }
}
