use serde::{Deserialize, Serialize};

use super::chunk::{Chunk, DocumentType};
use super::score::Score;
use crate::config::ScoringWeights;

/// Per-strategy score components for one chunk.
///
/// Each search stage fills in exactly one field; fusion folds the stage
/// entries for a chunk id into a single breakdown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub keyword: Score,
    pub synonym: Score,
    pub semantic: Score,
}

impl ScoreBreakdown {
    pub fn keyword(score: Score) -> Self {
        Self {
            keyword: score,
            ..Default::default()
        }
    }

    pub fn synonym(score: Score) -> Self {
        Self {
            synonym: score,
            ..Default::default()
        }
    }

    pub fn semantic(score: Score) -> Self {
        Self {
            semantic: score,
            ..Default::default()
        }
    }

    /// Field-wise maximum of two breakdowns. Used when two stages (for
    /// example a scorer stage and the fallback scan) both scored the
    /// same dimension of the same chunk.
    pub fn merge_max(self, other: Self) -> Self {
        Self {
            keyword: self.keyword.max(other.keyword),
            synonym: self.synonym.max(other.synonym),
            semantic: self.semantic.max(other.semantic),
        }
    }
}

/// A chunk re-wrapped with its score breakdown and fused total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredChunk {
    pub chunk: Chunk,
    pub breakdown: ScoreBreakdown,
    /// Weighted fusion of the breakdown, in [0, 1].
    pub total_score: Score,
}

impl ScoredChunk {
    pub fn new(chunk: Chunk, breakdown: ScoreBreakdown, weights: &ScoringWeights) -> Self {
        let total_score = weights.fuse(&breakdown);
        Self {
            chunk,
            breakdown,
            total_score,
        }
    }
}

/// Quality dimensions computed by the optimizer. All in [0, 1].
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct QualityMetrics {
    /// The fused retrieval score, carried through unchanged.
    pub relevance: Score,
    pub completeness: Score,
    pub accuracy: Score,
    pub clarity: Score,
    /// Weighted combination of the four dimensions.
    pub overall: Score,
}

/// Coarse importance bucket derived from the overall quality score.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Importance {
    Low,
    #[default]
    Normal,
    High,
    Critical,
}

impl Importance {
    pub fn from_score(overall: Score) -> Self {
        let v = overall.value();
        if v >= 0.85 {
            Self::Critical
        } else if v >= 0.7 {
            Self::High
        } else if v >= 0.5 {
            Self::Normal
        } else {
            Self::Low
        }
    }
}

/// Presentation context for a selected chunk.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContextInfo {
    pub document_type: DocumentType,
    pub section: Option<String>,
    pub importance: Importance,
}

/// Terminal representation returned to callers: a scored chunk plus
/// quality metrics and presentation context. Created only by the
/// quality optimizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancedChunk {
    pub chunk: Chunk,
    pub breakdown: ScoreBreakdown,
    pub total_score: Score,
    pub quality: QualityMetrics,
    pub context: ContextInfo,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::chunk::ChunkMetadata;

    fn chunk() -> Chunk {
        Chunk {
            id: "c1".into(),
            document_id: "d1".into(),
            content: "text".into(),
            keywords: Vec::new(),
            embedding: None,
            metadata: ChunkMetadata::default(),
        }
    }

    #[test]
    fn single_field_constructors_leave_others_zero() {
        let b = ScoreBreakdown::synonym(Score::new(0.6));
        assert_eq!(b.keyword, Score::ZERO);
        assert_eq!(b.synonym.value(), 0.6);
        assert_eq!(b.semantic, Score::ZERO);
    }

    #[test]
    fn merge_max_takes_the_higher_value_per_field() {
        let a = ScoreBreakdown {
            keyword: Score::new(0.9),
            synonym: Score::new(0.1),
            semantic: Score::ZERO,
        };
        let b = ScoreBreakdown {
            keyword: Score::new(0.2),
            synonym: Score::new(0.5),
            semantic: Score::new(0.3),
        };
        let merged = a.merge_max(b);
        assert_eq!(merged.keyword.value(), 0.9);
        assert_eq!(merged.synonym.value(), 0.5);
        assert_eq!(merged.semantic.value(), 0.3);
    }

    #[test]
    fn scored_chunk_fuses_with_the_documented_weights() {
        let weights = ScoringWeights::default();
        let breakdown = ScoreBreakdown {
            keyword: Score::new(1.0),
            synonym: Score::new(0.5),
            semantic: Score::new(0.5),
        };
        let scored = ScoredChunk::new(chunk(), breakdown, &weights);
        // 0.4*1.0 + 0.3*0.5 + 0.3*0.5
        assert!((scored.total_score.value() - 0.7).abs() < 1e-9);
    }

    #[test]
    fn importance_buckets_follow_thresholds() {
        assert_eq!(Importance::from_score(Score::new(0.9)), Importance::Critical);
        assert_eq!(Importance::from_score(Score::new(0.75)), Importance::High);
        assert_eq!(Importance::from_score(Score::new(0.6)), Importance::Normal);
        assert_eq!(Importance::from_score(Score::new(0.2)), Importance::Low);
    }
}
