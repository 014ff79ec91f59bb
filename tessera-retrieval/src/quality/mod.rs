//! Quality scoring and budget-constrained selection.
//!
//! Takes the ranked candidates, grades each on completeness, accuracy
//! and clarity, folds those into an overall score with relevance, and
//! returns the best prefix that fits the resolved context budget.

pub mod budget;
pub mod metrics;
pub mod selection;

use tessera_core::config::RetrievalConfig;
use tessera_core::models::{
    ContextInfo, EnhancedChunk, Importance, QualityMetrics, QueryAnalysis, ScoredChunk,
};

use budget::ResolvedBudget;

pub struct QualityOptimizer<'a> {
    config: &'a RetrievalConfig,
}

impl<'a> QualityOptimizer<'a> {
    pub fn new(config: &'a RetrievalConfig) -> Self {
        Self { config }
    }

    /// Enhance every candidate, re-rank by overall quality, and select
    /// under the budget. Ties break on position then id, as in the
    /// relevance ranking.
    pub fn optimize(
        &self,
        ranked: Vec<ScoredChunk>,
        query: &QueryAnalysis,
        budget: &ResolvedBudget,
    ) -> Vec<EnhancedChunk> {
        let mut enhanced: Vec<EnhancedChunk> = ranked
            .into_iter()
            .map(|candidate| self.enhance(candidate, query))
            .collect();
        enhanced.sort_by(|a, b| {
            b.quality
                .overall
                .value()
                .total_cmp(&a.quality.overall.value())
                .then_with(|| a.chunk.metadata.position.cmp(&b.chunk.metadata.position))
                .then_with(|| a.chunk.id.cmp(&b.chunk.id))
        });
        selection::select(enhanced, budget)
    }

    /// Wrap one scored candidate with quality metrics and context info.
    /// Relevance is the fused total score; it is never recomputed here.
    pub fn enhance(&self, candidate: ScoredChunk, query: &QueryAnalysis) -> EnhancedChunk {
        let relevance = candidate.total_score;
        let completeness = metrics::completeness(&candidate.chunk, &query.keywords);
        let accuracy = metrics::accuracy(&candidate.chunk, &self.config.quality.domain_terms);
        let clarity = metrics::clarity(&candidate.chunk);
        let overall = self
            .config
            .quality_weights
            .combine(relevance, completeness, accuracy, clarity);

        let context = ContextInfo {
            document_type: candidate.chunk.metadata.document_type,
            section: candidate.chunk.metadata.section.clone(),
            importance: Importance::from_score(overall),
        };
        EnhancedChunk {
            chunk: candidate.chunk,
            breakdown: candidate.breakdown,
            total_score: candidate.total_score,
            quality: QualityMetrics {
                relevance,
                completeness,
                accuracy,
                clarity,
                overall,
            },
            context,
        }
    }
}
