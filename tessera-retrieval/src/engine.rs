//! Pipeline facade.
//!
//! `RetrievalEngine` wires the collaborators together: staged search,
//! dedup and ranking, quality scoring, budget selection. A `search`
//! call is stateless; collaborators are injected at construction and
//! shared read-only across calls.

use std::time::Instant;

use tracing::{debug, info, warn};

use tessera_core::config::RetrievalConfig;
use tessera_core::errors::{RetrievalError, RetrievalResult};
use tessera_core::models::{
    QueryAnalysis, ScoredChunk, SearchMetrics, SearchOptions, SearchOutcome,
};
use tessera_core::traits::{CancellationToken, IChunkStore, IEmbeddingProvider, ISynonymExpander};

use crate::quality::budget::ResolvedBudget;
use crate::quality::QualityOptimizer;
use crate::ranking;
use crate::search::MultiStageSearcher;

pub struct RetrievalEngine<'a> {
    store: &'a dyn IChunkStore,
    expander: &'a dyn ISynonymExpander,
    embedder: Option<&'a dyn IEmbeddingProvider>,
    config: RetrievalConfig,
}

impl<'a> RetrievalEngine<'a> {
    pub fn new(
        store: &'a dyn IChunkStore,
        expander: &'a dyn ISynonymExpander,
        config: RetrievalConfig,
    ) -> Self {
        Self {
            store,
            expander,
            embedder: None,
            config,
        }
    }

    /// Attach an embedding provider for queries that arrive without a
    /// precomputed embedding.
    pub fn with_embedder(mut self, embedder: &'a dyn IEmbeddingProvider) -> Self {
        self.embedder = Some(embedder);
        self
    }

    pub fn config(&self) -> &RetrievalConfig {
        &self.config
    }

    /// Run the full pipeline without external cancellation.
    pub fn search(
        &self,
        query: &QueryAnalysis,
        options: &SearchOptions,
    ) -> RetrievalResult<SearchOutcome> {
        self.search_cancellable(query, options, &CancellationToken::new())
    }

    /// Run the full pipeline. `cancel` is observed before every store
    /// fetch and every scoring batch.
    pub fn search_cancellable(
        &self,
        query: &QueryAnalysis,
        options: &SearchOptions,
        cancel: &CancellationToken,
    ) -> RetrievalResult<SearchOutcome> {
        let started = Instant::now();
        if query.is_empty() {
            return Err(RetrievalError::InvalidQuery);
        }

        let expanded = self.expanded_keywords(query);
        let query_embedding = self.resolve_query_embedding(query);
        debug!(
            keywords = query.keywords.len(),
            expanded = expanded.len(),
            has_embedding = query_embedding.is_some(),
            "starting staged search"
        );

        let searcher = MultiStageSearcher::new(self.store, &self.config);
        let (candidates, stages) =
            searcher.search(query, &expanded, query_embedding.as_deref(), cancel)?;

        let total_processed: usize = stages.iter().map(|stage| stage.results.len()).sum();
        let ranked = ranking::rank(candidates);
        if ranked.is_empty() {
            debug!(total_processed, "no candidates from any stage");
            return Err(RetrievalError::NoResults);
        }

        let unique_results = ranked.len();
        let (average_relevance, average_keyword, average_synonym, average_semantic) =
            score_averages(&ranked);

        let budget = ResolvedBudget::resolve(&self.config.budget, query, options);
        let optimizer = QualityOptimizer::new(&self.config);
        let chunks = optimizer.optimize(ranked, query, &budget);

        let metrics = SearchMetrics {
            total_processed,
            unique_results,
            average_relevance,
            average_keyword,
            average_synonym,
            average_semantic,
            execution_time_ms: started.elapsed().as_millis() as u64,
            stages: stages.iter().map(|stage| stage.metrics()).collect(),
        };
        info!(
            selected = chunks.len(),
            unique = unique_results,
            processed = total_processed,
            elapsed_ms = metrics.execution_time_ms,
            "search complete"
        );
        Ok(SearchOutcome { chunks, metrics })
    }

    /// Use the analysis' expanded set when present; otherwise run the
    /// injected expander over the raw keywords.
    fn expanded_keywords(&self, query: &QueryAnalysis) -> Vec<String> {
        if !query.expanded_keywords.is_empty() {
            return query.expanded_keywords.clone();
        }
        self.expander.expand(&query.keywords)
    }

    /// Resolve the query embedding once per call: prefer the vector on
    /// the analysis, else ask the provider. A provider error degrades
    /// semantic scoring to zero instead of failing the request.
    fn resolve_query_embedding(&self, query: &QueryAnalysis) -> Option<Vec<f64>> {
        if let Some(embedding) = &query.embedding {
            return Some(embedding.clone());
        }
        let provider = self.embedder?;
        if query.raw_text.trim().is_empty() {
            return None;
        }
        match provider.embed(&query.raw_text) {
            Ok(embedding) => Some(embedding),
            Err(error) => {
                warn!(
                    provider = provider.name(),
                    error = %error,
                    "query embedding failed, semantic scoring degrades to zero"
                );
                None
            }
        }
    }
}

fn score_averages(ranked: &[ScoredChunk]) -> (f64, f64, f64, f64) {
    if ranked.is_empty() {
        return (0.0, 0.0, 0.0, 0.0);
    }
    let n = ranked.len() as f64;
    let mut relevance = 0.0;
    let mut keyword = 0.0;
    let mut synonym = 0.0;
    let mut semantic = 0.0;
    for candidate in ranked {
        relevance += candidate.total_score.value();
        keyword += candidate.breakdown.keyword.value();
        synonym += candidate.breakdown.synonym.value();
        semantic += candidate.breakdown.semantic.value();
    }
    (relevance / n, keyword / n, synonym / n, semantic / n)
}
