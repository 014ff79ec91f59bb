//! Multi-stage search orchestration.
//!
//! Three scorer stages (keyword, synonym, semantic) fan out against the
//! read-only store, joined by a barrier before fusion. A fallback full
//! scan joins in when the stages' union is too thin. A failing stage
//! contributes an empty result set; the pipeline errors only when every
//! stage failed.

pub mod fallback;
pub mod fusion;
pub mod stage;

use std::time::{Duration, Instant};

use tracing::{debug, warn};

use tessera_core::config::RetrievalConfig;
use tessera_core::errors::{RetrievalError, RetrievalResult, StoreResult};
use tessera_core::models::{Chunk, QueryAnalysis, ScoreBreakdown, ScoredChunk};
use tessera_core::traits::{Cancellable, CancellationToken, IChunkStore};

use crate::scoring::{batch, keyword, semantic, synonym};
use stage::{SearchStage, StageName};

/// Over-fetch factor for the fallback full scan relative to the
/// per-stage fetch limit.
const FALLBACK_FETCH_FACTOR: usize = 3;

/// Runs the staged search and fuses the results.
pub struct MultiStageSearcher<'a> {
    store: &'a dyn IChunkStore,
    config: &'a RetrievalConfig,
}

impl<'a> MultiStageSearcher<'a> {
    pub fn new(store: &'a dyn IChunkStore, config: &'a RetrievalConfig) -> Self {
        Self { store, config }
    }

    /// Run all stages and return the fused candidates plus the stage
    /// records for metrics.
    ///
    /// `expanded_keywords` is the synonym-expanded superset;
    /// `query_embedding` is the memoized per-request query vector, or
    /// `None` when embedding degraded.
    pub fn search(
        &self,
        query: &QueryAnalysis,
        expanded_keywords: &[String],
        query_embedding: Option<&[f64]>,
        cancel: &CancellationToken,
    ) -> RetrievalResult<(Vec<ScoredChunk>, Vec<SearchStage>)> {
        let (keyword_stage, (synonym_stage, semantic_stage)) = rayon::join(
            || self.keyword_stage(query, cancel),
            || {
                rayon::join(
                    || self.synonym_stage(expanded_keywords, cancel),
                    || self.semantic_stage(query, query_embedding, cancel),
                )
            },
        );
        // Join barrier: every sibling stage has resolved before merge.
        let mut stages = vec![keyword_stage?, synonym_stage?, semantic_stage?];

        let mut candidates = fusion::fuse(&stages, &self.config.scoring);

        if candidates.len() < self.config.fallback_min_candidates {
            debug!(
                distinct = candidates.len(),
                threshold = self.config.fallback_min_candidates,
                "stage coverage below threshold, running fallback scan"
            );
            stages.push(self.fallback_stage(query, expanded_keywords, query_embedding, cancel)?);
            candidates = fusion::fuse(&stages, &self.config.scoring);
        }

        if stages.iter().all(|stage| !stage.success) {
            let failed = stages
                .iter_mut()
                .find_map(|stage| stage.error.take().map(|source| (stage.name, source)));
            if let Some((name, source)) = failed {
                return Err(RetrievalError::StoreUnavailable {
                    stage: name.to_string(),
                    source,
                });
            }
        }

        Ok((candidates, stages))
    }

    fn keyword_stage(
        &self,
        query: &QueryAnalysis,
        cancel: &CancellationToken,
    ) -> RetrievalResult<SearchStage> {
        let weight = self.config.scoring.keyword;
        if query.keywords.is_empty() {
            return Ok(SearchStage::succeeded(
                StageName::Keyword,
                weight,
                Vec::new(),
                Duration::ZERO,
            ));
        }
        self.run_stage(
            StageName::Keyword,
            weight,
            cancel,
            || {
                self.store
                    .fetch_by_keywords(&query.keywords, None, self.config.stage_fetch_limit)
            },
            |chunk| ScoreBreakdown::keyword(keyword::score(chunk, &query.keywords)),
        )
    }

    fn synonym_stage(
        &self,
        expanded_keywords: &[String],
        cancel: &CancellationToken,
    ) -> RetrievalResult<SearchStage> {
        let weight = self.config.scoring.synonym;
        if expanded_keywords.is_empty() {
            return Ok(SearchStage::succeeded(
                StageName::Synonym,
                weight,
                Vec::new(),
                Duration::ZERO,
            ));
        }
        self.run_stage(
            StageName::Synonym,
            weight,
            cancel,
            || {
                self.store
                    .fetch_by_keywords(expanded_keywords, None, self.config.stage_fetch_limit)
            },
            |chunk| ScoreBreakdown::synonym(synonym::score(chunk, expanded_keywords)),
        )
    }

    /// The contextual full-text stage. Candidates come from a free-text
    /// fetch on the raw query; the semantic dimension is scored against
    /// the memoized query embedding. Without an embedding the stage
    /// still contributes candidates, scored zero.
    fn semantic_stage(
        &self,
        query: &QueryAnalysis,
        query_embedding: Option<&[f64]>,
        cancel: &CancellationToken,
    ) -> RetrievalResult<SearchStage> {
        let weight = self.config.scoring.semantic;
        if query.raw_text.trim().is_empty() {
            return Ok(SearchStage::succeeded(
                StageName::Semantic,
                weight,
                Vec::new(),
                Duration::ZERO,
            ));
        }
        self.run_stage(
            StageName::Semantic,
            weight,
            cancel,
            || {
                self.store
                    .fetch_by_text(&query.raw_text, None, self.config.stage_fetch_limit)
            },
            |chunk| {
                ScoreBreakdown::semantic(semantic::score(
                    query_embedding,
                    chunk.embedding.as_deref(),
                ))
            },
        )
    }

    /// Full-corpus scan, filtered by case-insensitive substring over
    /// `keywords ∪ expanded_keywords`, scored on every dimension.
    fn fallback_stage(
        &self,
        query: &QueryAnalysis,
        expanded_keywords: &[String],
        query_embedding: Option<&[f64]>,
        cancel: &CancellationToken,
    ) -> RetrievalResult<SearchStage> {
        let terms = fallback::filter_terms(&query.keywords, expanded_keywords);
        if terms.is_empty() {
            return Ok(SearchStage::succeeded(
                StageName::Fallback,
                1.0,
                Vec::new(),
                Duration::ZERO,
            ));
        }
        let limit = self.config.stage_fetch_limit * FALLBACK_FETCH_FACTOR;
        self.run_stage(
            StageName::Fallback,
            1.0,
            cancel,
            || {
                self.store.fetch_all(limit).map(|chunks| {
                    chunks
                        .into_iter()
                        .filter(|chunk| fallback::matches_any_term(&chunk.content, &terms))
                        .collect()
                })
            },
            |chunk| ScoreBreakdown {
                keyword: keyword::score(chunk, &query.keywords),
                synonym: synonym::score(chunk, expanded_keywords),
                semantic: semantic::score(query_embedding, chunk.embedding.as_deref()),
            },
        )
    }

    fn run_stage<FetchFn, ScoreFn>(
        &self,
        name: StageName,
        weight: f64,
        cancel: &CancellationToken,
        fetch: FetchFn,
        score_fn: ScoreFn,
    ) -> RetrievalResult<SearchStage>
    where
        FetchFn: FnOnce() -> StoreResult<Vec<Chunk>>,
        ScoreFn: Fn(&Chunk) -> ScoreBreakdown + Sync,
    {
        let started = Instant::now();
        if cancel.is_cancelled() {
            return Err(RetrievalError::Cancelled);
        }

        let chunks = match fetch() {
            Ok(chunks) => chunks,
            Err(source) => {
                warn!(stage = %name, error = %source, "stage fetch failed, contributing empty results");
                return Ok(SearchStage::failed(name, weight, source, started.elapsed()));
            }
        };

        let results = batch::score_batched(
            chunks,
            self.config.batch_size,
            &self.config.scoring,
            cancel,
            score_fn,
        )?;
        debug!(stage = %name, candidates = results.len(), "stage complete");
        Ok(SearchStage::succeeded(name, weight, results, started.elapsed()))
    }
}
