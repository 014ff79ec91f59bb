use proptest::prelude::*;
use tessera_core::config::RetrievalConfig;
use tessera_core::errors::RetrievalResult;
use tessera_core::models::{Chunk, ChunkMetadata, QueryAnalysis, SearchOptions, SearchOutcome};
use tessera_retrieval::{MemoryChunkStore, NoopExpander, RetrievalEngine};

const VOCAB: &[&str] = &[
    "금연구역",
    "주차장",
    "도서관",
    "안내",
    "운영",
    "시간",
    "과태료",
    "신청",
    "민원",
    "쓰레기",
    "배출",
    "시설",
    "이용",
    "policy",
    "notice",
];

fn arb_content() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(VOCAB), 3..30)
        .prop_map(|words| format!("{}.", words.join(" ")))
}

fn arb_keywords() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(prop::sample::select(VOCAB), 0..3)
        .prop_map(|words| words.into_iter().map(str::to_string).collect())
}

fn arb_embedding() -> impl Strategy<Value = Option<Vec<f64>>> {
    prop::option::of(prop::collection::vec(-1.0f64..1.0, 1..5))
}

// Ids are drawn from a small range so corpora regularly contain
// duplicate ids and exercise the collapse path.
fn arb_chunk() -> impl Strategy<Value = Chunk> {
    (0usize..16, arb_content(), arb_keywords(), arb_embedding(), 0u32..8).prop_map(
        |(id, content, keywords, embedding, position)| Chunk {
            id: format!("c{id}"),
            document_id: format!("doc-{}", id % 3),
            content,
            keywords,
            embedding,
            metadata: ChunkMetadata {
                source: "fixtures.pdf".to_string(),
                position,
                ..Default::default()
            },
        },
    )
}

fn arb_corpus() -> impl Strategy<Value = Vec<Chunk>> {
    prop::collection::vec(arb_chunk(), 1..32)
}

fn arb_query() -> impl Strategy<Value = QueryAnalysis> {
    (
        prop::collection::vec(prop::sample::select(VOCAB), 1..4),
        arb_embedding(),
    )
        .prop_map(|(keywords, embedding)| QueryAnalysis {
            raw_text: keywords.join(" "),
            keywords: keywords.into_iter().map(str::to_string).collect(),
            embedding,
            ..Default::default()
        })
}

fn run(
    corpus: Vec<Chunk>,
    query: &QueryAnalysis,
    options: &SearchOptions,
) -> RetrievalResult<SearchOutcome> {
    let store = MemoryChunkStore::new(corpus);
    let engine = RetrievalEngine::new(&store, &NoopExpander, RetrievalConfig::default());
    engine.search(query, options)
}

// ── Determinism ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn identical_requests_give_identical_results(
        corpus in arb_corpus(),
        query in arb_query(),
    ) {
        let first = run(corpus.clone(), &query, &SearchOptions::default());
        let second = run(corpus, &query, &SearchOptions::default());
        match (first, second) {
            (Ok(a), Ok(b)) => {
                prop_assert_eq!(a.chunks, b.chunks);
                prop_assert_eq!(a.metrics.unique_results, b.metrics.unique_results);
                prop_assert_eq!(a.metrics.total_processed, b.metrics.total_processed);
                prop_assert_eq!(a.metrics.average_relevance, b.metrics.average_relevance);
            }
            (Err(a), Err(b)) => prop_assert_eq!(a.to_string(), b.to_string()),
            (a, b) => prop_assert!(false, "runs diverged: {:?} vs {:?}", a, b),
        }
    }
}

// ── Selection shape ──────────────────────────────────────────────────────

proptest! {
    #[test]
    fn selected_ids_are_unique(corpus in arb_corpus(), query in arb_query()) {
        if let Ok(outcome) = run(corpus, &query, &SearchOptions::default()) {
            let mut ids: Vec<&str> =
                outcome.chunks.iter().map(|c| c.chunk.id.as_str()).collect();
            let before = ids.len();
            ids.sort_unstable();
            ids.dedup();
            prop_assert_eq!(ids.len(), before, "duplicate chunk ids in the selection");
        }
    }
}

proptest! {
    #[test]
    fn chunk_cap_is_always_honored(
        corpus in arb_corpus(),
        query in arb_query(),
        cap in 0usize..6,
    ) {
        let options = SearchOptions {
            max_chunks: Some(cap),
            ..Default::default()
        };
        if let Ok(outcome) = run(corpus, &query, &options) {
            prop_assert!(
                outcome.chunks.len() <= cap,
                "{} chunks selected under a cap of {}",
                outcome.chunks.len(),
                cap
            );
        }
    }
}

// ── Score bounds ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn every_score_stays_in_unit_range(corpus in arb_corpus(), query in arb_query()) {
        if let Ok(outcome) = run(corpus, &query, &SearchOptions::default()) {
            for chunk in &outcome.chunks {
                for value in [
                    chunk.breakdown.keyword.value(),
                    chunk.breakdown.synonym.value(),
                    chunk.breakdown.semantic.value(),
                    chunk.total_score.value(),
                    chunk.quality.relevance.value(),
                    chunk.quality.completeness.value(),
                    chunk.quality.accuracy.value(),
                    chunk.quality.clarity.value(),
                    chunk.quality.overall.value(),
                ] {
                    prop_assert!(
                        (0.0..=1.0).contains(&value),
                        "score out of range: {}",
                        value
                    );
                }
            }
            let m = &outcome.metrics;
            for value in [
                m.average_relevance,
                m.average_keyword,
                m.average_synonym,
                m.average_semantic,
            ] {
                prop_assert!((0.0..=1.0).contains(&value), "average out of range: {}", value);
            }
        }
    }
}

// ── Coverage guarantee ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn matching_corpus_always_yields_results(corpus in arb_corpus(), query in arb_query()) {
        let matches = corpus.iter().any(|chunk| {
            let content = chunk.content.to_lowercase();
            query.keywords.iter().any(|kw| content.contains(&kw.to_lowercase()))
        });
        prop_assume!(matches);

        match run(corpus, &query, &SearchOptions::default()) {
            Ok(outcome) => prop_assert!(!outcome.chunks.is_empty()),
            Err(e) => prop_assert!(false, "matching corpus must not fail: {}", e),
        }
    }
}

// ── Budget monotonicity ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn wider_char_budget_never_drops_chunks(
        corpus in arb_corpus(),
        query in arb_query(),
        small in 10usize..200,
        extra in 0usize..2000,
    ) {
        let narrow = SearchOptions {
            max_context_chars: Some(small),
            ..Default::default()
        };
        let wide = SearchOptions {
            max_context_chars: Some(small + extra),
            ..Default::default()
        };
        let first = run(corpus.clone(), &query, &narrow);
        let second = run(corpus, &query, &wide);
        match (first, second) {
            (Ok(a), Ok(b)) => {
                prop_assert!(a.chunks.len() <= b.chunks.len());
                let a_ids: Vec<&str> =
                    a.chunks.iter().map(|c| c.chunk.id.as_str()).collect();
                let b_ids: Vec<&str> =
                    b.chunks.iter().map(|c| c.chunk.id.as_str()).collect();
                prop_assert_eq!(
                    &b_ids[..a_ids.len()],
                    &a_ids[..],
                    "narrow selection must be a prefix of the wide one"
                );
            }
            (Err(_), Err(_)) => {}
            (a, b) => prop_assert!(false, "budget changed the error: {:?} vs {:?}", a, b),
        }
    }
}
