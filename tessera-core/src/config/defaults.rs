// Single source of truth for all default values.

// --- Scoring fusion weights ---
pub const DEFAULT_KEYWORD_WEIGHT: f64 = 0.4;
pub const DEFAULT_SYNONYM_WEIGHT: f64 = 0.3;
pub const DEFAULT_SEMANTIC_WEIGHT: f64 = 0.3;

// --- Quality combination weights ---
pub const DEFAULT_RELEVANCE_WEIGHT: f64 = 0.4;
pub const DEFAULT_COMPLETENESS_WEIGHT: f64 = 0.3;
pub const DEFAULT_ACCURACY_WEIGHT: f64 = 0.2;
pub const DEFAULT_CLARITY_WEIGHT: f64 = 0.1;

// --- Search ---
pub const DEFAULT_STAGE_FETCH_LIMIT: usize = 200;
pub const DEFAULT_FALLBACK_MIN_CANDIDATES: usize = 50;
pub const DEFAULT_SCORING_BATCH_SIZE: usize = 100;

// --- Context budget ---
pub const DEFAULT_CONTEXT_CHAR_BASELINE: usize = 15_000;
pub const DEFAULT_SIMPLE_MULTIPLIER: f64 = 1.0;
pub const DEFAULT_MEDIUM_MULTIPLIER: f64 = 1.7;
pub const DEFAULT_COMPLEX_MULTIPLIER: f64 = 3.3;
pub const DEFAULT_SIMPLE_MAX_CHUNKS: usize = 3;
pub const DEFAULT_MEDIUM_MAX_CHUNKS: usize = 8;
pub const DEFAULT_COMPLEX_MAX_CHUNKS: usize = 15;

// --- Quality heuristics ---
/// Terms that mark content as belonging to the indexed domain.
/// Overridable via `QualityConfig::domain_terms`.
pub const DEFAULT_DOMAIN_TERMS: &[&str] = &[
    "조례",
    "규정",
    "시설",
    "신고",
    "허가",
    "운영",
    "관리",
    "지원",
    "regulation",
    "ordinance",
    "facility",
    "policy",
    "municipal",
];
