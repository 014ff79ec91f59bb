use crate::errors::StoreResult;
use crate::models::Chunk;

/// Read-only access to the external chunk corpus.
///
/// All methods are idempotent and safe for concurrent calls; the search
/// stages fan out against a single store instance. A failed fetch makes
/// the calling stage contribute an empty result set, it never aborts the
/// pipeline on its own.
pub trait IChunkStore: Send + Sync {
    /// Fetch chunks whose keywords or content match any of the given
    /// keywords, optionally restricted to a single document.
    fn fetch_by_keywords(
        &self,
        keywords: &[String],
        document_id: Option<&str>,
        limit: usize,
    ) -> StoreResult<Vec<Chunk>>;

    /// Fetch chunks by free-text relevance to `text`.
    fn fetch_by_text(
        &self,
        text: &str,
        document_id: Option<&str>,
        limit: usize,
    ) -> StoreResult<Vec<Chunk>>;

    /// Fetch up to `limit` chunks from the whole corpus. Backs the
    /// fallback full scan.
    fn fetch_all(&self, limit: usize) -> StoreResult<Vec<Chunk>>;
}
