//! In-memory chunk store.

use tessera_core::errors::StoreResult;
use tessera_core::models::Chunk;
use tessera_core::traits::IChunkStore;

/// Chunk store over an owned in-memory corpus.
///
/// Fetches are linear scans in insertion order, so results are
/// deterministic. Meant for tests, fixtures and small corpora; a
/// production deployment puts a real index behind `IChunkStore`.
#[derive(Debug, Default, Clone)]
pub struct MemoryChunkStore {
    chunks: Vec<Chunk>,
}

impl MemoryChunkStore {
    pub fn new(chunks: Vec<Chunk>) -> Self {
        Self { chunks }
    }

    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    fn document_matches(chunk: &Chunk, document_id: Option<&str>) -> bool {
        document_id.map_or(true, |id| chunk.document_id == id)
    }
}

impl IChunkStore for MemoryChunkStore {
    /// A chunk matches when any needle equals one of its keywords or
    /// appears as a substring of its content, case-insensitive.
    fn fetch_by_keywords(
        &self,
        keywords: &[String],
        document_id: Option<&str>,
        limit: usize,
    ) -> StoreResult<Vec<Chunk>> {
        let needles: Vec<String> = keywords
            .iter()
            .filter(|k| !k.is_empty())
            .map(|k| k.to_lowercase())
            .collect();
        if needles.is_empty() {
            return Ok(Vec::new());
        }

        Ok(self
            .chunks
            .iter()
            .filter(|chunk| Self::document_matches(chunk, document_id))
            .filter(|chunk| {
                let content = chunk.content.to_lowercase();
                needles.iter().any(|needle| {
                    chunk.keywords.iter().any(|k| k.to_lowercase() == *needle)
                        || content.contains(needle.as_str())
                })
            })
            .take(limit)
            .cloned()
            .collect())
    }

    /// A chunk matches when any whitespace token of `text` appears in
    /// its content, case-insensitive.
    fn fetch_by_text(
        &self,
        text: &str,
        document_id: Option<&str>,
        limit: usize,
    ) -> StoreResult<Vec<Chunk>> {
        let tokens: Vec<String> = text
            .split_whitespace()
            .map(|t| t.to_lowercase())
            .collect();
        if tokens.is_empty() {
            return Ok(Vec::new());
        }

        Ok(self
            .chunks
            .iter()
            .filter(|chunk| Self::document_matches(chunk, document_id))
            .filter(|chunk| {
                let content = chunk.content.to_lowercase();
                tokens.iter().any(|token| content.contains(token.as_str()))
            })
            .take(limit)
            .cloned()
            .collect())
    }

    fn fetch_all(&self, limit: usize) -> StoreResult<Vec<Chunk>> {
        Ok(self.chunks.iter().take(limit).cloned().collect())
    }
}
