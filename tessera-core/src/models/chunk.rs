use serde::{Deserialize, Serialize};

/// The kind of source document a chunk was cut from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    Pdf,
    Article,
    Notice,
    Regulation,
    #[default]
    Unknown,
}

/// Positional and provenance metadata attached to every chunk by ingestion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChunkMetadata {
    /// Where the text came from (file name, URL, dataset id).
    pub source: String,
    /// Title of the source document.
    pub title: String,
    /// Section heading, when the document has one.
    pub section: Option<String>,
    /// Page number for paginated sources.
    pub page: Option<u32>,
    /// Ordinal of this chunk within its document. Monotonically
    /// non-decreasing across a document's chunk sequence; used for
    /// locality tie-breaks during ranking.
    pub position: u32,
    /// Byte offset of the chunk start in the original document.
    pub start_offset: usize,
    /// Byte offset of the chunk end in the original document.
    pub end_offset: usize,
    /// Size of the original document in bytes.
    pub original_size: usize,
    /// Source document kind.
    pub document_type: DocumentType,
}

/// An immutable unit of retrievable text.
///
/// Created by the (out-of-scope) ingestion pipeline; read-only to this
/// engine. The pipeline never mutates a chunk, it only re-wraps it with
/// scores. Two chunks are the same entity iff their ids match.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Chunk {
    /// Identifier, unique within a document.
    pub id: String,
    /// The document this chunk was cut from.
    pub document_id: String,
    /// The chunk text. Never empty.
    pub content: String,
    /// Indexer-supplied keywords for this chunk.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Optional embedding vector. Fixed or variable length; absent when
    /// the ingestion side ran without an embedding model.
    #[serde(default)]
    pub embedding: Option<Vec<f64>>,
    #[serde(default)]
    pub metadata: ChunkMetadata,
}

impl Chunk {
    /// Character length of the chunk content. The selection budget is
    /// counted in characters, not bytes, so multi-byte scripts are not
    /// penalized.
    pub fn content_chars(&self) -> usize {
        self.content.chars().count()
    }
}

/// Entity semantics: identity is the id, not the payload.
impl PartialEq for Chunk {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Chunk {}
