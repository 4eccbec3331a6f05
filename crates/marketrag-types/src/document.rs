//! Document types for ingestion and retrieval.
//!
//! A source document is split into overlapping chunks before embedding;
//! each chunk becomes one row in the vector store. Query results come
//! back as scored rows ranked by similarity.

use serde::{Deserialize, Serialize};

/// Metadata attached to a chunk when it is written to the store.
///
/// Stored as JSON alongside the chunk content so a retrieved row can be
/// traced back to its origin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChunkMetadata {
    /// Where the chunk came from (file path or logical source name).
    pub source: String,
    /// Zero-based position of this chunk within its source document.
    pub chunk_index: usize,
}

/// A single chunk of a source document, ready for embedding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentChunk {
    pub content: String,
    pub metadata: ChunkMetadata,
}

impl DocumentChunk {
    pub fn new(content: impl Into<String>, source: impl Into<String>, chunk_index: usize) -> Self {
        Self {
            content: content.into(),
            metadata: ChunkMetadata {
                source: source.into(),
                chunk_index,
            },
        }
    }
}

/// A row returned by a nearest-neighbor query, ranked by similarity.
///
/// Metadata is kept as raw JSON: rows may have been written by other
/// tools with fields beyond [`ChunkMetadata`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredDocument {
    /// Row id in the vector store (bigserial primary key).
    pub id: i64,
    pub content: String,
    #[serde(default)]
    pub metadata: serde_json::Value,
    /// Cosine similarity in [0, 1], higher is closer.
    pub similarity: f32,
}
