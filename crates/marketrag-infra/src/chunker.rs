//! Semantic text chunker for document content.
//!
//! Uses the `text-splitter` crate to split source documents into
//! overlapping chunks suitable for embedding. Markdown files use
//! `MarkdownSplitter` for heading-aware splitting; all other text uses
//! `TextSplitter`. Each chunk carries its source name and position.

use std::path::Path;

use text_splitter::{ChunkConfig, MarkdownSplitter, TextSplitter};

use marketrag_types::document::DocumentChunk;
use marketrag_types::error::IngestError;

/// Target chunk size in characters.
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Overlap between consecutive chunks in characters.
pub const DEFAULT_CHUNK_OVERLAP: usize = 200;

/// Chunking parameters.
#[derive(Debug, Clone, Copy)]
pub struct ChunkParams {
    pub size: usize,
    pub overlap: usize,
}

impl Default for ChunkParams {
    fn default() -> Self {
        Self {
            size: DEFAULT_CHUNK_SIZE,
            overlap: DEFAULT_CHUNK_OVERLAP,
        }
    }
}

/// Split a document into indexed chunks.
///
/// `source` is recorded in each chunk's metadata and selects the
/// splitter: `.md`/`.markdown` extensions get heading-aware splitting.
pub fn split_document(
    source: &str,
    text: &str,
    params: ChunkParams,
) -> Result<Vec<DocumentChunk>, IngestError> {
    let config = ChunkConfig::new(params.size)
        .with_overlap(params.overlap)
        .map_err(|e| IngestError::Chunking(e.to_string()))?;

    let pieces: Vec<&str> = if is_markdown(source) {
        MarkdownSplitter::new(config).chunks(text).collect()
    } else {
        TextSplitter::new(config).chunks(text).collect()
    };

    Ok(pieces
        .into_iter()
        .enumerate()
        .map(|(i, piece)| DocumentChunk::new(piece, source, i))
        .collect())
}

fn is_markdown(source: &str) -> bool {
    Path::new(source)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md") || ext.eq_ignore_ascii_case("markdown"))
}
