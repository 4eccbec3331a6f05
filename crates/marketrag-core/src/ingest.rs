//! Document ingestion pipeline.
//!
//! Takes pre-chunked document content, embeds it through the
//! [`Embedder`] port in API-sized sub-batches, and writes rows to the
//! [`VectorStore`] port in insertion batches. Chunking itself lives in
//! marketrag-infra; this module only composes the ports.

use serde::Serialize;
use tracing::info;

use marketrag_types::document::DocumentChunk;
use marketrag_types::error::{EmbeddingError, IngestError};

use crate::embedder::Embedder;
use crate::store::VectorStore;

/// How many chunks are sent to the embedding service per request.
pub const EMBED_BATCH_SIZE: usize = 64;

/// How many rows are written to the store per insert request.
pub const INSERT_BATCH_SIZE: usize = 1000;

/// Summary of one ingestion run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    /// Total chunks embedded and written.
    pub chunks: usize,
    /// Number of insert batches issued.
    pub batches: usize,
}

/// Embed `chunks` and write them to the store.
///
/// Embedding runs in sub-batches of [`EMBED_BATCH_SIZE`]; insertion in
/// batches of [`INSERT_BATCH_SIZE`]. Service errors abort the run and
/// propagate unmodified; rows already written stay written.
pub async fn ingest_chunks<E: Embedder, S: VectorStore>(
    embedder: &E,
    store: &S,
    chunks: &[DocumentChunk],
) -> Result<IngestReport, IngestError> {
    if chunks.is_empty() {
        return Ok(IngestReport {
            chunks: 0,
            batches: 0,
        });
    }

    let mut embeddings: Vec<Vec<f32>> = Vec::with_capacity(chunks.len());
    for batch in chunks.chunks(EMBED_BATCH_SIZE) {
        let texts: Vec<String> = batch.iter().map(|c| c.content.clone()).collect();
        let mut vectors = embedder.embed(&texts).await?;
        if vectors.len() != texts.len() {
            return Err(EmbeddingError::CountMismatch {
                sent: texts.len(),
                received: vectors.len(),
            }
            .into());
        }
        embeddings.append(&mut vectors);
    }

    let mut batches = 0;
    for (chunk_batch, embedding_batch) in chunks
        .chunks(INSERT_BATCH_SIZE)
        .zip(embeddings.chunks(INSERT_BATCH_SIZE))
    {
        store.upsert(chunk_batch, embedding_batch).await?;
        batches += 1;
        info!(batch = batches, rows = chunk_batch.len(), "inserted chunk batch");
    }
    info!(chunks = chunks.len(), "ingestion complete");

    Ok(IngestReport {
        chunks: chunks.len(),
        batches,
    })
}
