//! In-crate fakes for the embedder and store ports.
//!
//! Used by the retriever and ingestion tests to verify wiring without
//! touching the network.

use std::sync::Mutex;

use marketrag_types::document::{DocumentChunk, ScoredDocument};
use marketrag_types::error::{EmbeddingError, StoreError};

use crate::embedder::Embedder;
use crate::store::VectorStore;

/// Fake embedder that returns a small fixed-dimension vector per input
/// and records every batch it is asked to embed.
pub struct FakeEmbedder {
    pub calls: Mutex<Vec<Vec<String>>>,
    pub dimension: usize,
    pub fail: bool,
}

impl FakeEmbedder {
    pub fn new() -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            dimension: 3,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }
}

impl Embedder for FakeEmbedder {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        if self.fail {
            return Err(EmbeddingError::AuthenticationFailed);
        }
        self.calls.lock().unwrap().push(texts.to_vec());
        Ok(texts
            .iter()
            .enumerate()
            .map(|(i, _)| vec![i as f32; self.dimension])
            .collect())
    }

    fn model_name(&self) -> &str {
        "fake-embedder"
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

/// One recorded `query_nearest` call.
pub struct RecordedQuery {
    pub embedding: Vec<f32>,
    pub limit: usize,
    pub filter: Option<serde_json::Value>,
}

/// Fake vector store that records upserts and queries and answers
/// queries with a canned result set.
pub struct FakeStore {
    pub upserts: Mutex<Vec<(Vec<DocumentChunk>, Vec<Vec<f32>>)>>,
    pub queries: Mutex<Vec<RecordedQuery>>,
    pub results: Vec<ScoredDocument>,
    pub fail: bool,
}

impl FakeStore {
    pub fn new() -> Self {
        Self {
            upserts: Mutex::new(Vec::new()),
            queries: Mutex::new(Vec::new()),
            results: Vec::new(),
            fail: false,
        }
    }

    pub fn with_results(results: Vec<ScoredDocument>) -> Self {
        Self {
            results,
            ..Self::new()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::new()
        }
    }
}

impl VectorStore for FakeStore {
    async fn upsert(
        &self,
        chunks: &[DocumentChunk],
        embeddings: &[Vec<f32>],
    ) -> Result<(), StoreError> {
        if self.fail {
            return Err(StoreError::Http("fake store down".to_string()));
        }
        self.upserts
            .lock()
            .unwrap()
            .push((chunks.to_vec(), embeddings.to_vec()));
        Ok(())
    }

    async fn query_nearest(
        &self,
        embedding: &[f32],
        limit: usize,
        filter: Option<&serde_json::Value>,
    ) -> Result<Vec<ScoredDocument>, StoreError> {
        if self.fail {
            return Err(StoreError::Http("fake store down".to_string()));
        }
        self.queries.lock().unwrap().push(RecordedQuery {
            embedding: embedding.to_vec(),
            limit,
            filter: filter.cloned(),
        });
        Ok(self.results.clone())
    }
}

/// Build a scored document for canned results.
pub fn scored(id: i64, content: &str, similarity: f32) -> ScoredDocument {
    ScoredDocument {
        id,
        content: content.to_string(),
        metadata: serde_json::Value::Null,
        similarity,
    }
}
