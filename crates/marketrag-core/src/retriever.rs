//! Query-facing retriever over an embedder and a vector store.
//!
//! The retriever is a stateless accessor bound at construction to one
//! embedding client and one vector store. Every query is
//! embed-then-search; both steps are delegated to the ports and their
//! errors propagate unmodified.

use tracing::debug;

use marketrag_types::document::ScoredDocument;
use marketrag_types::error::{EmbeddingError, RetrievalError};

use crate::embedder::Embedder;
use crate::store::VectorStore;

/// Default number of rows a retriever asks the store for.
pub const DEFAULT_TOP_K: usize = 4;

/// A query-facing view over a vector store.
pub struct Retriever<E, S> {
    embedder: E,
    store: S,
    top_k: usize,
}

impl<E: Embedder, S: VectorStore> Retriever<E, S> {
    /// Create a retriever with the default query depth.
    pub fn new(embedder: E, store: S) -> Self {
        Self {
            embedder,
            store,
            top_k: DEFAULT_TOP_K,
        }
    }

    /// Override how many rows each query returns.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    /// Return the stored documents most relevant to `query`.
    ///
    /// No metadata filter is applied: the retriever sees the whole table.
    pub async fn retrieve(&self, query: &str) -> Result<Vec<ScoredDocument>, RetrievalError> {
        let texts = [query.to_string()];
        let mut vectors = self.embedder.embed(&texts).await?;
        if vectors.len() != 1 {
            return Err(EmbeddingError::CountMismatch {
                sent: 1,
                received: vectors.len(),
            }
            .into());
        }
        let query_embedding = vectors.remove(0);

        debug!(top_k = self.top_k, "querying nearest documents");
        let documents = self
            .store
            .query_nearest(&query_embedding, self.top_k, None)
            .await?;
        Ok(documents)
    }
}
