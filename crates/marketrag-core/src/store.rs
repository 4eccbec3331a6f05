//! Vector store trait.
//!
//! Defines the interface for writing embedded chunks and running
//! nearest-neighbor queries. Implementations (the Supabase REST client,
//! test fakes) live in marketrag-infra.

use marketrag_types::document::{DocumentChunk, ScoredDocument};
use marketrag_types::error::StoreError;

use crate::embedder::Embedder;
use crate::retriever::Retriever;

/// Trait for vector-indexed document storage with similarity search.
///
/// Uses RPITIT (native async fn in traits, Rust 2024 edition).
/// Implementations live in marketrag-infra.
pub trait VectorStore: Send + Sync {
    /// Insert chunks with their embedding vectors.
    ///
    /// `chunks` and `embeddings` are parallel slices: `embeddings[i]` is
    /// the vector for `chunks[i]`.
    fn upsert(
        &self,
        chunks: &[DocumentChunk],
        embeddings: &[Vec<f32>],
    ) -> impl std::future::Future<Output = Result<(), StoreError>> + Send;

    /// Return the `limit` rows nearest to the query embedding, ranked by
    /// similarity. `filter` restricts candidates by metadata; `None`
    /// means no restriction.
    fn query_nearest(
        &self,
        embedding: &[f32],
        limit: usize,
        filter: Option<&serde_json::Value>,
    ) -> impl std::future::Future<Output = Result<Vec<ScoredDocument>, StoreError>> + Send;

    /// Derive a retriever view over this store.
    fn into_retriever<E: Embedder>(self, embedder: E) -> Retriever<E, Self>
    where
        Self: Sized,
    {
        Retriever::new(embedder, self)
    }
}
