//! Retriever factory.
//!
//! Wires the hosted clients together: the OpenAI embedder gets the
//! embeddings API key, the Supabase store gets the project URL and
//! service key, and the retriever is derived from the store. Both
//! clients are constructed eagerly; no request is sent until a query
//! is issued.

use secrecy::SecretString;

use marketrag_core::retriever::Retriever;
use marketrag_core::store::VectorStore as _;

use crate::env::RetrieverConfig;
use crate::openai::OpenAiEmbedder;
use crate::supabase::SupabaseVectorStore;

/// Construct the embedding client and the vector store client from
/// explicit configuration.
pub fn build_clients(config: &RetrieverConfig) -> (OpenAiEmbedder, SupabaseVectorStore) {
    let embedder = OpenAiEmbedder::new(SecretString::from(config.openai_api_key.clone()));
    let store = SupabaseVectorStore::new(
        config.supabase_url.clone(),
        SecretString::from(config.supabase_key.clone()),
    );
    (embedder, store)
}

/// Build the retriever: embedding client plus vector store, with the
/// store's default query depth and no filtering.
pub fn build_retriever(config: &RetrieverConfig) -> Retriever<OpenAiEmbedder, SupabaseVectorStore> {
    let (embedder, store) = build_clients(config);
    store.into_retriever(embedder)
}
