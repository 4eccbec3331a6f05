//! Retrieval logic and port definitions for marketrag.
//!
//! This crate defines the "ports" (the [`embedder::Embedder`] and
//! [`store::VectorStore`] traits) that the infrastructure layer
//! implements, plus the logic composed from them: the retriever, the
//! document ingestion pipeline, and the bundler define-map builder.
//! It depends only on `marketrag-types` -- never on any HTTP or IO crate.

pub mod bundle;
pub mod embedder;
pub mod ingest;
pub mod retriever;
pub mod store;

#[cfg(test)]
pub(crate) mod testing;
