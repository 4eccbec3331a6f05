//! Infrastructure layer for marketrag.
//!
//! Contains implementations of the ports defined in `marketrag-core`
//! against hosted services: OpenAI embeddings and the Supabase REST
//! vector store, both over HTTPS. Also home to configuration loading
//! (process environment and .env files), the text chunker, and the
//! retriever factory.

pub mod chunker;
pub mod env;
pub mod factory;
pub mod openai;
pub mod supabase;
