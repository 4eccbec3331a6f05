//! Shared domain types for marketrag.
//!
//! This crate contains the types used across the marketrag retrieval
//! backend: document chunks, scored query results, the bundler
//! configuration object, and the error taxonomy.
//!
//! Zero infrastructure dependencies -- only serde and thiserror.

pub mod bundle;
pub mod document;
pub mod error;
