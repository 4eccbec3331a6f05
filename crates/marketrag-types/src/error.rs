use thiserror::Error;

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("environment variable {0} is not set")]
    Missing(String),

    #[error("environment file {path}: {message}")]
    EnvFile { path: String, message: String },
}

/// Errors from the embedding service.
#[derive(Debug, Error)]
pub enum EmbeddingError {
    #[error("embedding request failed: {0}")]
    Http(String),

    #[error("embedding service error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("unexpected embedding response: {0}")]
    Deserialization(String),

    #[error("embedding count mismatch: sent {sent}, received {received}")]
    CountMismatch { sent: usize, received: usize },
}

/// Errors from the vector store service.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("vector store request failed: {0}")]
    Http(String),

    #[error("vector store error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("authentication failed")]
    AuthenticationFailed,

    #[error("unexpected vector store response: {0}")]
    Deserialization(String),
}

/// Errors from a retrieval query. Downstream service errors pass
/// through unmodified.
#[derive(Debug, Error)]
pub enum RetrievalError {
    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors from the document ingestion pipeline.
#[derive(Debug, Error)]
pub enum IngestError {
    #[error("invalid chunk parameters: {0}")]
    Chunking(String),

    #[error(transparent)]
    Embedding(#[from] EmbeddingError),

    #[error(transparent)]
    Store(#[from] StoreError),
}
