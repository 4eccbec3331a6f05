//! Supabase vector store client.
//!
//! Implements the `VectorStore` trait from `marketrag-core` against the
//! Supabase REST API: rows are inserted through
//! `POST {url}/rest/v1/documents` and nearest-neighbor queries go
//! through the server-side matching function at
//! `POST {url}/rest/v1/rpc/match_documents`. Both names are fixed at
//! construction; the similarity computation itself lives in the
//! database function.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use marketrag_core::store::VectorStore;
use marketrag_types::document::{ChunkMetadata, DocumentChunk, ScoredDocument};
use marketrag_types::error::StoreError;

/// Table holding embedded document chunks.
pub const DOCUMENTS_TABLE: &str = "documents";

/// Server-side nearest-neighbor function over that table.
pub const MATCH_FUNCTION: &str = "match_documents";

/// Supabase REST client bound to the documents table.
///
/// # API Key Security
///
/// Does NOT derive Debug: the service key is stored as a
/// [`SecretString`] and is only exposed when building request headers.
pub struct SupabaseVectorStore {
    client: reqwest::Client,
    base_url: String,
    api_key: SecretString,
    table: String,
    query_fn: String,
}

impl SupabaseVectorStore {
    /// Create a store client for a Supabase project.
    ///
    /// Binds the table name and matching function to their literals;
    /// no request is sent until an operation is called.
    pub fn new(base_url: impl Into<String>, api_key: SecretString) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            base_url: base_url.into(),
            api_key,
            table: DOCUMENTS_TABLE.to_string(),
            query_fn: MATCH_FUNCTION.to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn query_function(&self) -> &str {
        &self.query_fn
    }

    fn rows_url(&self) -> String {
        format!(
            "{}/rest/v1/{}",
            self.base_url.trim_end_matches('/'),
            self.table
        )
    }

    fn rpc_url(&self) -> String {
        format!(
            "{}/rest/v1/rpc/{}",
            self.base_url.trim_end_matches('/'),
            self.query_fn
        )
    }

    fn check_status(status: reqwest::StatusCode) -> Result<(), StoreError> {
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(StoreError::AuthenticationFailed);
        }
        Ok(())
    }
}

#[cfg(test)]
impl SupabaseVectorStore {
    pub(crate) fn api_key(&self) -> &SecretString {
        &self.api_key
    }
}

/// One row of the documents table, as inserted.
#[derive(Debug, Serialize)]
struct InsertRow<'a> {
    content: &'a str,
    metadata: &'a ChunkMetadata,
    embedding: &'a [f32],
}

/// Arguments for the matching function.
#[derive(Debug, Serialize)]
struct MatchArgs<'a> {
    query_embedding: &'a [f32],
    match_count: usize,
    filter: &'a serde_json::Value,
}

impl VectorStore for SupabaseVectorStore {
    async fn upsert(
        &self,
        chunks: &[DocumentChunk],
        embeddings: &[Vec<f32>],
    ) -> Result<(), StoreError> {
        debug_assert_eq!(chunks.len(), embeddings.len());
        let rows: Vec<InsertRow<'_>> = chunks
            .iter()
            .zip(embeddings)
            .map(|(chunk, embedding)| InsertRow {
                content: &chunk.content,
                metadata: &chunk.metadata,
                embedding,
            })
            .collect();

        tracing::debug!(rows = rows.len(), table = %self.table, "inserting rows");
        let response = self
            .client
            .post(self.rows_url())
            .header("apikey", self.api_key.expose_secret())
            .bearer_auth(self.api_key.expose_secret())
            .header("Prefer", "return=minimal")
            .json(&rows)
            .send()
            .await
            .map_err(|e| StoreError::Http(e.to_string()))?;

        let status = response.status();
        Self::check_status(status)?;
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Api {
                status: status.as_u16(),
                message,
            });
        }
        Ok(())
    }

    async fn query_nearest(
        &self,
        embedding: &[f32],
        limit: usize,
        filter: Option<&serde_json::Value>,
    ) -> Result<Vec<ScoredDocument>, StoreError> {
        // The database function declares `filter jsonb default '{}'`;
        // send the empty object explicitly when no filter is given.
        let empty = serde_json::json!({});
        let args = MatchArgs {
            query_embedding: embedding,
            match_count: limit,
            filter: filter.unwrap_or(&empty),
        };

        let response = self
            .client
            .post(self.rpc_url())
            .header("apikey", self.api_key.expose_secret())
            .bearer_auth(self.api_key.expose_secret())
            .json(&args)
            .send()
            .await
            .map_err(|e| StoreError::Http(e.to_string()))?;

        let status = response.status();
        Self::check_status(status)?;
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StoreError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<Vec<ScoredDocument>>()
            .await
            .map_err(|e| StoreError::Deserialization(e.to_string()))
    }
}
