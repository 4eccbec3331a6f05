//! OpenAI embeddings client.
//!
//! Implements the `Embedder` trait from `marketrag-core` against the
//! OpenAI embeddings endpoint (`POST {base}/embeddings`).
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never
//! logged or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use marketrag_core::embedder::Embedder;
use marketrag_types::error::EmbeddingError;

/// Default embedding model.
pub const DEFAULT_MODEL: &str = "text-embedding-3-small";

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Hosted OpenAI embedding client.
///
/// # API Key Security
///
/// Does NOT derive Debug: the key is stored as a [`SecretString`] and
/// is only exposed when building the Authorization header.
pub struct OpenAiEmbedder {
    client: reqwest::Client,
    api_key: SecretString,
    base_url: String,
    model: String,
    dimension: usize,
}

impl OpenAiEmbedder {
    /// Create an embedder for the default model.
    pub fn new(api_key: SecretString) -> Self {
        Self::with_model(api_key, DEFAULT_MODEL)
    }

    /// Create an embedder for a specific model.
    pub fn with_model(api_key: SecretString, model: &str) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("failed to create reqwest client");

        Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: model.to_string(),
            dimension: dimension_for_model(model),
        }
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self) -> String {
        format!("{}/embeddings", self.base_url.trim_end_matches('/'))
    }
}

#[cfg(test)]
impl OpenAiEmbedder {
    pub(crate) fn api_key(&self) -> &SecretString {
        &self.api_key
    }
}

fn dimension_for_model(model: &str) -> usize {
    match model {
        "text-embedding-3-small" => 1536,
        "text-embedding-3-large" => 3072,
        "text-embedding-ada-002" => 1536,
        _ => 1536,
    }
}

/// Request body for the embeddings endpoint.
#[derive(Debug, Serialize)]
struct EmbeddingRequest<'a> {
    model: &'a str,
    input: &'a [String],
}

#[derive(Debug, Deserialize)]
struct EmbeddingResponse {
    data: Vec<EmbeddingRow>,
}

#[derive(Debug, Deserialize)]
struct EmbeddingRow {
    index: usize,
    embedding: Vec<f32>,
}

impl Embedder for OpenAiEmbedder {
    async fn embed(&self, texts: &[String]) -> Result<Vec<Vec<f32>>, EmbeddingError> {
        if texts.is_empty() {
            return Ok(Vec::new());
        }

        let request = EmbeddingRequest {
            model: &self.model,
            input: texts,
        };

        tracing::debug!(count = texts.len(), model = %self.model, "requesting embeddings");
        let response = self
            .client
            .post(self.url())
            .bearer_auth(self.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| EmbeddingError::Http(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(EmbeddingError::AuthenticationFailed);
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(EmbeddingError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let mut payload: EmbeddingResponse = response
            .json()
            .await
            .map_err(|e| EmbeddingError::Deserialization(e.to_string()))?;

        if payload.data.len() != texts.len() {
            return Err(EmbeddingError::CountMismatch {
                sent: texts.len(),
                received: payload.data.len(),
            });
        }

        // The API documents input order, but rows carry an index; honor it.
        payload.data.sort_by_key(|row| row.index);
        Ok(payload.data.into_iter().map(|row| row.embedding).collect())
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_uses_default_model_and_base_url() {
        let embedder = OpenAiEmbedder::new(SecretString::from("sk-test".to_string()));
        assert_eq!(embedder.model_name(), "text-embedding-3-small");
        assert_eq!(embedder.dimension(), 1536);
        assert_eq!(embedder.url(), "https://api.openai.com/v1/embeddings");
    }

    #[test]
    fn test_new_stores_exactly_the_given_key() {
        let embedder = OpenAiEmbedder::new(SecretString::from("sk-exact-value".to_string()));
        assert_eq!(embedder.api_key.expose_secret(), "sk-exact-value");
    }

    #[test]
    fn test_with_model_sets_dimension() {
        let embedder = OpenAiEmbedder::with_model(
            SecretString::from("sk-test".to_string()),
            "text-embedding-3-large",
        );
        assert_eq!(embedder.dimension(), 3072);
    }

    #[test]
    fn test_with_base_url_trims_trailing_slash_in_url() {
        let embedder = OpenAiEmbedder::new(SecretString::from("sk-test".to_string()))
            .with_base_url("http://localhost:8080/".to_string());
        assert_eq!(embedder.url(), "http://localhost:8080/embeddings");
    }

    #[test]
    fn test_request_body_shape() {
        let input = vec!["first".to_string(), "second".to_string()];
        let request = EmbeddingRequest {
            model: "text-embedding-3-small",
            input: &input,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["model"], "text-embedding-3-small");
        assert_eq!(value["input"][1], "second");
    }

    #[test]
    fn test_response_parsing() {
        let json = r#"{
            "data": [
                {"index": 1, "embedding": [0.4, 0.5]},
                {"index": 0, "embedding": [0.1, 0.2]}
            ],
            "model": "text-embedding-3-small",
            "usage": {"prompt_tokens": 4, "total_tokens": 4}
        }"#;
        let mut payload: EmbeddingResponse = serde_json::from_str(json).unwrap();
        payload.data.sort_by_key(|row| row.index);
        assert_eq!(payload.data[0].embedding, vec![0.1, 0.2]);
        assert_eq!(payload.data[1].embedding, vec![0.4, 0.5]);
    }
}
