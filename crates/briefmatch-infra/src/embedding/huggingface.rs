//! HuggingFaceEmbedder -- concrete [`Embedder`] for the Hugging Face
//! inference API (feature-extraction pipeline).
//!
//! One POST per text with a bounded timeout and no retries. Every failure
//! mode is reported as an [`EmbeddingError`]; callers that must always get a
//! vector wrap this in `FallbackEmbedder`.
//!
//! The API key is wrapped in [`secrecy::SecretString`] and is never logged
//! or included in `Debug` output.

use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;

use briefmatch_core::embedding::embedder::Embedder;
use briefmatch_types::config::EmbeddingConfig;
use briefmatch_types::error::EmbeddingError;

#[derive(Serialize)]
struct InferenceRequest<'a> {
    inputs: &'a str,
    options: InferenceOptions,
}

#[derive(Serialize)]
struct InferenceOptions {
    wait_for_model: bool,
    use_cache: bool,
}

/// Remote embedding provider.
pub struct HuggingFaceEmbedder {
    client: reqwest::Client,
    api_key: Option<SecretString>,
    base_url: String,
    model: String,
    dimension: usize,
    timeout: Duration,
}

impl HuggingFaceEmbedder {
    /// Build an embedder from config. Without `api_key` requests are sent
    /// anonymously.
    pub fn new(
        config: &EmbeddingConfig,
        api_key: Option<SecretString>,
    ) -> Result<Self, EmbeddingError> {
        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| EmbeddingError::Transport(format!("failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            base_url: config.endpoint.trim_end_matches('/').to_string(),
            model: config.model.clone(),
            dimension: config.dimension,
            timeout: Duration::from_secs(config.timeout_secs),
        })
    }

    /// Override the base URL (useful for testing or proxies).
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn url(&self) -> String {
        format!("{}/{}", self.base_url, self.model)
    }
}

/// Accept only a non-empty flat array of numbers.
fn parse_embedding(body: serde_json::Value) -> Result<Vec<f32>, EmbeddingError> {
    if let Some(error) = body.get("error") {
        let message = error
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| error.to_string());
        return Err(EmbeddingError::Provider(message));
    }

    let items = body
        .as_array()
        .ok_or_else(|| EmbeddingError::Malformed("expected a JSON array".to_string()))?;
    if items.is_empty() {
        return Err(EmbeddingError::Malformed("empty array".to_string()));
    }

    items
        .iter()
        .map(|v| {
            v.as_f64()
                .map(|x| x as f32)
                .ok_or_else(|| EmbeddingError::Malformed(format!("non-numeric element: {v}")))
        })
        .collect()
}

impl Embedder for HuggingFaceEmbedder {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, EmbeddingError> {
        let body = InferenceRequest {
            inputs: text,
            options: InferenceOptions {
                wait_for_model: false,
                use_cache: true,
            },
        };

        let mut request = self
            .client
            .post(self.url())
            .timeout(self.timeout)
            .header("content-type", "application/json")
            .json(&body);
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key.expose_secret());
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                EmbeddingError::Timeout(self.timeout.as_millis() as u64)
            } else {
                EmbeddingError::Transport(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), model = %self.model, "Embedding request rejected");
            return Err(EmbeddingError::Status(status.as_u16()));
        }

        let body: serde_json::Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                EmbeddingError::Timeout(self.timeout.as_millis() as u64)
            } else {
                EmbeddingError::Malformed(e.to_string())
            }
        })?;

        parse_embedding(body)
    }

    fn model_name(&self) -> &str {
        &self.model
    }

    fn dimension(&self) -> usize {
        self.dimension
    }
}
