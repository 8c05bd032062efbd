use mood_notebook_types::{Result, Value, anyhow, json::json, reqwest};

use crate::provider::InferenceConfig;

/// Thin client for the hosted sentiment inference endpoint.
///
/// One outbound POST per call, no retries, no caching, no timeout beyond
/// what the underlying stack enforces. The upstream body is relayed as an
/// opaque JSON value; interpreting its label is the caller's job.
#[derive(Clone)]
pub struct InferenceClient {
    client: reqwest::Client,
    config: InferenceConfig,
}

impl InferenceClient {
    pub fn new(config: InferenceConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &InferenceConfig {
        &self.config
    }

    /// Forwards `{"inputs": text}` with the given bearer credential and
    /// returns whatever JSON the service answers with, regardless of its
    /// status code. Connection failures and non-JSON bodies surface as
    /// errors carrying the underlying message.
    pub async fn classify_text(&self, api_key: &str, text: &str) -> Result<Value> {
        let response = self
            .client
            .post(&self.config.endpoint)
            .bearer_auth(api_key)
            .json(&json!({ "inputs": text }))
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "Inference request failed");
                anyhow!("Inference request failed: {e}")
            })?;

        let status = response.status();
        let value = response.json::<Value>().await.map_err(|e| {
            tracing::error!(error = %e, status = %status, "Failed to read inference response");
            anyhow!("Failed to read inference response: {e}")
        })?;

        if !status.is_success() {
            tracing::warn!(status = %status, "Inference service answered with an error status");
        }

        Ok(value)
    }
}
