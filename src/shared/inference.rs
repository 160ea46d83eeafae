use reqwest::{Client, StatusCode};
use serde_json::{json, Value};
use thiserror::Error;
use tracing::debug;

use crate::shared::config::InferenceConfig;

/// Any failure of the remote text-generation call. Callers never distinguish
/// the subtypes; every variant of trouble (connect error, timeout, non-200
/// status, body that is not the expected JSON) resolves the same way, by
/// falling back to canned content.
#[derive(Debug, Error)]
#[error("inference unavailable: {reason}")]
pub struct InferenceUnavailable {
    reason: String,
}

impl InferenceUnavailable {
    fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct GenerationParams {
    pub max_length: u32,
    pub temperature: f32,
}

#[derive(Debug, Clone)]
pub struct InferenceClient {
    endpoint: String,
    api_token: String,
    http: Client,
}

impl InferenceClient {
    pub fn new(config: &InferenceConfig) -> anyhow::Result<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to build HTTP client: {}", e))?;

        Ok(Self {
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            api_token: config.api_token.clone(),
            http,
        })
    }

    /// Run one generation request and return the raw generated text.
    pub async fn generate(
        &self,
        prompt: &str,
        params: GenerationParams,
    ) -> Result<String, InferenceUnavailable> {
        let body = json!({
            "inputs": prompt,
            "parameters": {
                "max_length": params.max_length,
                "temperature": params.temperature,
            }
        });

        let mut request = self.http.post(&self.endpoint).json(&body);
        if !self.api_token.is_empty() {
            request = request.bearer_auth(&self.api_token);
        }

        let response = request
            .send()
            .await
            .map_err(|e| InferenceUnavailable::new(format!("request failed: {}", e)))?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(InferenceUnavailable::new(format!(
                "model endpoint responded {}",
                status
            )));
        }

        let value: Value = response
            .json()
            .await
            .map_err(|e| InferenceUnavailable::new(format!("invalid JSON body: {}", e)))?;

        let text = extract_generated_text(&value)
            .ok_or_else(|| InferenceUnavailable::new("no generated_text in response"))?;

        debug!(chars = text.len(), "Received generated text");
        Ok(text)
    }
}

/// The inference endpoint returns either a JSON array whose first element
/// carries `generated_text`, or a bare object with the same field.
fn extract_generated_text(value: &Value) -> Option<String> {
    let item = match value {
        Value::Array(items) => items.first()?,
        other => other,
    };
    item.get("generated_text")?.as_str().map(str::to_string)
}
