use super::types::GenerateContentRequest;
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, error};

#[async_trait]
pub trait GenerativeClient: Send + Sync {
    /// Sends `prompt` upstream and returns the raw JSON answer.
    async fn generate_content(&self, prompt: &str) -> Result<Value>;
}

pub struct GeminiClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(base_url: &str, model: &str, api_key: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: format!(
                "{}/models/{}:generateContent",
                base_url.trim_end_matches('/'),
                model
            ),
            api_key: api_key.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate_content(&self, prompt: &str) -> Result<Value> {
        debug!("Forwarding prompt of {} bytes upstream", prompt.len());

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", self.api_key.as_str())])
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            error!("Google API Error ({}): {}", status, body);
            return Err(Error::Upstream {
                status,
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
            });
        }

        let body = response.text().await?;
        let value: Value = serde_json::from_str(&body)?;

        debug!("Received upstream answer with status {}", status);

        Ok(value)
    }
}
