use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};
use wellness_common::{Result, WellnessError};

use crate::client::TextGenerator;

const DEFAULT_BASE_URL: &str = "http://localhost:11434";

#[derive(Serialize)]
struct OpenAiRequest {
    model: String,
    messages: Vec<OpenAiMessage>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
struct OpenAiMessage {
    role: String,
    content: String,
}

#[derive(Deserialize)]
struct OpenAiResponse {
    choices: Vec<OpenAiChoice>,
}

#[derive(Deserialize)]
struct OpenAiChoice {
    message: OpenAiMessage,
}

/// Remote delegate for any OpenAI-compatible chat completions endpoint,
/// including Ollama's own `/v1` API.
pub struct OpenAiGenerator {
    base_url: String,
    model: String,
    api_key: Option<String>,
    timeout: Duration,
    http_client: reqwest::Client,
}

impl OpenAiGenerator {
    pub fn new(
        base_url: Option<String>,
        model: String,
        api_key: Option<String>,
        timeout: Duration,
    ) -> Self {
        Self {
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            model,
            api_key,
            timeout,
            http_client: reqwest::Client::new(),
        }
    }

    /// The whole prompt travels as a single user message.
    fn build_request_body(&self, prompt: &str) -> OpenAiRequest {
        OpenAiRequest {
            model: self.model.clone(),
            messages: vec![OpenAiMessage {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
        }
    }

    async fn send(&self, prompt: &str) -> Result<String> {
        let url = format!("{}/v1/chat/completions", self.base_url.trim_end_matches('/'));

        let mut http_req = self.http_client.post(&url).json(&self.build_request_body(prompt));
        if let Some(ref key) = self.api_key {
            http_req = http_req.bearer_auth(key);
        }

        let response = http_req
            .send()
            .await
            .map_err(|e| WellnessError::Generator(format!("Request to {url} failed: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            return Err(WellnessError::Generator(format!(
                "API error {status}: {body_text}"
            )));
        }

        let parsed: OpenAiResponse = response
            .json()
            .await
            .map_err(|e| WellnessError::Generator(format!("Failed to parse response: {e}")))?;

        let choice = parsed
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| WellnessError::Generator("No choices in response".to_string()))?;

        Ok(choice.message.content.trim().to_string())
    }
}

#[async_trait]
impl TextGenerator for OpenAiGenerator {
    async fn generate(&self, prompt: &str) -> Result<String> {
        debug!(base_url = %self.base_url, model = %self.model, "Requesting completion");

        let reply = tokio::time::timeout(self.timeout, self.send(prompt))
            .await
            .map_err(|_| {
                warn!(base_url = %self.base_url, timeout = ?self.timeout, "Completion request timed out");
                WellnessError::Generator(format!("Request timed out after {:?}", self.timeout))
            })??;

        if reply.is_empty() {
            return Err(WellnessError::Generator("Empty completion".to_string()));
        }
        Ok(reply)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
