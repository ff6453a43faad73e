use async_trait::async_trait;
use nyaya_core::{AnswerProvider, ConversationTurn, GenerationResponse, Usage};
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tracing::info;

use crate::retry::retry_with_backoff;

/// Per-request timeout. Answers are short, so a hung request is a
/// provider problem, not a large payload.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Wait in seconds after each failed attempt.
const RETRY_DELAYS: [u64; 3] = [2, 4, 8];

pub struct OpenAiProvider {
    client: Client,
    api_key: String,
    base_url: String,
    temperature: f32,
    max_tokens: u32,
}

impl OpenAiProvider {
    #[must_use]
    pub fn new(api_key: String) -> Self {
        info!("Creating OpenAiProvider");
        Self {
            client: Client::new(),
            api_key,
            base_url: "https://api.openai.com/v1".to_string(),
            temperature: 0.2,
            max_tokens: 500,
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    #[must_use]
    pub const fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    #[must_use]
    pub const fn with_max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    fn build_request(&self, messages: &[ConversationTurn], model: &str) -> serde_json::Value {
        json!({
            "model": model,
            "messages": messages,
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
        })
    }

    /// Send one request and parse the completion.
    async fn try_send(&self, request: &serde_json::Value) -> anyhow::Result<GenerationResponse> {
        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .timeout(REQUEST_TIMEOUT)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body: serde_json::Value = response.json().await.unwrap_or_default();
            let detail = body["error"]["message"].as_str().unwrap_or("no detail");
            anyhow::bail!("OpenAI API returned {status}: {detail}");
        }

        let payload: serde_json::Value = response.json().await?;

        let content = payload["choices"][0]["message"]["content"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("Invalid response format: missing content"))?
            .to_string();

        let usage = payload["usage"].as_object().map(|u| Usage {
            prompt_tokens: u32::try_from(u["prompt_tokens"].as_u64().unwrap_or(0)).unwrap_or(0),
            completion_tokens: u32::try_from(u["completion_tokens"].as_u64().unwrap_or(0))
                .unwrap_or(0),
            total_tokens: u32::try_from(u["total_tokens"].as_u64().unwrap_or(0)).unwrap_or(0),
        });

        Ok(GenerationResponse { content, usage })
    }
}

#[async_trait]
impl AnswerProvider for OpenAiProvider {
    async fn complete(
        &self,
        messages: &[ConversationTurn],
        model: &str,
    ) -> anyhow::Result<GenerationResponse> {
        let request = self.build_request(messages, model);

        info!("Sending request to OpenAI API: model={}", model);

        let response = retry_with_backoff(|| self.try_send(&request), &RETRY_DELAYS).await?;

        info!("Received response from OpenAI API");
        Ok(response)
    }

    fn default_model(&self) -> &str {
        "gpt-4o-mini"
    }
}
