use async_trait::async_trait;
use reqwest::Client;
use serde_json::json;
use tenderlens_core::{ChatMessage, LLMProvider, LLMResponse, Usage};
use tracing::info;

use crate::error::ProviderError;

const DEFAULT_BASE_URL: &str = "https://openrouter.ai/api/v1";
const DEFAULT_MODEL: &str = "openai/gpt-3.5-turbo";

/// Sampling and attribution settings sent with every request.
#[derive(Debug, Clone)]
pub struct RequestOptions {
    pub max_tokens: u32,
    pub temperature: f32,
    /// Sent as `HTTP-Referer` for OpenRouter app attribution.
    pub referer: String,
    /// Sent as `X-Title`.
    pub title: String,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self {
            max_tokens: 1000,
            temperature: 0.3,
            referer: "http://localhost:3000".to_string(),
            title: "PDF Summarizer".to_string(),
        }
    }
}

pub struct OpenRouterProvider {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
    options: RequestOptions,
}

impl OpenRouterProvider {
    /// A missing or empty key is accepted here and reported on first use, so
    /// local-only sessions never need one.
    pub fn new(api_key: Option<String>) -> Self {
        info!("Creating OpenRouterProvider");
        Self {
            client: Client::new(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            options: RequestOptions::default(),
        }
    }

    #[must_use]
    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    #[must_use]
    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    #[must_use]
    pub fn with_options(mut self, options: RequestOptions) -> Self {
        self.options = options;
        self
    }

    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    async fn try_send(&self, request: &serde_json::Value) -> Result<LLMResponse, ProviderError> {
        let api_key = self.api_key.as_deref().ok_or(ProviderError::MissingApiKey)?;

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .header("HTTP-Referer", &self.options.referer)
            .header("X-Title", &self.options.title)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ProviderError::Status(status));
        }

        let body = response.json::<serde_json::Value>().await?;

        let content = body["choices"][0]["message"]["content"]
            .as_str()
            .ok_or(ProviderError::MissingContent)?
            .to_string();

        let usage = body.get("usage").filter(|u| u.is_object()).map(|u| Usage {
            prompt_tokens: token_count(&u["prompt_tokens"]),
            completion_tokens: token_count(&u["completion_tokens"]),
            total_tokens: token_count(&u["total_tokens"]),
        });

        Ok(LLMResponse { content, usage })
    }
}

fn token_count(value: &serde_json::Value) -> u32 {
    value
        .as_u64()
        .and_then(|n| u32::try_from(n).ok())
        .unwrap_or(0)
}

#[async_trait]
impl LLMProvider for OpenRouterProvider {
    async fn chat(&self, messages: &[ChatMessage], model: &str) -> anyhow::Result<LLMResponse> {
        let request = json!({
            "model": model,
            "messages": messages,
            "max_tokens": self.options.max_tokens,
            "temperature": self.options.temperature,
        });

        info!("Sending request to OpenRouter: model={}", model);

        let response = self.try_send(&request).await?;

        info!("Received response from OpenRouter");
        Ok(response)
    }

    fn get_default_model(&self) -> &str {
        &self.model
    }
}
