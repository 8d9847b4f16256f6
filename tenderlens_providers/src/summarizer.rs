use async_trait::async_trait;
use tenderlens_core::{ChatMessage, LLMProvider, Summarizer, SummarizerMode, SummaryResult};
use tracing::{debug, info};

use crate::error::ProviderError;

/// Instructions prepended to the document text.
pub const SUMMARY_PROMPT: &str = "You are a summarizer for Indian government procurement officers. \
From the provided document extract the most important bullets an officer needs to act on: \
procurement value, submission deadline(s), eligibility criteria, required documents, penalties, \
key contacts, and suggested next steps. Return JSON with keys short_summary, \
relevance_to_officials (array), action_items (array), confidence_estimate.";

/// Summarizer that delegates to a hosted chat model.
///
/// One request per call; failures are returned to the caller as-is.
pub struct RemoteSummarizer<P: LLMProvider> {
    provider: P,
    model: String,
}

impl<P: LLMProvider> RemoteSummarizer<P> {
    /// Use the provider's default model.
    pub fn new(provider: P) -> Self {
        let model = provider.get_default_model().to_string();
        Self { provider, model }
    }

    #[must_use]
    pub fn with_model(mut self, model: String) -> Self {
        self.model = model;
        self
    }

    fn build_prompt(text: &str) -> String {
        format!("{SUMMARY_PROMPT}\n\nDocument text:\n{text}")
    }
}

#[async_trait]
impl<P: LLMProvider> Summarizer for RemoteSummarizer<P> {
    async fn summarize(&self, text: &str) -> anyhow::Result<SummaryResult> {
        info!(model = %self.model, chars = text.len(), "Requesting remote summary");

        let messages = [ChatMessage::user(Self::build_prompt(text))];
        let response = self.provider.chat(&messages, &self.model).await?;

        if let Some(usage) = &response.usage {
            debug!(
                "Tokens: {} prompt + {} completion = {} total",
                usage.prompt_tokens, usage.completion_tokens, usage.total_tokens
            );
        }

        Ok(parse_summary(&response.content)?)
    }

    fn mode(&self) -> SummarizerMode {
        SummarizerMode::Remote
    }
}

/// Parse a model reply into a summary.
///
/// Models often wrap JSON in a markdown fence; the fence is stripped before
/// parsing.
pub fn parse_summary(content: &str) -> Result<SummaryResult, ProviderError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Err(ProviderError::MissingContent);
    }

    Ok(serde_json::from_str(strip_code_fence(trimmed))?)
}

fn strip_code_fence(content: &str) -> &str {
    let Some(rest) = content.strip_prefix("```") else {
        return content;
    };
    // Drop the info string ("json") on the opening fence line.
    let body = rest.split_once('\n').map_or("", |(_, body)| body);
    body.trim_end().strip_suffix("```").unwrap_or(body).trim()
}
