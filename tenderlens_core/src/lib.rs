#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

pub mod source;
pub mod summary;

pub use source::SourceText;
pub use summary::{Confidence, SummarizerMode, SummaryResult};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LLMResponse {
    pub content: String,
    pub usage: Option<Usage>,
}

#[derive(Debug, Clone)]
pub struct Usage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

#[async_trait]
pub trait LLMProvider: Send + Sync {
    async fn chat(&self, messages: &[ChatMessage], model: &str) -> anyhow::Result<LLMResponse>;
    fn get_default_model(&self) -> &str;
}

/// Turns a whole document into a [`SummaryResult`].
///
/// The local pattern extractor and the remote model both sit behind this
/// trait and must produce the same output shape.
#[async_trait]
pub trait Summarizer: Send + Sync {
    async fn summarize(&self, text: &str) -> anyhow::Result<SummaryResult>;

    /// Which backend this is, used for logging and error hints.
    fn mode(&self) -> SummarizerMode;
}

#[async_trait]
impl<T: Summarizer + ?Sized> Summarizer for std::sync::Arc<T> {
    async fn summarize(&self, text: &str) -> anyhow::Result<SummaryResult> {
        (**self).summarize(text).await
    }

    fn mode(&self) -> SummarizerMode {
        (**self).mode()
    }
}
