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

//! Hosted-model summarization.
//!
//! [`OpenRouterProvider`] talks to an OpenAI-compatible chat-completions
//! endpoint and [`RemoteSummarizer`] turns its reply into a `SummaryResult`.

mod error;
mod openrouter;
mod summarizer;

pub use error::ProviderError;
pub use openrouter::{OpenRouterProvider, RequestOptions};
pub use summarizer::{RemoteSummarizer, SUMMARY_PROMPT, parse_summary};
