//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy type with its own input, dispatched
//! statically from `main`.

use std::path::PathBuf;

use tenderlens_config::Config;
use tenderlens_conversation::Assistant;
use tenderlens_core::SummarizerMode;
use tenderlens_document::{LoadedDocument, load_document, sample_document};
use tenderlens_providers::{OpenRouterProvider, RemoteSummarizer, RequestOptions};
use tracing::info;

mod ask;
mod chat;
mod info;
mod init;
mod summarize;
mod text;
mod version;

pub use ask::{AskInput, AskStrategy};
pub use chat::{ChatInput, ChatStrategy};
pub use info::InfoStrategy;
pub use init::InitStrategy;
pub use summarize::{SummarizeInput, SummarizeStrategy};
pub use text::TextStrategy;
pub use version::VersionStrategy;

/// Core trait defining the contract for all command strategies.
///
/// # Design Principles
/// - **Static dispatch**: All calls are monomorphized at compile time
/// - **Type safety**: Each strategy defines its own input type via associated type
pub trait CommandStrategy: Send + Sync + 'static {
    /// The input type this strategy accepts.
    type Input;

    /// Execute the command with the given input.
    ///
    /// # Errors
    /// Returns an error if command execution fails.
    async fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Where a command reads its document from.
#[derive(Debug, Clone)]
pub enum DocumentSource {
    File(PathBuf),
    Sample,
}

impl DocumentSource {
    pub fn load(&self) -> anyhow::Result<LoadedDocument> {
        match self {
            Self::File(path) => Ok(load_document(path)?),
            Self::Sample => Ok(sample_document()),
        }
    }
}

/// Load the document a command needs, or explain how to provide one.
fn require_document(source: Option<&DocumentSource>) -> anyhow::Result<LoadedDocument> {
    source
        .ok_or_else(|| anyhow::anyhow!("No document given. Pass --file <path> or --sample."))?
        .load()
}

/// Shared components for commands that answer questions.
struct CommonComponents {
    config: Config,
    mode: SummarizerMode,
}

/// Load config (defaults when absent) and settle the summarizer mode.
///
/// An explicit `--mode` wins over `summarizer.mode` from the config file.
fn init_common_components(mode: Option<SummarizerMode>) -> anyhow::Result<CommonComponents> {
    let config = Config::load_or_default()?;
    let mode = mode.unwrap_or(config.summarizer.mode);
    info!("Summarizer mode: {mode}");
    Ok(CommonComponents { config, mode })
}

fn build_remote(config: &Config) -> RemoteSummarizer<OpenRouterProvider> {
    let openrouter = &config.providers.openrouter;
    let provider = OpenRouterProvider::new(openrouter.resolved_api_key())
        .with_base_url(openrouter.base_url.clone())
        .with_model(openrouter.model.clone())
        .with_options(RequestOptions {
            max_tokens: openrouter.max_tokens,
            temperature: openrouter.temperature,
            referer: openrouter.referer.clone(),
            title: openrouter.title.clone(),
        });

    RemoteSummarizer::new(provider)
}

fn build_assistant(
    common: &CommonComponents,
    document: Option<LoadedDocument>,
) -> Assistant<RemoteSummarizer<OpenRouterProvider>> {
    let assistant = Assistant::new(build_remote(&common.config), common.mode);
    match document {
        Some(document) => assistant.with_document(document),
        None => assistant,
    }
}
