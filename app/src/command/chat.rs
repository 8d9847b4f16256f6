//! Interactive question session over one document at a time.

use tenderlens_core::SummarizerMode;
use tracing::info;

use super::{DocumentSource, build_assistant, init_common_components};

/// Input parameters for the Chat command strategy.
#[derive(Debug, Clone)]
pub struct ChatInput {
    /// Starting document; `/load` can replace it during the session
    pub source: Option<DocumentSource>,
    pub mode: Option<SummarizerMode>,
}

/// Strategy for the interactive session.
#[derive(Debug, Clone, Copy)]
pub struct ChatStrategy;

impl super::CommandStrategy for ChatStrategy {
    type Input = ChatInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let common = init_common_components(input.mode)?;
        let document = input.source.as_ref().map(DocumentSource::load).transpose()?;

        let mut assistant = build_assistant(&common, document);
        assistant.run_interactive().await?;

        info!(
            "Conversation ended: {} turns",
            assistant.transcript().len()
        );
        Ok(())
    }
}
