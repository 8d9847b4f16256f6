use tenderlens_conversation::render_turn;
use tenderlens_core::SummarizerMode;

use super::{DocumentSource, build_assistant, init_common_components, require_document};

/// Input parameters for the Summarize command strategy.
#[derive(Debug, Clone)]
pub struct SummarizeInput {
    pub source: Option<DocumentSource>,
    pub mode: Option<SummarizerMode>,
    /// Print the `SummaryResult` as JSON instead of rendered text
    pub json: bool,
}

/// Strategy for producing a full document summary.
#[derive(Debug, Clone, Copy)]
pub struct SummarizeStrategy;

impl super::CommandStrategy for SummarizeStrategy {
    type Input = SummarizeInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let document = require_document(input.source.as_ref())?;
        let common = init_common_components(input.mode)?;

        let mut assistant = build_assistant(&common, Some(document));
        let turn = assistant.summarize_preset().await?;

        if turn.is_error {
            anyhow::bail!("{}", turn.content);
        }

        match (&turn.summary, input.json) {
            (Some(summary), true) => println!("{}", serde_json::to_string_pretty(summary)?),
            _ => println!("{}", render_turn(turn)),
        }
        Ok(())
    }
}
