use tenderlens_conversation::render_turn;
use tenderlens_core::SummarizerMode;

use super::{DocumentSource, build_assistant, init_common_components, require_document};

/// Input parameters for the Ask command strategy.
#[derive(Debug, Clone)]
pub struct AskInput {
    pub source: Option<DocumentSource>,
    pub query: String,
    pub mode: Option<SummarizerMode>,
}

/// Strategy for answering a single question about a document.
///
/// Runs exactly one orchestrated turn: a targeted answer when the question
/// names a known category, otherwise a full summary.
#[derive(Debug, Clone, Copy)]
pub struct AskStrategy;

impl super::CommandStrategy for AskStrategy {
    type Input = AskInput;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let document = require_document(input.source.as_ref())?;
        let common = init_common_components(input.mode)?;

        let mut assistant = build_assistant(&common, Some(document));
        let turn = assistant.submit(&input.query).await?;

        println!("{}", render_turn(turn));
        Ok(())
    }
}
