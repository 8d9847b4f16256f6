use super::{DocumentSource, require_document};

/// Strategy for printing the raw extracted text of a document.
#[derive(Debug, Clone, Copy)]
pub struct TextStrategy;

impl super::CommandStrategy for TextStrategy {
    type Input = Option<DocumentSource>;

    async fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let document = require_document(input.as_ref())?;
        println!("{}", document.text);
        Ok(())
    }
}
