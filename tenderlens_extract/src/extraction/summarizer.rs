use async_trait::async_trait;
use tenderlens_core::{Summarizer, SummarizerMode, SummaryResult};
use tracing::info;

use super::engine::extract;

/// In-process summarizer backed by the pattern extractor.
///
/// This backend cannot fail; it exists so the orchestrator can treat the
/// local and remote paths through the same [`Summarizer`] seam.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalSummarizer;

impl LocalSummarizer {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Summarizer for LocalSummarizer {
    async fn summarize(&self, text: &str) -> anyhow::Result<SummaryResult> {
        let result = extract(text);
        info!(
            relevance = result.relevance_to_officials.len(),
            confidence = %result.confidence_estimate,
            "Local summary built"
        );
        Ok(result)
    }

    fn mode(&self) -> SummarizerMode {
        SummarizerMode::Local
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    #[expect(clippy::expect_used, reason = "Test failure should panic with context")]
    async fn matches_direct_extraction() {
        let text = "Tender for supply. Last date 28/02/2024.";
        let summary = LocalSummarizer::new()
            .summarize(text)
            .await
            .expect("local summarizer never fails");
        assert_eq!(summary, extract(text));
        assert_eq!(LocalSummarizer.mode(), SummarizerMode::Local);
    }
}
