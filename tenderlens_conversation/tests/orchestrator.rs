//! Turn orchestration with stub remote summarizers.

use std::sync::Arc;

use async_trait::async_trait;
use tenderlens_conversation::{
    Assistant, ConversationError, PRESET_PROMPT, REMOTE_ERROR_HINT, SUMMARY_INTRO,
};
use tenderlens_core::{
    ChatMessage, Confidence, LLMProvider, LLMResponse, Role, SourceText, Summarizer,
    SummarizerMode, SummaryResult,
};
use tenderlens_document::{DocumentKind, LoadedDocument, sample_document};
use tenderlens_providers::{OpenRouterProvider, RemoteSummarizer};

struct UnreachableRemote;

#[async_trait]
impl Summarizer for UnreachableRemote {
    async fn summarize(&self, _text: &str) -> anyhow::Result<SummaryResult> {
        anyhow::bail!("API request failed with status: 503 Service Unavailable")
    }

    fn mode(&self) -> SummarizerMode {
        SummarizerMode::Remote
    }
}

struct CannedRemote;

#[async_trait]
impl Summarizer for CannedRemote {
    async fn summarize(&self, _text: &str) -> anyhow::Result<SummaryResult> {
        Ok(SummaryResult {
            short_summary: "Remote summary".to_string(),
            relevance_to_officials: vec!["Budget approval needed".to_string()],
            action_items: vec!["Forward to finance".to_string()],
            confidence_estimate: Confidence::Medium,
        })
    }

    fn mode(&self) -> SummarizerMode {
        SummarizerMode::Remote
    }
}

struct ProseProvider;

#[async_trait]
impl LLMProvider for ProseProvider {
    async fn chat(&self, _messages: &[ChatMessage], _model: &str) -> anyhow::Result<LLMResponse> {
        Ok(LLMResponse {
            content: "Sure! Here is your summary.".to_string(),
            usage: None,
        })
    }

    fn get_default_model(&self) -> &str {
        "prose-model"
    }
}

fn text_document(text: &str) -> LoadedDocument {
    LoadedDocument {
        name: "notice.txt".to_string(),
        kind: DocumentKind::Text,
        text: SourceText::from(text),
    }
}

#[tokio::test]
async fn no_document_appends_nothing() {
    let mut assistant = Assistant::new(UnreachableRemote, SummarizerMode::Local);

    let result = assistant.submit("deadline?").await;
    assert!(matches!(result, Err(ConversationError::NoDocument)));
    assert!(assistant.transcript().is_empty());
}

#[tokio::test]
async fn blank_document_counts_as_missing() {
    let mut assistant = Assistant::new(UnreachableRemote, SummarizerMode::Local)
        .with_document(text_document("   \n\t"));

    assert!(matches!(
        assistant.summarize_preset().await,
        Err(ConversationError::NoDocument)
    ));
    assert!(assistant.transcript().is_empty());
}

#[tokio::test]
async fn targeted_question_gets_text_answer() {
    let mut assistant = Assistant::new(UnreachableRemote, SummarizerMode::Remote)
        .with_document(sample_document());

    let turn = assistant
        .submit("What is the submission date?")
        .await
        .expect("document is loaded");

    assert_eq!(turn.role, Role::Assistant);
    assert!(turn.summary.is_none());
    assert!(!turn.is_error);
    assert_eq!(
        turn.content,
        "📅 **Deadlines Found:**\n• 15/01/2024\n• 28/02/2024"
    );

    let turns = assistant.transcript().turns();
    assert_eq!(turns.len(), 2);
    assert_eq!(turns[0].role, Role::User);
    assert_eq!(turns[0].content, "What is the submission date?");
}

#[tokio::test]
async fn unmatched_question_falls_back_to_local_summary() {
    let mut assistant = Assistant::new(UnreachableRemote, SummarizerMode::Local)
        .with_document(sample_document());

    let turn = assistant
        .submit("unrelated nonsense")
        .await
        .expect("document is loaded");

    assert_eq!(turn.content, SUMMARY_INTRO);
    let summary = turn.summary.as_ref().expect("summary turn");
    assert_eq!(summary.confidence_estimate, Confidence::High);
    assert_eq!(summary.relevance_to_officials.len(), 5);
}

#[tokio::test]
async fn remote_failure_becomes_error_turn() {
    let mut assistant = Assistant::new(UnreachableRemote, SummarizerMode::Remote)
        .with_document(sample_document());

    let turn = assistant
        .summarize_preset()
        .await
        .expect("failures are reported as turns");

    assert!(turn.is_error);
    assert!(turn.summary.is_none());
    assert_eq!(
        turn.content,
        format!(
            "Error: API request failed with status: 503 Service Unavailable. {REMOTE_ERROR_HINT}"
        )
    );
    assert_eq!(assistant.transcript().turns()[0].content, PRESET_PROMPT);
}

#[tokio::test]
async fn mode_switch_changes_backend() {
    let remote: Arc<dyn Summarizer> = Arc::new(CannedRemote);
    let mut assistant =
        Assistant::new(remote, SummarizerMode::Local).with_document(sample_document());

    let local = assistant
        .summarize_preset()
        .await
        .expect("document is loaded")
        .summary
        .clone()
        .expect("summary turn");
    assert!(local.short_summary.starts_with("GOVERNMENT OF INDIA"));

    assistant.set_mode(SummarizerMode::Remote);
    let remote = assistant
        .summarize_preset()
        .await
        .expect("document is loaded")
        .summary
        .clone()
        .expect("summary turn");
    assert_eq!(remote.short_summary, "Remote summary");
    assert_eq!(assistant.transcript().user_turns(), 2);
}

#[tokio::test]
async fn loading_replaces_document_and_keeps_history() {
    let mut assistant = Assistant::new(UnreachableRemote, SummarizerMode::Local)
        .with_document(sample_document());
    assistant
        .submit("deadline")
        .await
        .expect("document is loaded");

    assistant.load(text_document("Circular on leave rules"));
    let turn = assistant
        .submit("deadline")
        .await
        .expect("document is loaded");

    assert_eq!(
        turn.content,
        "❌ No specific deadlines found in the document."
    );
    assert_eq!(assistant.transcript().len(), 4);
    assert_eq!(
        assistant.document().map(|doc| doc.name.as_str()),
        Some("notice.txt")
    );
}

#[tokio::test]
async fn load_path_reads_text_files() {
    let dir = tempfile::tempdir().expect("temp dir should be created");
    let path = dir.path().join("rfq.txt");
    std::fs::write(&path, "Request for Quotation\nContact: buyer@dept.gov.in")
        .expect("write should succeed");

    let mut assistant = Assistant::new(UnreachableRemote, SummarizerMode::Local);
    let doc = assistant.load_path(&path).expect("text file should load");
    assert_eq!(doc.name, "rfq.txt");

    let turn = assistant
        .submit("email?")
        .await
        .expect("document is loaded");
    assert_eq!(turn.content, "📞 **Contact Information:**\n• buyer@dept.gov.in");
}

#[tokio::test]
async fn load_path_rejects_unknown_extensions() {
    let mut assistant = Assistant::new(UnreachableRemote, SummarizerMode::Local);
    let result = assistant.load_path(std::path::Path::new("notes.docx"));
    assert!(matches!(result, Err(ConversationError::Document(_))));
    assert!(assistant.document().is_none());
}

#[tokio::test]
async fn missing_api_key_turn_reads_cleanly() {
    let remote = RemoteSummarizer::new(OpenRouterProvider::new(None));
    let mut assistant =
        Assistant::new(remote, SummarizerMode::Remote).with_document(sample_document());

    let turn = assistant
        .summarize_preset()
        .await
        .expect("failures are reported as turns");

    assert!(turn.is_error);
    assert_eq!(
        turn.content,
        "Error: OpenRouter API key not found. Set providers.openrouter.api_key or the \
         OPENROUTER_API_KEY environment variable, or use local mode. \
         Try switching to local mode or check your API key."
    );
}

#[tokio::test]
async fn unparseable_reply_detail_appears_once() {
    let remote = RemoteSummarizer::new(ProseProvider);
    let mut assistant =
        Assistant::new(remote, SummarizerMode::Remote).with_document(sample_document());

    let turn = assistant
        .summarize_preset()
        .await
        .expect("failures are reported as turns");

    assert!(turn.is_error);
    assert_eq!(
        turn.content,
        format!(
            "Error: Failed to parse summary JSON: expected value at line 1 column 1. {REMOTE_ERROR_HINT}"
        )
    );
}
