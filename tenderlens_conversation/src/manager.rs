//! Turn orchestrator for document questions.
//!
//! The `Assistant` owns all session state explicitly: the loaded document,
//! the transcript and which summarizer answers open-ended prompts.

use std::io::Write;
use std::path::Path;
use std::sync::Arc;

use tenderlens_core::{SourceText, Summarizer, SummarizerMode};
use tenderlens_document::{DocumentError, LoadedDocument, load_document};
use tenderlens_extract::{LocalSummarizer, route};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::render::render_turn;
use crate::session::{Transcript, Turn};

/// Prompt used by the one-shot "summarize" action.
pub const PRESET_PROMPT: &str = "Summarize for procurement officer";
/// Content of an assistant turn that carries a full summary.
pub const SUMMARY_INTRO: &str = "Here is the complete summary for government officials:";
/// Appended to error turns when the remote summarizer failed.
pub const REMOTE_ERROR_HINT: &str = "Try switching to local mode or check your API key.";
/// Appended to error turns when the local summarizer failed.
pub const LOCAL_ERROR_HINT: &str = "Please try again.";

/// Errors that stop a prompt from being processed at all.
///
/// Summarizer failures are not errors here; they become error turns.
#[derive(Debug, Error)]
pub enum ConversationError {
    #[error("Please select and process a document first.")]
    NoDocument,

    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Document assistant session.
pub struct Assistant<R = Arc<dyn Summarizer>>
where
    R: Summarizer,
{
    local: LocalSummarizer,
    remote: R,
    mode: SummarizerMode,
    document: Option<LoadedDocument>,
    transcript: Transcript,
}

impl<R: Summarizer> Assistant<R> {
    /// Create a session with no document loaded.
    pub fn new(remote: R, mode: SummarizerMode) -> Self {
        info!("Creating assistant in {mode} mode");
        Self {
            local: LocalSummarizer::new(),
            remote,
            mode,
            document: None,
            transcript: Transcript::new(),
        }
    }

    /// Start the session with a document already loaded.
    #[must_use]
    pub fn with_document(mut self, document: LoadedDocument) -> Self {
        self.load(document);
        self
    }

    /// Replace the current document. The transcript is kept.
    pub fn load(&mut self, document: LoadedDocument) {
        info!(
            "Loaded document {} ({} chars)",
            document.name,
            document.text.len()
        );
        self.document = Some(document);
    }

    /// Read a file from disk and make it the current document.
    pub fn load_path(&mut self, path: &Path) -> Result<&LoadedDocument, ConversationError> {
        let document = load_document(path)?;
        self.load(document);
        self.document.as_ref().ok_or(ConversationError::NoDocument)
    }

    #[must_use]
    pub const fn document(&self) -> Option<&LoadedDocument> {
        self.document.as_ref()
    }

    #[must_use]
    pub const fn mode(&self) -> SummarizerMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: SummarizerMode) {
        info!("Switching summarizer mode: {} -> {mode}", self.mode);
        self.mode = mode;
    }

    #[must_use]
    pub const fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    /// Answer one prompt and return the assistant turn it produced.
    ///
    /// Targeted questions are answered by the query router. Anything else
    /// gets a full summary from the active summarizer; if that fails the
    /// returned turn is an error message rather than an `Err`.
    pub async fn submit(&mut self, prompt: &str) -> Result<&Turn, ConversationError> {
        let text = self.current_text()?;

        self.transcript.push(Turn::user(prompt));

        let reply = match route(prompt, &text) {
            Some(answer) => {
                debug!("Answered from query router");
                Turn::assistant(answer)
            }
            None => self.summarize(&text).await,
        };

        Ok(self.transcript.push(reply))
    }

    /// Submit the preset summary prompt.
    pub async fn summarize_preset(&mut self) -> Result<&Turn, ConversationError> {
        self.submit(PRESET_PROMPT).await
    }

    fn current_text(&self) -> Result<SourceText, ConversationError> {
        self.document
            .as_ref()
            .map(|doc| doc.text.clone())
            .filter(|text| !text.is_blank())
            .ok_or(ConversationError::NoDocument)
    }

    async fn summarize(&self, text: &str) -> Turn {
        let result = match self.mode {
            SummarizerMode::Local => self.local.summarize(text).await,
            SummarizerMode::Remote => self.remote.summarize(text).await,
        };

        match result {
            Ok(summary) => Turn::summary(SUMMARY_INTRO, summary),
            Err(e) => {
                warn!("{} summarizer failed: {e:#}", self.mode);
                let hint = match self.mode {
                    SummarizerMode::Remote => REMOTE_ERROR_HINT,
                    SummarizerMode::Local => LOCAL_ERROR_HINT,
                };
                let detail = e.to_string();
                Turn::error(format!("Error: {}. {hint}", detail.trim_end_matches('.')))
            }
        }
    }

    /// Run an interactive session on stdin/stdout.
    pub async fn run_interactive(&mut self) -> Result<(), ConversationError> {
        match &self.document {
            Some(doc) => println!("=== {} ({} mode) ===", doc.name, self.mode),
            None => println!("=== No document loaded ({} mode) ===", self.mode),
        }
        println!("Ask about the document, or type /help. 'exit' or 'quit' to end.\n");

        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let mut input = String::new();
            if std::io::stdin().read_line(&mut input)? == 0 {
                break;
            }
            let input = input.trim();

            if matches!(input, "exit" | "quit" | "q") {
                println!(
                    "\nSession ended. Total questions: {}",
                    self.transcript.user_turns()
                );
                break;
            }

            if input.is_empty() {
                continue;
            }

            if let Some(command) = input.strip_prefix('/') {
                self.run_command(command).await;
                continue;
            }

            match self.submit(input).await {
                Ok(turn) => println!("\n{}\n", render_turn(turn)),
                Err(e) => eprintln!("{e}"),
            }
        }

        Ok(())
    }

    async fn run_command(&mut self, command: &str) {
        let (name, arg) = command
            .split_once(char::is_whitespace)
            .map_or((command, ""), |(name, arg)| (name, arg.trim()));

        match name {
            "help" => print_help(),
            "summary" => match self.summarize_preset().await {
                Ok(turn) => println!("\n{}\n", render_turn(turn)),
                Err(e) => eprintln!("{e}"),
            },
            "mode" if arg.is_empty() => println!("Current mode: {}", self.mode),
            "mode" => match arg.parse::<SummarizerMode>() {
                Ok(mode) => {
                    self.set_mode(mode);
                    println!("Switched to {mode} mode");
                }
                Err(e) => eprintln!("{e}"),
            },
            "text" => match &self.document {
                Some(doc) => println!("\n{}\n", doc.text),
                None => eprintln!("{}", ConversationError::NoDocument),
            },
            "load" if arg.is_empty() => eprintln!("Usage: /load <path>"),
            "load" => match self.load_path(Path::new(arg)) {
                Ok(doc) => println!("Loaded {} ({} chars)", doc.name, doc.text.len()),
                Err(e) => eprintln!("{e}"),
            },
            other => eprintln!("Unknown command: /{other} (try /help)"),
        }
    }
}

fn print_help() {
    println!("Commands:");
    println!("  /summary        Summarize for procurement officer");
    println!("  /mode [m]       Show or switch summarizer mode (local, remote)");
    println!("  /text           Print the extracted document text");
    println!("  /load <path>    Load a PDF or text file");
    println!("  exit | quit     End the session");
    println!();
    println!("Targeted questions: deadlines, cost/budget, contacts, eligibility, penalties,");
    println!("document type. Anything else produces a full summary.");
}
