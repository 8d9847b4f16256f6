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

mod command;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use tenderlens_core::SummarizerMode;
use tracing_subscriber::EnvFilter;

use command::{
    AskInput, AskStrategy, ChatInput, ChatStrategy, CommandStrategy, DocumentSource,
    InfoStrategy, InitStrategy, SummarizeInput, SummarizeStrategy, TextStrategy, VersionStrategy,
};

#[derive(Parser)]
#[command(name = "tenderlens")]
#[command(about = "Summarize and query government tender documents", long_about = None)]
struct Cli {
    /// Log level when RUST_LOG is not set (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug, Clone)]
struct DocumentArgs {
    /// PDF or text file to read
    #[arg(short, long, conflicts_with = "sample")]
    file: Option<PathBuf>,

    /// Use the built-in sample tender notice
    #[arg(long)]
    sample: bool,
}

impl DocumentArgs {
    fn source(self) -> Option<DocumentSource> {
        match (self.file, self.sample) {
            (Some(path), _) => Some(DocumentSource::File(path)),
            (None, true) => Some(DocumentSource::Sample),
            (None, false) => None,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize configuration
    Init,
    /// Show effective configuration
    Info,
    /// Produce a full summary of a document
    Summarize {
        #[command(flatten)]
        document: DocumentArgs,

        /// Summarizer backend (local or remote); defaults to the configured mode
        #[arg(short, long)]
        mode: Option<SummarizerMode>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Ask one question about a document
    Ask {
        #[command(flatten)]
        document: DocumentArgs,

        /// Question to ask
        #[arg(short, long)]
        query: String,

        /// Summarizer backend for questions that fall back to a full summary
        #[arg(short, long)]
        mode: Option<SummarizerMode>,
    },
    /// Interactive question session
    Chat {
        #[command(flatten)]
        document: DocumentArgs,

        /// Summarizer backend (local or remote)
        #[arg(short, long)]
        mode: Option<SummarizerMode>,
    },
    /// Print the extracted document text
    Text {
        #[command(flatten)]
        document: DocumentArgs,
    },
    /// Show version
    Version,
}

fn init_tracing(level: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {e}"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level)?;

    match cli.command {
        Commands::Init => InitStrategy.execute(()).await,
        Commands::Info => InfoStrategy.execute(()).await,
        Commands::Summarize {
            document,
            mode,
            json,
        } => {
            SummarizeStrategy
                .execute(SummarizeInput {
                    source: document.source(),
                    mode,
                    json,
                })
                .await
        }
        Commands::Ask {
            document,
            query,
            mode,
        } => {
            AskStrategy
                .execute(AskInput {
                    source: document.source(),
                    query,
                    mode,
                })
                .await
        }
        Commands::Chat { document, mode } => {
            ChatStrategy
                .execute(ChatInput {
                    source: document.source(),
                    mode,
                })
                .await
        }
        Commands::Text { document } => TextStrategy.execute(document.source()).await,
        Commands::Version => VersionStrategy.execute(()).await,
    }
}
