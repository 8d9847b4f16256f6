#![warn(
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

//! Turn orchestration for the document assistant.
//!
//! Each user prompt becomes a user turn followed by exactly one assistant
//! turn: a targeted answer from the query router, a full summary, or an
//! error message when the remote summarizer fails.
//!
//! # Key Features
//! - Explicit session state (loaded document, transcript, active mode)
//! - Local and remote summarizers behind one seam, switchable per session
//! - Interactive terminal loop

mod manager;
mod render;
mod session;

pub use manager::{
    Assistant, ConversationError, LOCAL_ERROR_HINT, PRESET_PROMPT, REMOTE_ERROR_HINT,
    SUMMARY_INTRO,
};
pub use render::{render_summary, render_turn};
pub use session::{Transcript, Turn};
