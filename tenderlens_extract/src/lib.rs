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

//! Pattern-driven fact extraction and query routing for tender documents.
//!
//! Everything in this crate is a pure function over the document text:
//! - [`extract`] runs the full battery of scanners and builds a [`SummaryResult`]
//! - [`route`] answers a targeted question, or returns `None` when the
//!   question should fall back to a full summary
//!
//! [`SummaryResult`]: tenderlens_core::SummaryResult

pub mod extraction;
pub mod patterns;
pub mod query;

pub use extraction::{LocalSummarizer, extract};
pub use patterns::ScanKind;
pub use query::{QueryIntent, detect_intent, route};
