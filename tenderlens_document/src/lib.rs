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

//! Turns files on disk into [`SourceText`](tenderlens_core::SourceText).
//!
//! The extraction engine only ever sees plain text; this crate is the one
//! place that knows about PDFs and file extensions.

mod error;
mod loader;
mod sample;

pub use error::DocumentError;
pub use loader::{DocumentKind, LoadedDocument, load_document, load_from_bytes};
pub use sample::{SAMPLE_TENDER, sample_document};
