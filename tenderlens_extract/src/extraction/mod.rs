//! Full-document fact extraction.
//!
//! Runs every scanner over the document and assembles the findings into a
//! [`SummaryResult`](tenderlens_core::SummaryResult).

mod engine;
mod summarizer;

pub use engine::{
    CONTACT_LIMIT, DATE_LIMIT, FALLBACK_SUMMARY, MONEY_LIMIT, SUMMARY_SENTENCES, extract,
};
pub use summarizer::LocalSummarizer;
