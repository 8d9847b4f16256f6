//! Targeted question answering.
//!
//! A query is matched against an ordered list of intents. The first intent
//! whose keywords appear in the query answers it, even when its own scan
//! comes back empty; only a query that matches no intent falls through.

mod detector;
mod router;

pub use detector::{QueryIntent, detect_intent};
pub use router::route;
