//! Per-intent answer handlers.

use tracing::debug;

use super::detector::{QueryIntent, detect_intent};
use crate::patterns::{PROCUREMENT_KEYWORDS, ScanKind, first_keyword};

const ELIGIBILITY_LINE_KEYWORDS: [&str; 4] =
    ["eligibility", "qualification", "criteria", "requirement"];
const PENALTY_LINE_KEYWORDS: [&str; 3] = ["penalty", "fine", "late"];

/// Answer a targeted question about the document.
///
/// Returns `None` when the query matches no intent, which tells the caller to
/// produce a full summary instead. A matched intent always returns a message,
/// even if it found nothing.
#[must_use]
pub fn route(query: &str, text: &str) -> Option<String> {
    let Some(intent) = detect_intent(query) else {
        debug!("No intent matched, deferring to full summary");
        return None;
    };

    debug!(intent = intent.as_str(), "Routing query");
    Some(intent.answer(text))
}

impl QueryIntent {
    /// Run this intent's scan over the document and format the answer.
    #[must_use]
    pub fn answer(self, text: &str) -> String {
        match self {
            Self::Deadline => bulleted(
                "📅 **Deadlines Found:**",
                &ScanKind::Date.find_all(text),
                "❌ No specific deadlines found in the document.",
            ),
            Self::Financial => bulleted(
                "💰 **Financial Information:**",
                &ScanKind::Money.find_all(text),
                "❌ No financial information found in the document.",
            ),
            Self::Contact => bulleted(
                "📞 **Contact Information:**",
                &ScanKind::Contact.find_all(text),
                "❌ No contact information found in the document.",
            ),
            Self::Eligibility => bulleted(
                "📋 **Eligibility Information:**",
                &lines_mentioning(text, &ELIGIBILITY_LINE_KEYWORDS),
                "❌ No eligibility information found in the document.",
            ),
            Self::Penalty => bulleted(
                "⚠️ **Penalty Information:**",
                &lines_mentioning(text, &PENALTY_LINE_KEYWORDS),
                "❌ No penalty information found in the document.",
            ),
            Self::DocumentType => first_keyword(text, &PROCUREMENT_KEYWORDS).map_or_else(
                || "📄 **Document Type:** Government procurement document".to_string(),
                |keyword| {
                    format!(
                        "📄 **Document Type:** This appears to be a {} document for government procurement.",
                        keyword.to_uppercase()
                    )
                },
            ),
        }
    }
}

/// Trimmed lines whose lower-cased form contains any of the keywords.
fn lines_mentioning<'t>(text: &'t str, keywords: &[&str]) -> Vec<&'t str> {
    text.split('\n')
        .filter(|line| {
            let lowered = line.to_lowercase();
            keywords.iter().any(|keyword| lowered.contains(keyword))
        })
        .map(str::trim)
        .collect()
}

fn bulleted(header: &str, items: &[&str], empty_message: &str) -> String {
    if items.is_empty() {
        return empty_message.to_string();
    }

    let bullets: Vec<String> = items.iter().map(|item| format!("• {item}")).collect();
    format!("{header}\n{}", bullets.join("\n"))
}
