//! Extraction engine for tender summaries.
//!
//! The scanners run in a fixed order and each one contributes at most one
//! relevance line and one action item. The order is part of the output: the
//! relevance list always reads dates, money, eligibility, contacts, procurement.

use tenderlens_core::{Confidence, SummaryResult};
use tracing::debug;

use crate::patterns::{ELIGIBILITY_KEYWORDS, PROCUREMENT_KEYWORDS, ScanKind, contains_any};

/// Maximum number of dates listed in a summary.
pub const DATE_LIMIT: usize = 5;
/// Maximum number of amounts listed in a summary.
pub const MONEY_LIMIT: usize = 5;
/// Maximum number of contacts listed in a summary.
pub const CONTACT_LIMIT: usize = 3;
/// Number of `.`-separated segments kept for the short summary.
pub const SUMMARY_SENTENCES: usize = 3;
/// Short summary used when the document yields no text.
pub const FALLBACK_SUMMARY: &str = "Document processed successfully";

/// Accumulates relevance lines and their paired action items.
#[derive(Debug, Default)]
struct Findings {
    relevance: Vec<String>,
    actions: Vec<String>,
}

impl Findings {
    fn record(&mut self, relevance: String, action: &str) {
        self.relevance.push(relevance);
        self.actions.push(action.to_string());
    }

    fn scan_list(&mut self, kind: ScanKind, text: &str, limit: usize, label: &str, action: &str) {
        let matches = kind.find_first(text, limit);
        debug!(kind = kind.as_str(), count = matches.len(), "scan complete");
        if !matches.is_empty() {
            self.record(format!("{label}: {}", matches.join(", ")), action);
        }
    }

    fn flag(&mut self, present: bool, relevance: &str, action: &str) {
        if present {
            self.record(relevance.to_string(), action);
        }
    }
}

/// Build a structured summary of a tender document.
///
/// Never fails: a document with nothing recognisable yields empty lists, the
/// fallback summary and `low` confidence.
#[must_use]
pub fn extract(text: &str) -> SummaryResult {
    let lowered = text.to_lowercase();
    let mut findings = Findings::default();

    findings.scan_list(
        ScanKind::Date,
        text,
        DATE_LIMIT,
        "Deadlines found",
        "Review submission deadlines and plan accordingly",
    );
    findings.scan_list(
        ScanKind::Money,
        text,
        MONEY_LIMIT,
        "Financial values",
        "Verify budget allocation and financial requirements",
    );
    findings.flag(
        contains_any(&lowered, &ELIGIBILITY_KEYWORDS),
        "Eligibility criteria mentioned in document",
        "Review eligibility requirements and ensure compliance",
    );
    findings.scan_list(
        ScanKind::Contact,
        text,
        CONTACT_LIMIT,
        "Contact information",
        "Save contact details for inquiries",
    );
    findings.flag(
        contains_any(&lowered, &PROCUREMENT_KEYWORDS),
        "Procurement/tender document identified",
        "Review procurement process and requirements",
    );

    let confidence_estimate = Confidence::from_signal_count(findings.relevance.len());

    SummaryResult {
        short_summary: short_summary(text),
        relevance_to_officials: findings.relevance,
        action_items: findings.actions,
        confidence_estimate,
    }
}

/// First few `.`-separated segments, rejoined with `". "`.
fn short_summary(text: &str) -> String {
    let summary = text
        .split('.')
        .take(SUMMARY_SENTENCES)
        .collect::<Vec<_>>()
        .join(". ");
    let summary = summary.trim();

    if summary.is_empty() {
        FALLBACK_SUMMARY.to_string()
    } else {
        summary.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document() {
        let result = extract("");
        assert_eq!(result.short_summary, FALLBACK_SUMMARY);
        assert!(result.relevance_to_officials.is_empty());
        assert!(result.action_items.is_empty());
        assert_eq!(result.confidence_estimate, Confidence::Low);
    }

    #[test]
    fn whitespace_only_document() {
        let result = extract("   \n\t  ");
        assert_eq!(result.short_summary, FALLBACK_SUMMARY);
        assert_eq!(result.confidence_estimate, Confidence::Low);
    }

    #[test]
    fn short_summary_keeps_three_segments() {
        assert_eq!(
            short_summary("First. Second.Third. Fourth."),
            "First.  Second. Third"
        );
    }

    #[test]
    fn relevance_and_actions_stay_paired() {
        let result = extract("Minimum turnover applies. Contact buyer@gem.gov.in");
        assert_eq!(
            result.relevance_to_officials,
            vec![
                "Eligibility criteria mentioned in document".to_string(),
                "Contact information: buyer@gem.gov.in".to_string(),
            ]
        );
        assert_eq!(
            result.action_items,
            vec![
                "Review eligibility requirements and ensure compliance".to_string(),
                "Save contact details for inquiries".to_string(),
            ]
        );
        assert_eq!(result.confidence_estimate, Confidence::Medium);
    }

    #[test]
    fn contacts_are_capped_at_three() {
        let text = "a@x.in b@x.in c@x.in d@x.in";
        let result = extract(text);
        assert_eq!(
            result.relevance_to_officials,
            vec!["Contact information: a@x.in, b@x.in, c@x.in".to_string()]
        );
    }

    #[test]
    fn money_is_capped_at_five() {
        let text = "₹1 ₹2 ₹3 ₹4 ₹5 ₹6";
        let result = extract(text);
        assert_eq!(
            result.relevance_to_officials[0],
            "Financial values: ₹1, ₹2, ₹3, ₹4, ₹5"
        );
    }
}
