//! Shared pattern library for tender documents.
//!
//! Each scan category is defined exactly once here and used by both the full
//! extractor and the query router, so the two can never disagree about what
//! counts as a date, an amount, or a contact.

use regex::Regex;
use std::sync::OnceLock;

/// Numeric day/month/year in either order, or `Month day, year`.
const DATE_PATTERN: &str = concat!(
    r"(?i)\b\d{1,2}[/-]\d{1,2}[/-]\d{2,4}\b",
    r"|\b\d{4}[/-]\d{1,2}[/-]\d{1,2}\b",
    r"|\b(?:Jan(?:uary)?|Feb(?:ruary)?|Mar(?:ch)?|Apr(?:il)?|May|June?|July?",
    r"|Aug(?:ust)?|Sep(?:tember)?|Oct(?:ober)?|Nov(?:ember)?|Dec(?:ember)?)",
    r"\s+\d{1,2},?\s+\d{4}\b",
);

/// Rupee-prefixed amounts, or a number followed by a scale word.
const MONEY_PATTERN: &str = concat!(
    r"(?i)₹\s*[\d,]+(?:\.\d{2})?",
    r"|\b\d{1,3}(?:,\d{3})*(?:\.\d{2})?\s*(?:lakh|crore|thousand|million|billion)\b",
);

/// Email addresses, or 10-digit mobile numbers starting 6-9 with an optional
/// `+91` or `0` prefix.
const CONTACT_PATTERN: &str = concat!(
    r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b",
    r"|(?:\+91|\b0?)[6-9]\d{9}\b",
);

/// Keywords that signal eligibility or qualification content.
pub const ELIGIBILITY_KEYWORDS: [&str; 5] = [
    "eligibility",
    "qualification",
    "criteria",
    "requirement",
    "minimum",
];

/// Keywords that identify a procurement document, in reporting order.
pub const PROCUREMENT_KEYWORDS: [&str; 6] =
    ["tender", "procurement", "bid", "quotation", "rfp", "rfq"];

static DATE_REGEX: OnceLock<Regex> = OnceLock::new();
static MONEY_REGEX: OnceLock<Regex> = OnceLock::new();
static CONTACT_REGEX: OnceLock<Regex> = OnceLock::new();

#[expect(
    clippy::expect_used,
    reason = "Static regex patterns are covered by tests and always compile"
)]
fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Static regex pattern is guaranteed to be valid")
}

/// A category of token scan over the document text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanKind {
    Date,
    Money,
    Contact,
}

impl ScanKind {
    /// The compiled pattern for this category.
    #[must_use]
    pub fn regex(self) -> &'static Regex {
        match self {
            Self::Date => DATE_REGEX.get_or_init(|| compile(DATE_PATTERN)),
            Self::Money => MONEY_REGEX.get_or_init(|| compile(MONEY_PATTERN)),
            Self::Contact => CONTACT_REGEX.get_or_init(|| compile(CONTACT_PATTERN)),
        }
    }

    /// Every match in the text, in order of first occurrence.
    #[must_use]
    pub fn find_all(self, text: &str) -> Vec<&str> {
        self.regex().find_iter(text).map(|m| m.as_str()).collect()
    }

    /// At most `limit` matches, in order of first occurrence.
    #[must_use]
    pub fn find_first(self, text: &str, limit: usize) -> Vec<&str> {
        self.regex()
            .find_iter(text)
            .take(limit)
            .map(|m| m.as_str())
            .collect()
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Date => "date",
            Self::Money => "money",
            Self::Contact => "contact",
        }
    }
}

/// True when any keyword occurs in `lowered`, which must already be lower-cased.
#[must_use]
pub fn contains_any(lowered: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| lowered.contains(keyword))
}

/// The first keyword, in list order, that occurs anywhere in `text`.
#[must_use]
pub fn first_keyword<'k>(text: &str, keywords: &[&'k str]) -> Option<&'k str> {
    let lowered = text.to_lowercase();
    keywords
        .iter()
        .copied()
        .find(|keyword| lowered.contains(keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates_numeric_in_both_orders() {
        let text = "Opens 15/01/2024, closes 2024-02-28, pre-bid 5-3-24.";
        assert_eq!(
            ScanKind::Date.find_all(text),
            vec!["15/01/2024", "2024-02-28", "5-3-24"]
        );
    }

    #[test]
    fn dates_with_month_names() {
        let text = "Bids due March 5, 2024 or at latest apr 12 2024. Not: Mayday 3 2024";
        assert_eq!(
            ScanKind::Date.find_all(text),
            vec!["March 5, 2024", "apr 12 2024"]
        );
    }

    #[test]
    fn dates_ignore_reference_numbers() {
        assert!(ScanKind::Date.find_all("Tender No: MOD/2024/001").is_empty());
    }

    #[test]
    fn money_with_rupee_symbol_and_scale_words() {
        let text = "Estimated Value: ₹50,00,000 (Fifty Lakh Rupees). Turnover of ₹1 crore. \
                    EMD 2 Lakh and fee 1,500.50 thousand.";
        assert_eq!(
            ScanKind::Money.find_all(text),
            vec!["₹50,00,000", "₹1", "2 Lakh", "1,500.50 thousand"]
        );
    }

    #[test]
    fn contacts_emails_and_mobiles() {
        let text = "Email: procurement@mod.gov.in, call 9876543210 or +919812345678 \
                    or 07012345678. Landline 23011234 is ignored.";
        assert_eq!(
            ScanKind::Contact.find_all(text),
            vec![
                "procurement@mod.gov.in",
                "9876543210",
                "+919812345678",
                "07012345678"
            ]
        );
    }

    #[test]
    fn contacts_reject_numbers_starting_below_six() {
        assert!(ScanKind::Contact.find_all("Phone: 5123456789").is_empty());
    }

    #[test]
    fn find_first_caps_matches() {
        let text = "1/1/2024 2/1/2024 3/1/2024";
        assert_eq!(ScanKind::Date.find_first(text, 2), vec!["1/1/2024", "2/1/2024"]);
    }

    #[test]
    fn keyword_helpers() {
        assert!(contains_any("minimum turnover", &ELIGIBILITY_KEYWORDS));
        assert!(!contains_any("nothing here", &ELIGIBILITY_KEYWORDS));
        assert_eq!(
            first_keyword("Request for RFQ and Tender", &PROCUREMENT_KEYWORDS),
            Some("tender")
        );
        assert_eq!(first_keyword("plain letter", &PROCUREMENT_KEYWORDS), None);
    }
}
