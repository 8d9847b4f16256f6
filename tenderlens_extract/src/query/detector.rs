//! Query intent detection.
//!
//! Intents are tested in a fixed priority order using case-insensitive
//! substring checks against the query.

/// What a user query is asking about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QueryIntent {
    /// "deadline", "due date", "submission date"
    Deadline,
    /// "cost", "price", "value", "amount", "budget"
    Financial,
    /// "contact", "email", "phone", "address"
    Contact,
    /// "eligibility", "qualification", "criteria", "requirement"
    Eligibility,
    /// "penalty", "fine", "penalties"
    Penalty,
    /// "what is this", "type of document", "document type"
    DocumentType,
}

impl QueryIntent {
    /// Every intent, highest priority first.
    pub const ALL: [Self; 6] = [
        Self::Deadline,
        Self::Financial,
        Self::Contact,
        Self::Eligibility,
        Self::Penalty,
        Self::DocumentType,
    ];

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Deadline => "deadline",
            Self::Financial => "financial",
            Self::Contact => "contact",
            Self::Eligibility => "eligibility",
            Self::Penalty => "penalty",
            Self::DocumentType => "document_type",
        }
    }

    /// Query keywords that trigger this intent.
    #[must_use]
    pub const fn keywords(self) -> &'static [&'static str] {
        match self {
            Self::Deadline => &["deadline", "due date", "submission date"],
            Self::Financial => &["cost", "price", "value", "amount", "budget"],
            Self::Contact => &["contact", "email", "phone", "address"],
            Self::Eligibility => &["eligibility", "qualification", "criteria", "requirement"],
            Self::Penalty => &["penalty", "fine", "penalties"],
            Self::DocumentType => &["what is this", "type of document", "document type"],
        }
    }

    /// True when any of this intent's keywords occurs in the lower-cased query.
    #[must_use]
    pub fn matches(self, lowered_query: &str) -> bool {
        self.keywords()
            .iter()
            .any(|keyword| lowered_query.contains(keyword))
    }
}

/// The highest-priority intent whose keywords appear in the query.
///
/// `None` means the query is not a targeted question.
#[must_use]
pub fn detect_intent(query: &str) -> Option<QueryIntent> {
    let lower = query.to_lowercase();

    QueryIntent::ALL
        .into_iter()
        .find(|intent| intent.matches(&lower))
}
