use tenderlens_core::SourceText;

use crate::loader::{DocumentKind, LoadedDocument};

/// A representative tender notice, available without any file on disk.
pub const SAMPLE_TENDER: &str = "GOVERNMENT OF INDIA
MINISTRY OF DEFENCE
TENDER NOTICE

Tender No: MOD/2024/001
Date: 15/01/2024
Last Date of Submission: 28/02/2024

Procurement of Computer Equipment
Estimated Value: ₹50,00,000 (Fifty Lakh Rupees)

Eligibility Criteria:
- Minimum 3 years experience in IT equipment supply
- Annual turnover of at least ₹1 crore
- Valid GST registration

Contact Details:
Email: procurement@mod.gov.in
Phone: +91-11-23011234

Penalties:
- Late submission: ₹10,000 per day
- Non-compliance: 5% of contract value";

#[must_use]
pub fn sample_document() -> LoadedDocument {
    LoadedDocument {
        name: "sample-tender.txt".to_string(),
        kind: DocumentKind::Text,
        text: SourceText::from(SAMPLE_TENDER),
    }
}
