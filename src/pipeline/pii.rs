//! PII redaction for card-like and SSN-like digit groups.
//!
//! Each pattern is replaced wholesale with a single fix record no matter
//! how many matches exist. The SSN shape also matches many plain phone
//! numbers; wholesale redaction accepts that false-positive rate.

use regex::Regex;

use super::{Heuristic, StepOutcome};

/// Replacement token for card-like digit groups.
const CARD_TOKEN: &str = "[REDACTED_CARD_NUMBER]";

/// Replacement token for SSN-like digit groups.
const SSN_TOKEN: &str = "[REDACTED_SSN]";

/// Redacts credit-card-like and US-SSN-like digit patterns.
pub struct PiiRedactor {
    card: Regex,
    ssn: Regex,
}

impl PiiRedactor {
    pub fn new() -> Self {
        let card = Regex::new(r"\b(?:\d{4}[-\s]?){3}\d{4}\b")
            .expect("card pattern is a fixed literal");
        let ssn = Regex::new(r"\b\d{3}[-\s]?\d{2}[-\s]?\d{4}\b")
            .expect("ssn pattern is a fixed literal");
        Self { card, ssn }
    }
}

impl Default for PiiRedactor {
    fn default() -> Self {
        Self::new()
    }
}

impl Heuristic for PiiRedactor {
    fn name(&self) -> &'static str {
        "pii_redaction"
    }

    fn apply(&self, query: &str) -> StepOutcome {
        let mut text = query.to_string();
        let mut fixes = Vec::new();

        // Card pass runs first so the broader SSN shape cannot eat the
        // leading digits of a card number.
        if self.card.is_match(&text) {
            text = self.card.replace_all(&text, CARD_TOKEN).into_owned();
            fixes.push("Redacted potential credit card number".to_string());
        }

        if self.ssn.is_match(&text) {
            text = self.ssn.replace_all(&text, SSN_TOKEN).into_owned();
            fixes.push("Redacted potential Social Security Number".to_string());
        }

        StepOutcome { text, fixes }
    }
}
