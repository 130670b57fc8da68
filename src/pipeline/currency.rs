//! Currency amount normalization.
//!
//! Symbol-prefixed amounts with thousands separators have the separators
//! stripped; the decimal portion is preserved. Amounts without separators
//! are left alone and produce no fix record.

use regex::{Captures, Regex};

use super::{Heuristic, StepOutcome};

/// Strips thousands separators from `$ € £ ¥` amounts.
pub struct CurrencyNormalizer {
    pattern: Regex,
}

impl CurrencyNormalizer {
    pub fn new() -> Self {
        let pattern = Regex::new(r"([$€£¥])(\d{1,3}(?:,\d{3})+)(\.\d+)?")
            .expect("currency pattern is a fixed literal");
        Self { pattern }
    }
}

impl Default for CurrencyNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Heuristic for CurrencyNormalizer {
    fn name(&self) -> &'static str {
        "currency_normalization"
    }

    fn apply(&self, query: &str) -> StepOutcome {
        let mut fixes = Vec::new();

        let text = self
            .pattern
            .replace_all(query, |caps: &Captures| {
                let original = &caps[0];
                let symbol = &caps[1];
                let stripped = caps[2].replace(',', "");
                let decimal = caps.get(3).map_or("", |m| m.as_str());

                let normalized = format!("{}{}{}", symbol, stripped, decimal);
                fixes.push(format!(
                    "Normalized currency value: {} to {}",
                    original, normalized
                ));
                normalized
            })
            .into_owned();

        StepOutcome { text, fixes }
    }
}
