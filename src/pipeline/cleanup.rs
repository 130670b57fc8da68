//! Final cleanup steps: whitespace collapsing and length capping.
//!
//! These run after every content-mutating step so artifacts they introduce
//! are cleaned and the final length constraint is exact.

use regex::Regex;

use super::{Heuristic, StepOutcome};

/// Collapses whitespace runs to single spaces and trims the ends.
/// Idempotent.
pub struct WhitespaceNormalizer {
    runs: Regex,
}

impl WhitespaceNormalizer {
    pub fn new() -> Self {
        let runs = Regex::new(r"\s+").expect("whitespace pattern is a fixed literal");
        Self { runs }
    }
}

impl Default for WhitespaceNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Heuristic for WhitespaceNormalizer {
    fn name(&self) -> &'static str {
        "whitespace_normalization"
    }

    fn apply(&self, query: &str) -> StepOutcome {
        let collapsed = self.runs.replace_all(query, " ");
        let cleaned = collapsed.trim();

        let mut fixes = Vec::new();
        if cleaned != query {
            fixes.push("Removed excessive whitespace".to_string());
        }

        StepOutcome {
            text: cleaned.to_string(),
            fixes,
        }
    }
}

/// Truncates over-long queries to a character limit plus an ellipsis.
pub struct LengthCap {
    max_chars: usize,
}

impl LengthCap {
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }
}

impl Heuristic for LengthCap {
    fn name(&self) -> &'static str {
        "length_capping"
    }

    fn apply(&self, query: &str) -> StepOutcome {
        let char_count = query.chars().count();
        if char_count <= self.max_chars {
            return StepOutcome::unchanged(query);
        }

        let truncated: String = query.chars().take(self.max_chars).collect();
        StepOutcome {
            text: format!("{}...", truncated),
            fixes: vec![format!(
                "Truncated query from {} to {} characters",
                char_count, self.max_chars
            )],
        }
    }
}
