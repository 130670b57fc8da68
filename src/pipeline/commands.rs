//! Unsafe shell command detection.
//!
//! Report-only: matches produce warning fix records and a `warn!` event,
//! but the query text is never modified by this step.

use regex::Regex;

use super::{Heuristic, StepOutcome};

/// Shell-danger patterns, scanned case-insensitively.
const UNSAFE_PATTERNS: &[&str] = &[
    r"\brm\s+-rf\b",
    r"\bsudo\b",
    r"\bchmod\b\s+777",
    r"\bdd\b.*\bif=/dev\b",
    r"\bmkfs\b",
    r"\bformat\b.*\bdisk\b",
];

/// Flags shell-danger patterns without altering the query.
pub struct UnsafeCommandScanner {
    patterns: Vec<(&'static str, Regex)>,
}

impl UnsafeCommandScanner {
    pub fn new() -> Self {
        let patterns = UNSAFE_PATTERNS
            .iter()
            .map(|&raw| {
                let re = Regex::new(&format!("(?i){}", raw))
                    .expect("unsafe-command pattern is a fixed literal");
                (raw, re)
            })
            .collect();
        Self { patterns }
    }
}

impl Default for UnsafeCommandScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl Heuristic for UnsafeCommandScanner {
    fn name(&self) -> &'static str {
        "unsafe_commands"
    }

    fn apply(&self, query: &str) -> StepOutcome {
        let mut fixes = Vec::new();

        for (raw, re) in &self.patterns {
            if re.is_match(query) {
                tracing::warn!(pattern = *raw, "unsafe command pattern in query");
                fixes.push(format!(
                    "WARNING: Potentially unsafe command detected: {}",
                    raw
                ));
            }
        }

        StepOutcome {
            text: query.to_string(),
            fixes,
        }
    }
}
