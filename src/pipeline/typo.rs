//! Whole-word typo correction against a fixed dictionary.

use regex::Regex;

use super::{Heuristic, StepOutcome};

/// Known misspellings and their corrections.
const TYPOS: &[(&str, &str)] = &[
    ("clendar", "calendar"),
    ("calander", "calendar"),
    ("schedual", "schedule"),
    ("scedule", "schedule"),
    ("emaill", "email"),
    ("emial", "email"),
    ("docuemnt", "document"),
    ("documnet", "document"),
    ("serach", "search"),
    ("summery", "summary"),
    ("summerize", "summarize"),
];

/// Replaces known misspellings, whole-word and case-insensitive.
///
/// One fix record is emitted per distinct typo key that matched anywhere
/// in the text, not per occurrence.
pub struct TypoCorrector {
    patterns: Vec<(&'static str, &'static str, Regex)>,
}

impl TypoCorrector {
    pub fn new() -> Self {
        let patterns = TYPOS
            .iter()
            .map(|&(typo, correction)| {
                let re = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(typo)))
                    .expect("typo pattern is a literal word");
                (typo, correction, re)
            })
            .collect();
        Self { patterns }
    }
}

impl Default for TypoCorrector {
    fn default() -> Self {
        Self::new()
    }
}

impl Heuristic for TypoCorrector {
    fn name(&self) -> &'static str {
        "typo_correction"
    }

    fn apply(&self, query: &str) -> StepOutcome {
        let mut text = query.to_string();
        let mut fixes = Vec::new();

        for (typo, correction, re) in &self.patterns {
            if re.is_match(&text) {
                text = re.replace_all(&text, *correction).into_owned();
                fixes.push(format!("Corrected typo: '{}' to '{}'", typo, correction));
            }
        }

        StepOutcome { text, fixes }
    }
}
