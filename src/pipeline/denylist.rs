//! Banned-word filtering.
//!
//! Whole-word denylist matches are replaced with a literal placeholder;
//! one fix record per distinct banned word found.

use regex::Regex;

use super::{Heuristic, StepOutcome};

/// Words and phrases that are always filtered out of queries.
const BANNED_WORDS: &[&str] = &[
    "hack",
    "exploit",
    "vulnerability",
    "illegal",
    "password",
    "credit card",
    "ssn",
    "social security",
    "porn",
    "xxx",
];

/// Replacement token for filtered words.
const PLACEHOLDER: &str = "[FILTERED]";

/// Replaces denylisted words, whole-word and case-insensitive.
pub struct BannedWordFilter {
    patterns: Vec<(&'static str, Regex)>,
}

impl BannedWordFilter {
    pub fn new() -> Self {
        let patterns = BANNED_WORDS
            .iter()
            .map(|&word| {
                let re = Regex::new(&format!(r"(?i)\b{}\b", regex::escape(word)))
                    .expect("denylist entry is a literal word");
                (word, re)
            })
            .collect();
        Self { patterns }
    }
}

impl Default for BannedWordFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Heuristic for BannedWordFilter {
    fn name(&self) -> &'static str {
        "banned_words"
    }

    fn apply(&self, query: &str) -> StepOutcome {
        let mut text = query.to_string();
        let mut fixes = Vec::new();

        for (word, re) in &self.patterns {
            if re.is_match(&text) {
                text = re.replace_all(&text, PLACEHOLDER).into_owned();
                fixes.push(format!("Removed banned word: '{}'", word));
            }
        }

        StepOutcome { text, fixes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banned_word_is_replaced() {
        let step = BannedWordFilter::new();
        let out = step.apply("how do I hack this");

        assert_eq!(out.text, "how do I [FILTERED] this");
        assert_eq!(out.fixes, vec!["Removed banned word: 'hack'"]);
    }

    #[test]
    fn test_multiword_entries_match() {
        let step = BannedWordFilter::new();
        let out = step.apply("store my credit card and social security numbers");

        assert!(!out.text.contains("credit card"));
        assert!(!out.text.contains("social security"));
        assert_eq!(out.fixes.len(), 2);
    }

    #[test]
    fn test_one_fix_per_distinct_word() {
        let step = BannedWordFilter::new();
        let out = step.apply("hack hack HACK");

        assert_eq!(out.text, "[FILTERED] [FILTERED] [FILTERED]");
        assert_eq!(out.fixes.len(), 1);
    }

    #[test]
    fn test_whole_word_only() {
        let step = BannedWordFilter::new();
        let out = step.apply("join the hackathon");

        assert_eq!(out.text, "join the hackathon");
        assert!(out.fixes.is_empty());
    }
}
