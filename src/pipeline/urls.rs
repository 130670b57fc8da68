//! Suspicious URL filtering.
//!
//! Extracted `http(s)` URLs are scanned for suspicious keywords with a
//! case-insensitive Aho-Corasick automaton; a flagged URL is replaced with
//! a placeholder token and the first keyword in list order is cited.

use aho_corasick::{AhoCorasick, AhoCorasickBuilder};
use regex::Regex;

use super::{Heuristic, StepOutcome};

/// Keywords that mark a URL as suspicious, in citation priority order.
const SUSPICIOUS_KEYWORDS: &[&str] = &[
    "malware", "phish", "hack", "crack", "warez", "porn", "xxx",
];

/// Replacement token for filtered URLs.
const URL_PLACEHOLDER: &str = "[FILTERED_URL]";

/// Replaces URLs that contain suspicious keywords.
pub struct UrlFilter {
    url_pattern: Regex,
    keywords: AhoCorasick,
}

impl UrlFilter {
    pub fn new() -> Self {
        let url_pattern = Regex::new(r"https?://(?:[-\w.]|(?:%[\da-fA-F]{2}))+")
            .expect("URL pattern is a fixed literal");
        let keywords = AhoCorasickBuilder::new()
            .ascii_case_insensitive(true)
            .build(SUSPICIOUS_KEYWORDS)
            .expect("keyword automaton builds from literals");
        Self {
            url_pattern,
            keywords,
        }
    }

    /// Lowest-index keyword occurring anywhere in `url`, if any.
    /// Overlapping search so list priority wins over text position.
    fn first_listed_keyword(&self, url: &str) -> Option<&'static str> {
        self.keywords
            .find_overlapping_iter(url)
            .map(|m| m.pattern().as_usize())
            .min()
            .map(|idx| SUSPICIOUS_KEYWORDS[idx])
    }
}

impl Default for UrlFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl Heuristic for UrlFilter {
    fn name(&self) -> &'static str {
        "url_filtering"
    }

    fn apply(&self, query: &str) -> StepOutcome {
        let urls: Vec<String> = self
            .url_pattern
            .find_iter(query)
            .map(|m| m.as_str().to_string())
            .collect();

        let mut text = query.to_string();
        let mut fixes = Vec::new();

        for url in &urls {
            if let Some(keyword) = self.first_listed_keyword(url) {
                text = text.replace(url.as_str(), URL_PLACEHOLDER);
                fixes.push(format!("Removed suspicious URL containing '{}'", keyword));
            }
        }

        StepOutcome { text, fixes }
    }
}
