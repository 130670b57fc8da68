//! Heuristic hallucination check for agent responses.
//!
//! Flags article-led capitalized phrases in a response whose words never
//! appear in the originating query. Intentionally over-inclusive: new but
//! benign information (a computed date, a resolved name) is flagged too,
//! and the caller decides what to do with the reasons.

use std::collections::HashSet;

use regex::Regex;

/// Outcome of the entity-overlap check.
#[derive(Debug, Clone)]
pub struct HallucinationReport {
    /// True iff at least one phrase was flagged.
    pub flagged: bool,
    /// One reason string per flagged phrase.
    pub reasons: Vec<String>,
}

/// Scans responses for capitalized phrases with no lexical overlap with
/// the query.
pub struct HallucinationDetector {
    word: Regex,
    entity: Regex,
}

impl HallucinationDetector {
    pub fn new() -> Self {
        let word = Regex::new(r"[A-Za-z]+").expect("word pattern is a fixed literal");
        // One or more consecutive capitalized words following an article.
        let entity = Regex::new(r"(?:[Tt]he|[Aa]n?)\s+([A-Z][a-z]+(?:\s+[A-Z][a-z]+)*)")
            .expect("entity pattern is a fixed literal");
        Self { word, entity }
    }

    pub fn check(&self, query: &str, response: &str) -> HallucinationReport {
        let query_lower = query.to_lowercase();
        let vocabulary: HashSet<&str> = self
            .word
            .find_iter(&query_lower)
            .map(|m| m.as_str())
            .collect();

        let mut reasons = Vec::new();
        for caps in self.entity.captures_iter(response) {
            let phrase = &caps[1];
            let phrase_lower = phrase.to_lowercase();
            let known = self
                .word
                .find_iter(&phrase_lower)
                .any(|m| vocabulary.contains(m.as_str()));
            if !known {
                reasons.push(format!(
                    "Response mentions '{}' which was not in the original query",
                    phrase
                ));
            }
        }

        if !reasons.is_empty() {
            tracing::debug!(count = reasons.len(), "possible hallucinated entities");
        }

        HallucinationReport {
            flagged: !reasons.is_empty(),
            reasons,
        }
    }
}

impl Default for HallucinationDetector {
    fn default() -> Self {
        Self::new()
    }
}
