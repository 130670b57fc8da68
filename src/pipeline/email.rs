//! Email domain correction for common provider typos.

use regex::Regex;

use super::{Heuristic, StepOutcome};

/// Mistyped provider domains and their canonical forms. Domains must
/// match exactly; no fuzzy matching.
const DOMAIN_TYPOS: &[(&str, &str)] = &[
    ("gmal.com", "gmail.com"),
    ("gamil.com", "gmail.com"),
    ("gmial.com", "gmail.com"),
    ("hotmial.com", "hotmail.com"),
    ("yaho.com", "yahoo.com"),
    ("outlok.com", "outlook.com"),
];

/// Extracts email-shaped substrings and rewrites known-typo domains.
pub struct EmailDomainCorrector {
    email_pattern: Regex,
}

impl EmailDomainCorrector {
    pub fn new() -> Self {
        let email_pattern = Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b")
            .expect("email pattern is a fixed literal");
        Self { email_pattern }
    }
}

impl Default for EmailDomainCorrector {
    fn default() -> Self {
        Self::new()
    }
}

impl Heuristic for EmailDomainCorrector {
    fn name(&self) -> &'static str {
        "email_domains"
    }

    fn apply(&self, query: &str) -> StepOutcome {
        let emails: Vec<String> = self
            .email_pattern
            .find_iter(query)
            .map(|m| m.as_str().to_string())
            .collect();

        let mut text = query.to_string();
        let mut fixes = Vec::new();

        for email in &emails {
            let Some((_, domain)) = email.split_once('@') else {
                continue;
            };
            for (typo, canonical) in DOMAIN_TYPOS {
                if domain == *typo {
                    let corrected = email.replace(typo, canonical);
                    // First occurrence only; later duplicates are picked up
                    // by their own extraction above.
                    text = text.replacen(email.as_str(), &corrected, 1);
                    fixes.push(format!(
                        "Corrected email domain: '{}' to '{}'",
                        email, corrected
                    ));
                }
            }
        }

        StepOutcome { text, fixes }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_typo_domain_corrected() {
        let step = EmailDomainCorrector::new();
        let out = step.apply("reach me at john@gmal.com today");

        assert_eq!(out.text, "reach me at john@gmail.com today");
        assert_eq!(
            out.fixes,
            vec!["Corrected email domain: 'john@gmal.com' to 'john@gmail.com'"]
        );
    }

    #[test]
    fn test_valid_domain_untouched() {
        let step = EmailDomainCorrector::new();
        let out = step.apply("reach me at john@gmail.com today");

        assert_eq!(out.text, "reach me at john@gmail.com today");
        assert!(out.fixes.is_empty());
    }

    #[test]
    fn test_domain_must_match_exactly() {
        let step = EmailDomainCorrector::new();
        // Subdomain of a typo domain is not the typo domain itself.
        let out = step.apply("mail@sub.gmal.com");

        assert_eq!(out.text, "mail@sub.gmal.com");
        assert!(out.fixes.is_empty());
    }

    #[test]
    fn test_multiple_emails_each_corrected() {
        let step = EmailDomainCorrector::new();
        let out = step.apply("cc a@yaho.com and b@outlok.com");

        assert_eq!(out.text, "cc a@yahoo.com and b@outlook.com");
        assert_eq!(out.fixes.len(), 2);
    }
}
