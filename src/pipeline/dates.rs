//! Numeric date normalization to ISO `YYYY-MM-DD`.
//!
//! Two-digit years take the century prefix of the current year, so `99`
//! seen in the 2000s becomes `2099` whether or not that was meant. The
//! year source is an injected [`Clock`] so the rule stays deterministic
//! under test.

use chrono::Datelike;
use regex::{Captures, Regex};

use super::{Heuristic, StepOutcome};

/// Source of the current calendar year.
pub trait Clock: Send + Sync {
    fn current_year(&self) -> i32;
}

/// Wall-clock implementation backed by the local timezone.
pub struct SystemClock;

impl Clock for SystemClock {
    fn current_year(&self) -> i32 {
        chrono::Local::now().year()
    }
}

/// Rewrites `M/D/YY` and `M/D/YYYY` dates as zero-padded `YYYY-MM-DD`.
pub struct DateNormalizer {
    pattern: Regex,
    clock: Box<dyn Clock>,
}

impl DateNormalizer {
    pub fn new() -> Self {
        Self::with_clock(Box::new(SystemClock))
    }

    pub fn with_clock(clock: Box<dyn Clock>) -> Self {
        let pattern = Regex::new(r"(\d{1,2})/(\d{1,2})/(\d{2}|\d{4})")
            .expect("date pattern is a fixed literal");
        Self { pattern, clock }
    }
}

impl Default for DateNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Heuristic for DateNormalizer {
    fn name(&self) -> &'static str {
        "date_normalization"
    }

    fn apply(&self, query: &str) -> StepOutcome {
        let century = self.clock.current_year() / 100;
        let mut fixes = Vec::new();

        let text = self
            .pattern
            .replace_all(query, |caps: &Captures| {
                let month = format!("{:0>2}", &caps[1]);
                let day = format!("{:0>2}", &caps[2]);
                let year = if caps[3].len() == 2 {
                    format!("{}{}", century, &caps[3])
                } else {
                    caps[3].to_string()
                };
                fixes.push(format!(
                    "Normalized date format: {}/{}/{} to {}-{}-{}",
                    month,
                    day,
                    &year[year.len() - 2..],
                    year,
                    month,
                    day
                ));
                format!("{}-{}-{}", year, month, day)
            })
            .into_owned();

        StepOutcome { text, fixes }
    }
}
