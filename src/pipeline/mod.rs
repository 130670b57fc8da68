//! Ordered heuristic pipeline applied to user queries.
//!
//! Ten fixed steps run in sequence; each returns a possibly modified string
//! plus human-readable fix records, and fixes accumulate in step order.
//! The order is significant: later steps see earlier steps' output, so
//! whitespace cleanup runs after every content-mutating step and length
//! capping runs last so the final length constraint is exact.

pub mod cleanup;
pub mod commands;
pub mod currency;
pub mod dates;
pub mod denylist;
pub mod email;
pub mod pii;
pub mod typo;
pub mod urls;

pub use dates::{Clock, SystemClock};

use crate::config::PipelineConfig;

/// Output of a single heuristic step.
#[derive(Debug, Clone)]
pub struct StepOutcome {
    /// Possibly modified query text.
    pub text: String,
    /// Fix records produced by this step.
    pub fixes: Vec<String>,
}

impl StepOutcome {
    /// A pass-through outcome with no fixes.
    pub fn unchanged(text: &str) -> Self {
        Self {
            text: text.to_string(),
            fixes: Vec::new(),
        }
    }
}

/// One stateless transformation step in the query pipeline.
///
/// Steps must be total: inputs they do not recognize pass through
/// unchanged rather than producing an error.
pub trait Heuristic: Send + Sync {
    /// Short machine-friendly step name, used in log events.
    fn name(&self) -> &'static str;

    /// Apply the step to `query`, returning new text and fix records.
    fn apply(&self, query: &str) -> StepOutcome;
}

/// Final pipeline output: the processed text plus the ordered audit trail
/// of every automatic change that was applied.
#[derive(Debug, Clone)]
pub struct ProcessedQuery {
    /// The corrected/sanitized query text.
    pub text: String,
    /// Fix records in the order the steps discovered them.
    pub fixes: Vec<String>,
}

/// The fixed, ordered sequence of heuristic steps.
///
/// Pattern tables are compiled once at construction; `run` is pure and
/// safe to call from multiple threads.
pub struct QueryPipeline {
    steps: Vec<Box<dyn Heuristic>>,
}

impl QueryPipeline {
    /// Build the pipeline with the wall clock for date normalization.
    pub fn new(config: PipelineConfig) -> Self {
        Self::with_clock(config, Box::new(SystemClock))
    }

    /// Build the pipeline with an explicit clock, for deterministic
    /// two-digit-year expansion under test.
    pub fn with_clock(config: PipelineConfig, clock: Box<dyn Clock>) -> Self {
        let steps: Vec<Box<dyn Heuristic>> = vec![
            Box::new(typo::TypoCorrector::new()),
            Box::new(denylist::BannedWordFilter::new()),
            Box::new(dates::DateNormalizer::with_clock(clock)),
            Box::new(email::EmailDomainCorrector::new()),
            Box::new(commands::UnsafeCommandScanner::new()),
            Box::new(urls::UrlFilter::new()),
            Box::new(currency::CurrencyNormalizer::new()),
            Box::new(pii::PiiRedactor::new()),
            Box::new(cleanup::WhitespaceNormalizer::new()),
            Box::new(cleanup::LengthCap::new(config.max_query_length)),
        ];
        Self { steps }
    }

    /// Run every step in order on `query`.
    ///
    /// Total: never fails. Inputs no step recognizes pass through
    /// unchanged with an empty fix list.
    pub fn run(&self, query: &str) -> ProcessedQuery {
        let mut text = query.to_string();
        let mut fixes = Vec::new();

        for step in &self.steps {
            let outcome = step.apply(&text);
            if !outcome.fixes.is_empty() {
                tracing::debug!(
                    step = step.name(),
                    count = outcome.fixes.len(),
                    "applied fixes"
                );
            }
            text = outcome.text;
            fixes.extend(outcome.fixes);
        }

        ProcessedQuery { text, fixes }
    }
}

impl Default for QueryPipeline {
    fn default() -> Self {
        Self::new(PipelineConfig::default())
    }
}
