//! QueryGuard
//!
//! Heuristic pre/post-processing for automated agent loops.
//!
//! Two independent units compose the crate:
//!
//! - [`pipeline::QueryPipeline`] — a fixed, ordered sequence of ten pure
//!   text heuristics (typo correction, denylist filtering, date/currency
//!   normalization, PII redaction, URL checks, whitespace cleanup, length
//!   capping) applied to a user query before it reaches a language model.
//!   The pipeline is total: it never fails, and every automatic change is
//!   reported as a human-readable fix record.
//! - [`validator`] — stateless checks applied on the way back: JSON
//!   well-formedness for tools whose name contains `json`, and a coarse
//!   entity-overlap hallucination check between a response and its query.
//!
//! Neither unit depends on the other's state. Compiled pattern tables are
//! built once at construction and all public types are `Send + Sync`, so
//! independent calls may run in parallel freely.

pub mod config;
pub mod pipeline;
pub mod telemetry;
pub mod validator;

use std::sync::OnceLock;

pub use config::PipelineConfig;
pub use pipeline::{ProcessedQuery, QueryPipeline};
pub use validator::{
    HallucinationDetector, HallucinationReport, ToolOutputValidator, ValidationOutcome,
};

/// Process-wide pipeline, built from environment configuration on first use.
fn default_pipeline() -> &'static QueryPipeline {
    static PIPELINE: OnceLock<QueryPipeline> = OnceLock::new();
    PIPELINE.get_or_init(|| QueryPipeline::new(config::load()))
}

/// Process-wide hallucination detector (pattern tables compiled once).
fn default_detector() -> &'static HallucinationDetector {
    static DETECTOR: OnceLock<HallucinationDetector> = OnceLock::new();
    DETECTOR.get_or_init(HallucinationDetector::new)
}

/// Run the full heuristic pipeline on a raw query.
///
/// Invoked by the host loop immediately before a query is forwarded to a
/// language model. Uses the process-wide default configuration; build a
/// [`QueryPipeline`] directly to override the length cap per call site.
pub fn apply_heuristics(query: &str) -> ProcessedQuery {
    default_pipeline().run(query)
}

/// Validate a tool output before it is trusted downstream.
///
/// Invoked by the host loop after a tool call returns. The only failure
/// signal is JSON-structural invalidity for json-named tools; see
/// [`ValidationOutcome`].
pub fn validate_result(tool_name: &str, output: &str) -> ValidationOutcome {
    ToolOutputValidator::new().validate(tool_name, output)
}

/// Heuristically flag response content absent from the originating query.
pub fn check_for_hallucinations(query: &str, response: &str) -> HallucinationReport {
    default_detector().check(query, response)
}
