//! Structural validation of tool outputs and response-side checks.
//!
//! Tools whose name contains `json` get a well-formedness check and a
//! canonical re-serialization; every other tool passes through untouched.
//! Dispatch by naming convention is the extension point for adding
//! per-tool validators later.

mod json;

pub mod hallucination;

pub use hallucination::{HallucinationDetector, HallucinationReport};

/// Result of validating one tool output.
#[derive(Debug, Clone)]
pub struct ValidationOutcome {
    /// Whether the output passed validation.
    pub is_valid: bool,
    /// Canonicalized output when validation succeeded; absent on failure.
    pub corrected: Option<String>,
    /// Diagnostic messages for the caller.
    pub messages: Vec<String>,
}

/// Stateless validator for tool outputs, dispatched by tool name.
#[derive(Debug, Default)]
pub struct ToolOutputValidator;

impl ToolOutputValidator {
    pub fn new() -> Self {
        Self
    }

    /// Validate `output` according to the convention encoded in
    /// `tool_name`. The only failing case is malformed JSON from a
    /// json-named tool; the caller decides whether to retry or discard.
    pub fn validate(&self, tool_name: &str, output: &str) -> ValidationOutcome {
        if tool_name.contains("json") {
            return self.validate_json(tool_name, output);
        }

        // No validator registered for this tool shape: pass through.
        ValidationOutcome {
            is_valid: true,
            corrected: Some(output.to_string()),
            messages: Vec::new(),
        }
    }

    fn validate_json(&self, tool_name: &str, output: &str) -> ValidationOutcome {
        match serde_json::from_str::<serde_json::Value>(output) {
            Ok(value) => ValidationOutcome {
                is_valid: true,
                corrected: Some(json::to_canonical_string(&value)),
                messages: Vec::new(),
            },
            Err(err) => {
                tracing::warn!(tool = tool_name, error = %err, "tool returned invalid JSON");
                ValidationOutcome {
                    is_valid: false,
                    corrected: None,
                    messages: vec![format!("Invalid JSON output from {}", tool_name)],
                }
            }
        }
    }
}
