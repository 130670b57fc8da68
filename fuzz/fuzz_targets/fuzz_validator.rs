//! Fuzz target for tool-output validation and the hallucination check.
//!
//! Both checks are stateless and total; outcomes must stay internally
//! consistent on arbitrary input.

#![no_main]

use libfuzzer_sys::fuzz_target;
use queryguard::{check_for_hallucinations, validate_result};

fuzz_target!(|data: &str| {
    // JSON-named tool: outcome must be internally consistent.
    let outcome = validate_result("fuzz_json", data);
    if outcome.is_valid {
        assert!(outcome.messages.is_empty());
        let canonical = outcome.corrected.expect("valid outcome carries output");
        // Canonical form must itself parse.
        assert!(serde_json::from_str::<serde_json::Value>(&canonical).is_ok());
    } else {
        assert!(outcome.corrected.is_none());
        assert!(!outcome.messages.is_empty());
    }

    // Pass-through tools echo the output verbatim.
    let passthrough = validate_result("shell", data);
    assert!(passthrough.is_valid);
    assert_eq!(passthrough.corrected.as_deref(), Some(data));

    // Hallucination check is total and self-consistent.
    let report = check_for_hallucinations(data, data);
    assert_eq!(report.flagged, !report.reasons.is_empty());
});
