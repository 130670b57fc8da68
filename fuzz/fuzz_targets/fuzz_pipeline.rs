//! Fuzz target for the query pipeline.
//!
//! The pipeline is a total function: arbitrary input must never panic,
//! the length cap must hold on the final string, and rerunning on the
//! processed output must stay total.

#![no_main]

use libfuzzer_sys::fuzz_target;
use queryguard::config::PipelineConfig;
use queryguard::QueryPipeline;

fuzz_target!(|data: &str| {
    let max = 500;
    let pipeline = QueryPipeline::new(PipelineConfig {
        max_query_length: max,
    });

    let processed = pipeline.run(data);

    // The cap is exact on the finished string: at most max chars plus the
    // three-char ellipsis.
    assert!(
        processed.text.chars().count() <= max + 3,
        "length cap violated"
    );

    // Fix records are descriptive strings, never empty markers.
    assert!(processed.fixes.iter().all(|f| !f.is_empty()));

    // Reprocessing the output must also never panic.
    let _ = pipeline.run(&processed.text);
});
