//! Pipeline throughput benchmarks.
//!
//! Measures full ten-step latency across query sizes and the JSON
//! validation path.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use queryguard::config::PipelineConfig;
use queryguard::{QueryPipeline, ToolOutputValidator};

fn query_of(length: usize) -> String {
    "Can u check the schedual for 1/5/24 and email john@gmal.com please. "
        .chars()
        .cycle()
        .take(length)
        .collect()
}

fn bench_pipeline_latency(c: &mut Criterion) {
    let pipeline = QueryPipeline::new(PipelineConfig {
        max_query_length: 100_000,
    });
    let mut group = c.benchmark_group("pipeline_latency");

    for (name, length) in [("256_chars", 256), ("2048_chars", 2048), ("16384_chars", 16384)] {
        let query = query_of(length);

        group.throughput(Throughput::Bytes(length as u64));
        group.bench_with_input(BenchmarkId::new("run", name), &query, |b, q| {
            b.iter(|| pipeline.run(black_box(q)))
        });
    }

    group.finish();
}

fn bench_json_validation(c: &mut Criterion) {
    let validator = ToolOutputValidator::new();
    let payload = serde_json::json!({
        "items": (0..100).map(|i| serde_json::json!({"id": i, "ok": true})).collect::<Vec<_>>(),
    })
    .to_string();

    let mut group = c.benchmark_group("json_validation");
    group.throughput(Throughput::Bytes(payload.len() as u64));
    group.bench_function("valid_payload", |b| {
        b.iter(|| validator.validate(black_box("get_data_json"), black_box(&payload)))
    });
    group.bench_function("invalid_payload", |b| {
        b.iter(|| validator.validate(black_box("get_data_json"), black_box("{truncated")))
    });
    group.finish();
}

criterion_group!(benches, bench_pipeline_latency, bench_json_validation);
criterion_main!(benches);
