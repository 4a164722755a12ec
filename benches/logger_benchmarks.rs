//! Criterion benchmarks for structured_logger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use structured_logger::prelude::*;

fn null_sink() -> FnSink<impl Fn(StructuredLogRecord) -> Result<()> + Send + Sync> {
    FnSink::new(|record: StructuredLogRecord| {
        black_box(record);
        Ok(())
    })
}

// ============================================================================
// Dispatch Benchmarks
// ============================================================================

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    group.throughput(Throughput::Elements(1));

    let logger = create_structured_logger(null_sink());

    group.bench_function("info_no_metadata", |b| {
        b.iter(|| logger.info(black_box("Info message"), None));
    });

    group.bench_function("error_with_metadata", |b| {
        b.iter(|| {
            let metadata = Metadata::new()
                .with_field("userId", "12345")
                .with_field("status", 500);
            logger.error(black_box("Error message"), metadata)
        });
    });

    group.bench_function("generic_log", |b| {
        b.iter(|| logger.log(black_box(Severity::Notice), "Notice message", None));
    });

    group.finish();
}

// ============================================================================
// Sink Benchmarks
// ============================================================================

fn bench_memory_sink(c: &mut Criterion) {
    let mut group = c.benchmark_group("memory_sink");
    group.throughput(Throughput::Elements(1));

    let sink = MemorySink::new();
    let logger = create_structured_logger(&sink);

    group.bench_function("record", |b| {
        b.iter(|| {
            if sink.len() > 10_000 {
                sink.clear();
            }
            logger.debug(black_box("Debug message"), None)
        });
    });

    group.finish();
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn bench_output_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("output_format");

    let record = StructuredLogRecord::new(
        Severity::Warning,
        "Resource usage high",
        Some(
            Metadata::new()
                .with_field("cpu_percent", 85.5)
                .with_field("host", "web-01"),
        ),
    );

    for (name, format) in [
        ("text", OutputFormat::Text),
        ("json", OutputFormat::Json),
        ("logfmt", OutputFormat::Logfmt),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| format.format(black_box(&record), &TimestampFormat::Iso8601));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_dispatch, bench_memory_sink, bench_output_format);
criterion_main!(benches);
