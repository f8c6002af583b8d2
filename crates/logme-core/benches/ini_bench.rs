//! Criterion benchmarks for the `logme.ini` codec and upgrade path.
//!
//! Run with:
//! ```bash
//! cargo bench --package logme-core --bench ini_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use logme_core::{default_document, parse_document, upgrade, write_document, LoggerOverrides};

// ── Fixtures ──────────────────────────────────────────────────────────────────

fn document_with_loggers(count: usize) -> logme_core::ConfigDocument {
    let mut doc = default_document();
    for i in 0..count {
        doc.add_logger(&format!("logger_{i}"), &LoggerOverrides::default())
            .expect("generated names are valid");
    }
    doc
}

// ── Benchmarks ────────────────────────────────────────────────────────────────

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_document");
    for count in [0usize, 10, 100] {
        let text = write_document(&document_with_loggers(count));
        group.bench_with_input(BenchmarkId::from_parameter(count), &text, |b, text| {
            b.iter(|| parse_document(black_box(text)).expect("parse"))
        });
    }
    group.finish();
}

fn bench_write(c: &mut Criterion) {
    let mut group = c.benchmark_group("write_document");
    for count in [0usize, 10, 100] {
        let doc = document_with_loggers(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &doc, |b, doc| {
            b.iter(|| write_document(black_box(doc)))
        });
    }
    group.finish();
}

fn bench_upgrade_current(c: &mut Criterion) {
    let doc = document_with_loggers(10);
    c.bench_function("upgrade_current_document", |b| {
        b.iter(|| upgrade(black_box(doc.clone())).expect("upgrade"))
    });
}

criterion_group!(benches, bench_parse, bench_write, bench_upgrade_current);
criterion_main!(benches);
