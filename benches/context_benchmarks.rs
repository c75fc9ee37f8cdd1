//! Context adapter benchmarks

use context_framework::prelude::*;
use criterion::{criterion_group, criterion_main, Criterion};
use serde_json::json;
use std::hint::black_box;

fn benchmark_add_get(c: &mut Criterion) {
    let columns: Vec<String> = (0..64).map(|i| format!("col_{}", i)).collect();
    let table = DataFrame::new(columns, 1024);
    let adapter = TableContextAdapter::for_table(&table);

    let mut metadata = Metadata::new();
    metadata.insert("source".to_string(), json!("fileA"));

    c.bench_function("add_context_cell", |b| {
        b.iter(|| {
            adapter
                .add_context(black_box(TableKey::cell(512, "col_32")), metadata.clone())
                .unwrap();
        })
    });

    c.bench_function("get_context_cell", |b| {
        let key = TableKey::cell(512, "col_32");
        b.iter(|| {
            let _result = black_box(adapter.get_context(black_box(&key)));
        })
    });

    c.bench_function("reject_missing_column", |b| {
        let key = TableKey::column("missing");
        b.iter(|| {
            let _result = black_box(adapter.get_context(black_box(&key)));
        })
    });
}

criterion_group!(benches, benchmark_add_get);
criterion_main!(benches);
