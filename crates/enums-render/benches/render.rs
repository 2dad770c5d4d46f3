//! Rendering benchmarks.
//!
//! Renders the TypeScript grammar table, the largest built-in table, with
//! every target.

#![allow(clippy::unwrap_used)]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use enums_core::Target;
use enums_grammar::Lang;
use enums_render::renderer_for;

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render/typescript");
    let table = Lang::TypeScript.table("SyntaxType").unwrap();
    group.throughput(Throughput::Elements(table.len() as u64));

    for target in Target::ALL {
        group.bench_with_input(
            BenchmarkId::from_parameter(target.label()),
            &table,
            |b, table| {
                let renderer = renderer_for(target);
                b.iter(|| renderer.render(black_box(table)).unwrap());
            },
        );
    }

    group.finish();
}

fn bench_table(c: &mut Criterion) {
    c.bench_function("table/typescript", |b| {
        b.iter(|| Lang::TypeScript.table(black_box("SyntaxType")).unwrap());
    });
}

criterion_group!(benches, bench_render, bench_table);
criterion_main!(benches);
