//! Criterion benchmarks for the two conversion directions over a nested
//! fixture shaped like a real driver document: flat scalar fields, a child
//! document per level, and a string array per level.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use mapdoc_core::{export, export_with, import, Keyword, PersistentMap, PersistentSeq,
    PersistentValue};

fn sample_map(width: usize, depth: usize) -> PersistentMap {
    let mut builder = PersistentMap::builder();
    for i in 0..width {
        builder.insert(Keyword::intern(&format!("field_{i}")), i as i64);
    }
    let items: PersistentSeq = (0..width)
        .map(|i| PersistentValue::from(format!("item_{i}")))
        .collect();
    builder.insert(Keyword::intern("items"), items);
    if depth > 0 {
        builder.insert(Keyword::intern("child"), sample_map(width, depth - 1));
    }
    builder.freeze()
}

fn bench_import(c: &mut Criterion) {
    let map = sample_map(16, 4);
    c.bench_function("import_nested", |b| b.iter(|| import(black_box(&map))));
}

fn bench_export(c: &mut Criterion) {
    let doc = import(&sample_map(16, 4));
    c.bench_function("export_nested", |b| b.iter(|| export(black_box(&doc))));
    c.bench_function("export_nested_plain", |b| {
        b.iter(|| export_with(black_box(&doc), false))
    });
}

criterion_group!(benches, bench_import, bench_export);
criterion_main!(benches);
