//! Benchmarks for token construction and comparison.
//!
//! Compares the two backends side by side on the hot paths: looking up an
//! already published record, comparing tokens, hashing them, and rendering
//! their names.
//!
//! ```bash
//! cargo bench --bench type_index_benchmarks
//! ```

use criterion::{Criterion, criterion_group, criterion_main};
use rustc_hash::FxHashSet;
use std::collections::BTreeSet;
use std::hint::black_box;
use typeindex::{CttiIndex, Dynamic, RttiIndex};

trait Shape: Dynamic {}
struct Circle;
impl Shape for Circle {}

fn bench_construct(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct");

    group.bench_function("rtti_of", |b| b.iter(|| black_box(RttiIndex::of::<Vec<String>>())));
    group.bench_function("ctti_of", |b| b.iter(|| black_box(CttiIndex::of::<Vec<String>>())));
    group.bench_function("rtti_of_with_qualifiers", |b| {
        b.iter(|| black_box(RttiIndex::of_with_qualifiers::<&mut Vec<String>>()))
    });
    group.bench_function("ctti_of_with_qualifiers", |b| {
        b.iter(|| black_box(CttiIndex::of_with_qualifiers::<&mut Vec<String>>()))
    });

    let shape: &dyn Shape = &Circle;
    group.bench_function("rtti_of_runtime_value", |b| {
        b.iter(|| black_box(RttiIndex::of_runtime_value(black_box(shape))))
    });

    group.finish();
}

fn bench_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare");

    let (ra, rb) = (RttiIndex::of::<u32>(), RttiIndex::of::<&u32>());
    let (ca, cb) = (CttiIndex::of::<u32>(), CttiIndex::of::<&u32>());

    group.bench_function("rtti_eq_distinct_descriptors", |b| b.iter(|| black_box(ra) == black_box(rb)));
    group.bench_function("ctti_eq_interned", |b| b.iter(|| black_box(ca) == black_box(cb)));
    group.bench_function("rtti_cmp", |b| b.iter(|| black_box(ra).cmp(&black_box(RttiIndex::of::<u64>()))));
    group.bench_function("ctti_cmp", |b| b.iter(|| black_box(ca).cmp(&black_box(CttiIndex::of::<u64>()))));

    group.finish();
}

fn bench_collections(c: &mut Criterion) {
    let mut group = c.benchmark_group("collections");

    let rtti = [
        RttiIndex::of::<u8>(),
        RttiIndex::of::<u16>(),
        RttiIndex::of::<u32>(),
        RttiIndex::of::<u64>(),
        RttiIndex::of::<String>(),
        RttiIndex::of::<Vec<u8>>(),
    ];
    let ctti = [
        CttiIndex::of::<u8>(),
        CttiIndex::of::<u16>(),
        CttiIndex::of::<u32>(),
        CttiIndex::of::<u64>(),
        CttiIndex::of::<String>(),
        CttiIndex::of::<Vec<u8>>(),
    ];

    group.bench_function("rtti_hash_set", |b| {
        b.iter(|| black_box(rtti.iter().copied().collect::<FxHashSet<_>>()))
    });
    group.bench_function("ctti_hash_set", |b| {
        b.iter(|| black_box(ctti.iter().copied().collect::<FxHashSet<_>>()))
    });
    group.bench_function("rtti_btree_set", |b| {
        b.iter(|| black_box(rtti.iter().copied().collect::<BTreeSet<_>>()))
    });
    group.bench_function("ctti_btree_set", |b| {
        b.iter(|| black_box(ctti.iter().copied().collect::<BTreeSet<_>>()))
    });

    group.finish();
}

fn bench_names(c: &mut Criterion) {
    let mut group = c.benchmark_group("names");

    let index = RttiIndex::of::<std::collections::HashMap<String, Vec<u8>>>();
    group.bench_function("pretty_name", |b| b.iter(|| black_box(index.pretty_name())));
    group.bench_function("demangle_symbol", |b| {
        b.iter(|| black_box(typeindex::name::pretty(black_box(b"_ZN4core3ptr8drop_in_place17h0123456789abcdefE"))))
    });

    group.finish();
}

criterion_group!(benches, bench_construct, bench_compare, bench_collections, bench_names);
criterion_main!(benches);
