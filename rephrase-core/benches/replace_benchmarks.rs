//! Performance benchmarks for phrase replacement
//!
//! Run with: cargo bench --bench replace_benchmarks

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rephrase_core::{replace_all, MappingSet, Replacer};
use std::hint::black_box;

/// Generate test text of specified size
fn generate_text(size: usize) -> String {
    let base = "The Colour of the centre was\n  realised by the Organisation. ";
    let mut text = base.repeat(size / base.len() + 1);
    let mut cut = size.min(text.len());
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    text.truncate(cut);
    text
}

fn mappings() -> MappingSet {
    vec![
        ("colour", "color"),
        ("centre", "center"),
        ("-ise-", "-ize-"),
        ("-isation", "-ization"),
        ("was realised", "became clear"),
    ]
    .into_iter()
    .collect()
}

/// Benchmark different text sizes with a precompiled replacer
fn bench_text_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_sizes");
    let replacer = Replacer::new(&mappings());

    for size in [1024, 10_240, 102_400] {
        let text = generate_text(size);

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::new("replacer", size), &text, |b, text| {
            b.iter(|| replacer.replace(black_box(text)));
        });
    }

    group.finish();
}

/// Compare compiling per call against reusing a replacer
fn bench_compile_reuse(c: &mut Criterion) {
    let mut group = c.benchmark_group("compile_reuse");
    let text = generate_text(10_240);
    let set = mappings();
    let replacer = Replacer::new(&set);

    group.bench_function("replace_all", |b| {
        b.iter(|| replace_all(black_box(&text), black_box(&set)));
    });
    group.bench_function("replacer", |b| {
        b.iter(|| replacer.replace(black_box(&text)));
    });

    group.finish();
}

criterion_group!(benches, bench_text_sizes, bench_compile_reuse);
criterion_main!(benches);
