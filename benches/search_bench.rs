//! Query filter benchmarks.
//!
//! The site index is tiny, so the interesting numbers are per-keystroke
//! latency on it and how the linear scan grows with corpus size.
//!
//! # Groups
//!
//! | Group | What it measures |
//! |-------|-----------------|
//! | `site` | `filter` and `SearchIndex::search` over the built-in index |
//! | `haystack` | Cached haystacks vs rebuilding them per query |
//! | `scaling` | `SearchIndex::search` as the corpus grows from 100 to 100k |
//!
//! # Viewing results
//!
//! ```sh
//! cargo bench --bench search_bench
//! open target/criterion/report/index.html
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use fake::faker::lorem::en::{Sentence, Words};
use fake::Fake;
use laylife_core::{build_index, filter, Category, Icon, SearchIndex, SearchRecord};
use std::hint::black_box;

const QUERIES: &[&str] = &["news", "position abuja", "quality", "zzz-nonexistent", "a"];

/// `n` records of lorem text spread over every category.
fn lorem_corpus(n: usize) -> Vec<SearchRecord> {
    (0..n)
        .map(|i| {
            let title: Vec<String> = Words(1..4).fake();
            let description: String = Sentence(4..12).fake();
            SearchRecord::new(
                title.join(" "),
                description,
                format!("/bench/{i}"),
                Category::ALL[i % Category::ALL.len()],
                Icon::FileText,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Site index
// ---------------------------------------------------------------------------

fn site_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("site");
    let records = build_index();
    let index = SearchIndex::build();

    for q in QUERIES {
        group.bench_with_input(BenchmarkId::new("filter", q), q, |b, q| {
            b.iter(|| filter(black_box(q), black_box(&records)))
        });
        group.bench_with_input(BenchmarkId::new("index", q), q, |b, q| {
            b.iter(|| index.search(black_box(q)).len())
        });
    }

    group.bench_function("build_index", |b| b.iter(build_index));

    group.finish();
}

// ---------------------------------------------------------------------------
// Haystack caching
// ---------------------------------------------------------------------------

fn haystack_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("haystack");
    let records = lorem_corpus(10_000);
    let index = SearchIndex::from_records(records.clone());

    // A rare term, so neither side stops early at the cap.
    group.bench_function("rebuilt_10k", |b| {
        b.iter(|| filter(black_box("zzz"), black_box(&records)))
    });
    group.bench_function("cached_10k", |b| {
        b.iter(|| index.search(black_box("zzz")).len())
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Scaling
// ---------------------------------------------------------------------------

fn scaling_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");

    for size in [100usize, 1_000, 10_000, 100_000] {
        let index = SearchIndex::from_records(lorem_corpus(size));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("two_terms_miss", size), &index, |b, index| {
            b.iter(|| index.search(black_box("lorem zzz")).len())
        });
    }

    group.finish();
}

criterion_group!(search_benches, site_bench, haystack_bench, scaling_bench);
criterion_main!(search_benches);
