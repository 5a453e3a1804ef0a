//! Benchmarks for the in-memory show store primitives.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use show_store_core::fixture::Fixture;
use show_store_core::{MemoryStore, Show, ShowStore, SHOWS_COLLECTION};
use std::hint::black_box;

/// Creates a store holding `count` seeded shows.
fn seeded_store(count: i64) -> MemoryStore {
    let shows = (1..=count)
        .map(|id| Show {
            id,
            ..Show::new(format!("Show {}", id), id % 300)
        })
        .collect();
    MemoryStore::from_fixture(Fixture::default().with_collection(SHOWS_COLLECTION, shows))
}

/// Benchmark: lookup by id at several collection sizes
fn benchmark_get_by_id(c: &mut Criterion) {
    let mut group = c.benchmark_group("get_by_id");
    for size in [10i64, 1_000, 10_000] {
        let store = seeded_store(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| store.get_by_id(SHOWS_COLLECTION, black_box(size / 2)).unwrap())
        });
    }
    group.finish();
}

/// Benchmark: full collection read
fn benchmark_get_all(c: &mut Criterion) {
    let store = seeded_store(1_000);
    c.bench_function("get_all_1000", |b| {
        b.iter(|| black_box(store.get(SHOWS_COLLECTION).unwrap()))
    });
}

/// Benchmark: create followed by delete
fn benchmark_create_delete(c: &mut Criterion) {
    let store = seeded_store(1_000);
    c.bench_function("create_delete", |b| {
        b.iter(|| {
            let created = store
                .create(SHOWS_COLLECTION, Show::new("Bench", "1"))
                .unwrap();
            store.delete_by_id(SHOWS_COLLECTION, created.id).unwrap();
        })
    });
}

criterion_group!(
    benches,
    benchmark_get_by_id,
    benchmark_get_all,
    benchmark_create_delete
);
criterion_main!(benches);
