use cplan_catalog::{ChainedHashTable, Course};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

fn identifiers(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("CSCI{i:04}")).collect()
}

fn filled(bucket_count: u32, ids: &[String]) -> ChainedHashTable {
    let mut table = ChainedHashTable::with_buckets(bucket_count).unwrap();
    for id in ids {
        table.insert(Course::new(id.as_str(), "Benchmark Course", ["CSCI0000"])).unwrap();
    }
    table
}

// ============================================================================
// Benchmark: Insertion
// ============================================================================

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    let ids = identifiers(1_000);
    group.throughput(Throughput::Elements(ids.len() as u64));

    for buckets in [10_u32, 100, 1_000] {
        group.bench_with_input(BenchmarkId::new("buckets", buckets), &buckets, |b, &buckets| {
            b.iter(|| black_box(filled(buckets, &ids)));
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Lookup (chain length grows as buckets shrink)
// ============================================================================

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    let ids = identifiers(1_000);

    for buckets in [10_u32, 100, 1_000] {
        let table = filled(buckets, &ids);
        group.bench_with_input(BenchmarkId::new("hit", buckets), &table, |b, table| {
            b.iter(|| black_box(table.search("csci0500")));
        });
        group.bench_with_input(BenchmarkId::new("miss", buckets), &table, |b, table| {
            b.iter(|| black_box(table.search("MATH9999")));
        });
    }

    group.finish();
}

// ============================================================================
// Benchmark: Sorted listing
// ============================================================================

fn bench_list_all(c: &mut Criterion) {
    let table = filled(100, &identifiers(1_000));
    c.bench_function("list_all_1000", |b| b.iter(|| black_box(table.list_all())));
}

criterion_group!(benches, bench_insert, bench_search, bench_list_all);
criterion_main!(benches);
