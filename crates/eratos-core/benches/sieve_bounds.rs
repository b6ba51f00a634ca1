//! Criterion benchmark: full sieve at increasing bounds.
//! Run with: cargo bench -p eratos-core --bench sieve_bounds (QUICK=1 for a short pass)

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use eratos_core::{get_primes, Sieve};
use std::hint::black_box;
use std::time::Duration;

fn bench_sieve_bounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("sieve_bounds");
    if std::env::var("QUICK").is_ok() {
        group
            .sample_size(10)
            .measurement_time(Duration::from_secs(2));
    } else {
        group.sample_size(20);
    }

    for max in [1_000_i64, 100_000, 1_000_000, 10_000_000] {
        group.bench_with_input(BenchmarkId::new("get_primes", max), &max, |b, &max| {
            b.iter(|| black_box(get_primes(black_box(max)).unwrap()));
        });
    }

    // Table only: isolates elimination from result extraction.
    group.bench_function("table_count_1m", |b| {
        let sieve = Sieve::default();
        b.iter(|| black_box(sieve.table(black_box(1_000_000)).unwrap().count()));
    });

    group.finish();
}

criterion_group!(benches, bench_sieve_bounds);
criterion_main!(benches);
