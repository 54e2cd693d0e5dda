//! Offset computation and traversal for both array kinds.
//!
//! Run with: cargo bench --bench indexing

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use multiarray::{dims, ArrayMd, MultiArray};

fn bench_fixed_shape(c: &mut Criterion) {
    let mut group = c.benchmark_group("array_md");
    let a = ArrayMd::<f64, dims![64, 64]>::from_fn(|i| i as f64);
    group.throughput(Throughput::Elements(64 * 64));

    group.bench_function("chained_index", |bench| {
        bench.iter(|| {
            let mut sum = 0.0;
            for i in 0..64 {
                for j in 0..64 {
                    sum += a[black_box(i)][black_box(j)];
                }
            }
            sum
        })
    });
    group.bench_function("checked_at", |bench| {
        bench.iter(|| {
            let mut sum = 0.0;
            for i in 0..64 {
                for j in 0..64 {
                    sum += a.at(&[black_box(i), black_box(j)]).copied().unwrap_or_default();
                }
            }
            sum
        })
    });
    group.bench_function("apply", |bench| {
        bench.iter(|| {
            let mut sum = 0.0;
            a.apply(|&x, _| sum += x);
            sum
        })
    });
    group.finish();
}

fn bench_adapter(c: &mut Criterion) {
    let mut group = c.benchmark_group("multi_array");

    for size in [16, 64, 256] {
        group.throughput(Throughput::Elements((size * size) as u64));
        for (name, priorities) in [("row_major", [0, 1]), ("column_major", [1, 0])] {
            let mut a = MultiArray::<_, 2>::new(vec![1.0_f64; size * size]);
            if a.set_extents_and_priorities([size, size], priorities).is_err() {
                continue;
            }

            group.bench_with_input(
                BenchmarkId::new(format!("index_{}", name), size),
                &size,
                |bench, &size| {
                    bench.iter(|| {
                        let mut sum = 0.0;
                        for i in 0..size {
                            for j in 0..size {
                                sum += a[[black_box(i), black_box(j)]];
                            }
                        }
                        sum
                    })
                },
            );
            group.bench_with_input(
                BenchmarkId::new(format!("apply_{}", name), size),
                &size,
                |bench, _| {
                    bench.iter(|| {
                        let mut sum = 0.0;
                        a.apply(|&x, _| sum += x);
                        sum
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_fixed_shape, bench_adapter);
criterion_main!(benches);
