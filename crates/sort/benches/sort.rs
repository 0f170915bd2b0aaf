use std::hint::black_box;
use std::time::{Duration, Instant};

use bench::{DISTRIBUTIONS, apply_runtime_for_size, generate_dataset};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sort::{SortAlgorithm, algorithm_name, all_algorithms, merge_sort, sort_i64};

const BENCH_SIZES: [usize; 4] = [4096, 16384, 65536, 262144];

fn bench_sort(c: &mut Criterion) {
    for &dist in &DISTRIBUTIONS {
        let mut group = c.benchmark_group(format!("sort/{}", dist.label()));

        for &algo in all_algorithms() {
            for &size in &BENCH_SIZES {
                apply_runtime_for_size(&mut group, size);
                let base = generate_dataset(dist, size, algo as u64 ^ size as u64);

                group.bench_function(BenchmarkId::new(algorithm_name(algo), size), |bencher| {
                    bencher.iter_custom(|iters| {
                        let mut total = Duration::ZERO;
                        for _ in 0..iters {
                            let mut data = base.clone();
                            let start = Instant::now();
                            sort_i64(algo, &mut data);
                            total += start.elapsed();
                            black_box(&data);
                        }
                        total
                    });
                });
            }
        }

        // Merge sort's native form allocates its output instead of sorting in place.
        for &size in &BENCH_SIZES {
            apply_runtime_for_size(&mut group, size);
            let base = generate_dataset(dist, size, SortAlgorithm::MergeSort as u64 ^ size as u64);
            group.bench_with_input(
                BenchmarkId::new("merge_sort_copying", size),
                &base,
                |bencher, base| bencher.iter(|| black_box(merge_sort(black_box(base)))),
            );
        }

        for &size in &BENCH_SIZES {
            apply_runtime_for_size(&mut group, size);
            let base = generate_dataset(dist, size, 0xBA5E_0001);
            group.bench_function(BenchmarkId::new("std_unstable", size), |bencher| {
                bencher.iter_custom(|iters| {
                    let mut total = Duration::ZERO;
                    for _ in 0..iters {
                        let mut data = base.clone();
                        let start = Instant::now();
                        data.sort_unstable();
                        total += start.elapsed();
                        black_box(&data);
                    }
                    total
                });
            });
        }

        for &size in &BENCH_SIZES {
            apply_runtime_for_size(&mut group, size);
            let base = generate_dataset(dist, size, 0xBA5E_0002);
            group.bench_function(BenchmarkId::new("std_stable", size), |bencher| {
                bencher.iter_custom(|iters| {
                    let mut total = Duration::ZERO;
                    for _ in 0..iters {
                        let mut data = base.clone();
                        let start = Instant::now();
                        data.sort();
                        total += start.elapsed();
                        black_box(&data);
                    }
                    total
                });
            });
        }

        group.finish();
    }
}

criterion_group!(benches, bench_sort);
criterion_main!(benches);
