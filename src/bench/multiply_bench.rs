//! Criterion benchmarks: the sequential baseline against the pull-based
//! parallel multiplier at several worker counts.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use parmul::{Matrix, multiply, parallel_multiply};

fn patterned_matrix(rows: usize, columns: usize) -> Matrix {
    let data = (0..rows * columns).map(|i| (i % 100) as i32 - 50).collect();
    Matrix::from_vec(rows, columns, data).unwrap()
}

fn bench_sequential(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential");
    for size in [64, 128, 256] {
        let a = patterned_matrix(size, size);
        let b = patterned_matrix(size, size);
        group.bench_function(format!("{size}x{size}"), |bencher| {
            bencher.iter(|| multiply(black_box(&a), black_box(&b)).unwrap())
        });
    }
    group.finish();
}

fn bench_parallel(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel");
    let a = patterned_matrix(256, 256);
    let b = patterned_matrix(256, 256);
    for workers in [2, 4, 8] {
        group.bench_function(format!("256x256 t{workers}"), |bencher| {
            bencher.iter(|| parallel_multiply(black_box(&a), black_box(&b), workers).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sequential, bench_parallel);
criterion_main!(benches);
