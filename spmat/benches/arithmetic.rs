use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spmat::{add, multiply, SparseMatrix};

/// Random square matrix with roughly `density * n * n` nonzeros
fn random_matrix(rng: &mut StdRng, n: usize, density: f64) -> SparseMatrix {
    let nnz = ((n * n) as f64 * density) as usize;
    let entries: Vec<(usize, usize, i64)> = (0..nnz)
        .map(|_| (rng.gen_range(0..n), rng.gen_range(0..n), rng.gen_range(-100..=100)))
        .collect();
    SparseMatrix::from_entries(n, n, entries).expect("entries are in bounds")
}

fn bench_arithmetic(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let mut group = c.benchmark_group("sparse_arithmetic");

    for &n in &[100usize, 1_000, 5_000] {
        let a = random_matrix(&mut rng, n, 0.001);
        let b = random_matrix(&mut rng, n, 0.001);

        group.bench_with_input(BenchmarkId::new("add", n), &n, |bench, _| {
            bench.iter(|| add(black_box(&a), black_box(&b)).unwrap())
        });
        group.bench_with_input(BenchmarkId::new("multiply", n), &n, |bench, _| {
            bench.iter(|| multiply(black_box(&a), black_box(&b)).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_arithmetic);
criterion_main!(benches);
