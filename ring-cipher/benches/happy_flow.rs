use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ring_cipher::matrix::{GLn, sample_nonsingular};
use ring_cipher::ring::Zm;

use std::sync::Arc;

fn bench_happy_flow(c: &mut Criterion) {
    // 1) one-time setup
    let ring = Arc::new(Zm::try_with(96).expect("build Z_96"));
    let mut rng = StdRng::seed_from_u64(12345);

    let mut group = c.benchmark_group("GLn over Z_96");

    for n in [4, 16, 32] {
        let sampled = sample_nonsingular(n, &ring, &mut rng).expect("sample matrix");
        let matrix = sampled.as_matrix().clone();

        // 2) sample a fresh invertible matrix
        group.bench_with_input(BenchmarkId::new("sample_nonsingular", n), &n, |b, &n| {
            b.iter(|| black_box(sample_nonsingular(n, &ring, &mut rng).expect("sample")));
        });

        // 3) invert an already sampled one
        group.bench_with_input(BenchmarkId::new("invert", n), &matrix, |b, m| {
            b.iter(|| black_box(GLn::try_from_matrix(black_box(m.clone())).expect("invert")));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_happy_flow);
criterion_main!(benches);
