use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use spvec::SparseVector;

const LENGTH: usize = 100_000;

fn random_vector(nnz: usize, seed: u64) -> SparseVector<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut v = SparseVector::with_length(LENGTH);
    v.set_alloc(nnz);
    for _ in 0..nnz {
        let index = rng.gen_range(0..LENGTH);
        v[index] = rng.gen_range(-1.0..1.0);
    }
    v
}

fn bench_random_writes(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_writes");
    for nnz in [100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::from_parameter(nnz), &nnz, |b, &nnz| {
            b.iter(|| random_vector(black_box(nnz), 7))
        });
    }
    group.finish();
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");
    for nnz in [1_000, 10_000] {
        let a = random_vector(nnz, 1);
        let b = random_vector(nnz, 2);

        group.bench_with_input(BenchmarkId::new("add", nnz), &nnz, |bench, _| {
            bench.iter(|| black_box(&a) + black_box(&b))
        });
        group.bench_with_input(BenchmarkId::new("dot", nnz), &nnz, |bench, _| {
            bench.iter(|| black_box(&a) * black_box(&b))
        });
    }
    group.finish();
}

fn bench_dense_dot(c: &mut Criterion) {
    let a = random_vector(10_000, 3);
    let dense = random_vector(50_000, 4).to_dense();

    c.bench_function("dot_dense 10k nnz", |b| {
        b.iter(|| a.dot_dense(black_box(&dense)))
    });
}

fn bench_text_codec(c: &mut Criterion) {
    let v = random_vector(5_000, 5);
    let text = v.to_string();

    c.bench_function("format sparse text", |b| b.iter(|| black_box(&v).to_string()));
    c.bench_function("parse sparse text", |b| {
        b.iter(|| black_box(text.as_str()).parse::<SparseVector<f64>>())
    });
}

fn bench_compact(c: &mut Criterion) {
    let mut v = random_vector(10_000, 6);
    for (_, value) in v.iter_mut().step_by(2) {
        *value = 0.0;
    }

    c.bench_function("compact half zeros", |b| {
        b.iter(|| {
            let mut copy = v.clone();
            copy.compact()
        })
    });
}

criterion_group!(
    benches,
    bench_random_writes,
    bench_merge,
    bench_dense_dot,
    bench_text_codec,
    bench_compact
);
criterion_main!(benches);
