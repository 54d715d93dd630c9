// File: crates/algorithms/benches/bn256.rs
//! Benchmarks for the BN256 pairing curve
//!
//! Covers group arithmetic in G1, G2 and GT (plain ladders against the
//! lattice-decomposed variants), the pairing itself and hashing to G1.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use bn256_algorithms::bn256::{
    hash_to_curve, hash_to_curve_try_increment, pairing, random_scalar, G1Affine,
    G1Projective, G2Affine, G2Projective, Gt,
};
use bn256_params::utils::hash::HASH_TO_G1_DEFAULT_DST;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Benchmark scalar multiplication in G1
fn bench_g1(c: &mut Criterion) {
    let mut group = c.benchmark_group("bn256_g1");
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    let p = G1Projective::generator();

    group.bench_function("add", |b| {
        let q = p.double();
        b.iter(|| black_box(black_box(p) + black_box(q)))
    });

    group.bench_function("double", |b| b.iter(|| black_box(black_box(p).double())));

    group.bench_function("mul", |b| {
        b.iter_batched(
            || random_scalar(&mut rng).unwrap(),
            |k| black_box(p * &k),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("mul_glv", |b| {
        b.iter_batched(
            || random_scalar(&mut rng).unwrap(),
            |k| black_box(p.mul_glv(&k).unwrap()),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("unmarshal", |b| {
        let bytes = G1Affine::from(p.double()).to_bytes();
        b.iter(|| black_box(G1Affine::from_slice(black_box(&bytes)).unwrap()))
    });

    group.finish();
}

/// Benchmark scalar multiplication in G2
fn bench_g2(c: &mut Criterion) {
    let mut group = c.benchmark_group("bn256_g2");
    let mut rng = ChaCha8Rng::seed_from_u64(43);
    let q = G2Projective::generator();

    group.bench_function("mul", |b| {
        b.iter_batched(
            || random_scalar(&mut rng).unwrap(),
            |k| black_box(q * &k),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("mul_glv", |b| {
        b.iter_batched(
            || random_scalar(&mut rng).unwrap(),
            |k| black_box(q.mul_glv(&k).unwrap()),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("unmarshal", |b| {
        let bytes = G2Affine::generator().to_bytes();
        b.iter(|| black_box(G2Affine::from_slice(black_box(&bytes)).unwrap()))
    });

    group.finish();
}

/// Benchmark the pairing and GT exponentiation
fn bench_pairing(c: &mut Criterion) {
    let mut group = c.benchmark_group("bn256_pairing");
    let mut rng = ChaCha8Rng::seed_from_u64(44);
    let p = G1Affine::generator();
    let q = G2Affine::generator();
    let g = Gt::generator();

    group.bench_function("pairing", |b| {
        b.iter(|| black_box(pairing(black_box(&p), black_box(&q))))
    });

    group.bench_function("gt_pow", |b| {
        b.iter_batched(
            || random_scalar(&mut rng).unwrap(),
            |k| black_box(g * &k),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("gt_pow_glv", |b| {
        b.iter_batched(
            || random_scalar(&mut rng).unwrap(),
            |k| black_box(g.mul_glv(&k).unwrap()),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

/// Benchmark hashing to G1
fn bench_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("bn256_hash_to_g1");
    let msg = b"benchmark message";

    group.bench_function("fouque_tibouchi", |b| {
        b.iter(|| black_box(hash_to_curve(black_box(msg)).unwrap()))
    });

    group.bench_function("try_and_increment", |b| {
        b.iter(|| {
            black_box(hash_to_curve_try_increment(black_box(msg), HASH_TO_G1_DEFAULT_DST).unwrap())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_g1, bench_g2, bench_pairing, bench_hash);
criterion_main!(benches);
