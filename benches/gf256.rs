use criterion::{measurement::Measurement, BatchSize, Criterion};
use rand::Rng as _;
use rshamir::arith::gf256::gf256_arith;

/// Benchmarking single field operations: table lookup against shift and add, division and inversion
pub(crate) fn gf256_benchmark<M: Measurement>(c: &mut Criterion<M>) {
    let mut group = c.benchmark_group("gf256");
    let mut rng = rand::thread_rng();

    group.bench_function("mul_lookup", |b| {
        b.iter_batched(
            || (rng.gen::<u8>(), rng.gen::<u8>()),
            |(a, b)| gf256_arith::gf256_mul(a, b),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("mul_shift_and_add", |b| {
        b.iter_batched(
            || (rng.gen::<u8>(), rng.gen::<u8>()),
            |(a, b)| gf256_arith::gf256_mul_shift_and_add(a, b),
            BatchSize::SmallInput,
        )
    });

    // Divisors are drawn from 1..=255, zero has no inverse
    group.bench_function("div", |b| {
        b.iter_batched(
            || (rng.gen::<u8>(), rng.gen_range(1..=255u8)),
            |(a, b)| gf256_arith::gf256_div(a, b),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("inverse", |b| {
        b.iter_batched(
            || rng.gen_range(1..=255u8),
            gf256_arith::gf256_mul_inverse,
            BatchSize::SmallInput,
        )
    });
    group.finish();
}
