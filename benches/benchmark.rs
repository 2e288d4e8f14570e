use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use rshamir::constants::params::PARAM_SEED_SIZE;
use rshamir::subroutines::prg::PRG;
use rshamir::{combine, split, split_with, ShareConfig};

mod gf256;

const SECRET_SIZES: [usize; 2] = [32, 1024];

/// Benchmarking split and combine at 3-of-5 for a key sized and a kilobyte sized secret
fn shamir_benchmark(c: &mut Criterion) {
    let mut prg = PRG::init(&[0u8; PARAM_SEED_SIZE]);
    let config = ShareConfig::default();
    let mut group = c.benchmark_group("shamir");

    for size in SECRET_SIZES {
        let secret = prg.sample_field_fq_elements_vec(size);

        group.bench_function(format!("split_{}", size), |b| {
            b.iter(|| split(&secret, config))
        });

        let seed = prg.sample_seed();
        group.bench_function(format!("split_seeded_{}", size), |b| {
            b.iter_batched(
                || PRG::init(&seed),
                |mut source| split_with(&mut source, &secret, config),
                BatchSize::SmallInput,
            )
        });

        let shared = split_with(&mut prg, &secret, config).unwrap();
        let subset = &shared.shares[..config.threshold];
        group.bench_function(format!("combine_{}", size), |b| {
            b.iter(|| combine(subset))
        });
    }
    group.finish();
}

criterion_group!(benches, shamir_benchmark, gf256::gf256_benchmark);

criterion_main!(benches);
