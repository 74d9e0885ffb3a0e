use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

use mathforge_core::engine::{Batch, BatchConfig};

fn bench_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_batch");

    group.bench_function("integers_n50_r500", |b| {
        b.iter(|| {
            let mut rng = ChaCha20Rng::seed_from_u64(1);
            let config = BatchConfig {
                count: 50,
                range: 500,
                allow_fraction: false,
            };
            let set = Batch::new(config).unwrap().run(&mut rng).unwrap();
            black_box(set)
        })
    });

    group.bench_function("fractions_n50_r200", |b| {
        b.iter(|| {
            let mut rng = ChaCha20Rng::seed_from_u64(2);
            let config = BatchConfig {
                count: 50,
                range: 200,
                allow_fraction: true,
            };
            let set = Batch::new(config).unwrap().run(&mut rng).unwrap();
            black_box(set)
        })
    });

    group.bench_function("single_problem_r40", |b| {
        b.iter(|| {
            let mut rng = ChaCha20Rng::seed_from_u64(3);
            let config = BatchConfig {
                count: 1,
                range: 40,
                allow_fraction: true,
            };
            let set = Batch::new(config).unwrap().run(&mut rng).unwrap();
            black_box(set)
        })
    });

    group.finish();
}

criterion_group!(benches, bench_generation);
criterion_main!(benches);
