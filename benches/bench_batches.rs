use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use mllib::batches::batches_with_rng;
use mllib::datasets::DatasetBase;
use mllib::helpers::test_helpers::{generate_random_data, least_squares_gradient};
use mllib::optimizers::{GradientDescent, Optimizer, OptimizerParams};
use ndarray::Array1;
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_epoch(c: &mut Criterion) {
    let mut group = c.benchmark_group("epoch");

    for n_samples in [100, 10_000] {
        for batch_size in [1, 32, 256] {
            let (x, y, _) = generate_random_data(n_samples, 10);
            let mut rng = StdRng::seed_from_u64(0);
            let config_string = format!("{}, {}", n_samples, batch_size);

            group.bench_with_input(
                BenchmarkId::new("batches", config_string),
                &(n_samples, batch_size),
                |b, _| {
                    b.iter(|| {
                        batches_with_rng(&x, &y, batch_size, &mut rng)
                            .unwrap()
                            .map(|batch| batch.len())
                            .sum::<usize>()
                    })
                },
            );
        }
    }

    group.finish();
}

fn bench_gradient_descent(c: &mut Criterion) {
    let mut group = c.benchmark_group("gradient_descent");
    group.sample_size(10);

    for n_features in [10, 100] {
        let (x, y, _) = generate_random_data(1000, n_features);
        let dataset = DatasetBase::from((x, y));
        let params = OptimizerParams::new(0.01, 32).max_iter(20).seed(0);

        group.bench_with_input(
            BenchmarkId::new("mllib", n_features),
            &n_features,
            |b, &n_features| {
                b.iter(|| {
                    let mut optimizer = GradientDescent::new(
                        least_squares_gradient,
                        Array1::zeros(n_features),
                        params.clone(),
                    )
                    .unwrap();
                    optimizer.optimize(&dataset).unwrap()
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_epoch, bench_gradient_descent);
criterion_main!(benches);
