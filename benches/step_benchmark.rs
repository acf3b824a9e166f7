use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use stepsort::prelude::*;

fn random_values(count: usize) -> Vec<u32> {
    use rand::Rng;
    let mut rng = rand::rng();
    (0..count).map(|_| rng.random_range(5..=400)).collect()
}

fn bench_step_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Step Generation");
    group.sample_size(10);

    let count = 1_000;
    let values = random_values(count);

    for algorithm in Algorithm::ALL {
        group.bench_function(algorithm.name(), |b| {
            b.iter_batched(
                || Sequence::from_values(values.clone()),
                |mut seq| {
                    let mut steps = 0u64;
                    sort_steps(
                        black_box(algorithm),
                        &mut seq,
                        &mut |_: &Sequence, _: Step| {
                            steps += 1;
                            Ok::<(), SortError>(())
                        },
                    )
                    .unwrap();
                    black_box(steps)
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

fn bench_headless_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("Headless Session");
    group.sample_size(10);

    let count = 500;
    let values = random_values(count);

    // NoopPacer strips the sleeps, leaving highlight construction and
    // rendering dispatch as the measured overhead.
    group.bench_function("quick (NoopPacer)", |b| {
        b.iter_batched(
            || Sequence::from_values(values.clone()),
            |mut seq| {
                let mut frames = 0u64;
                let renderer = |_: &Sequence, _: &Highlights| frames += 1;
                let mut session = SortSession::new(renderer, FixedDelay(Duration::from_millis(1)))
                    .with_pacer(NoopPacer);
                session.run(Algorithm::Quick, &mut seq).unwrap();
                black_box(frames)
            },
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_step_generation, bench_headless_session);
criterion_main!(benches);
