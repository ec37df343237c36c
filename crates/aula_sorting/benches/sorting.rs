//! Criterion benches for the sorting variants.
//!
//! Quadratic variants stop at 1000 elements; the quicksorts also run at
//! 10_000.

use aula_sorting::Algorithm;
use aula_sorting::bench::{InputShape, generate};
use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;
use strum::IntoEnumIterator;

fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("random_u32");
    for &size in &[100usize, 1000, 10_000] {
        let input = generate(&mut StdRng::seed_from_u64(42), size, 1_000_000, InputShape::Random);
        for algorithm in Algorithm::iter() {
            if algorithm.is_quadratic() && size > 1000 {
                continue;
            }
            group.bench_with_input(
                BenchmarkId::new(algorithm.to_string(), size),
                &input,
                |b, input| {
                    b.iter_batched(
                        || input.clone(),
                        |mut data| {
                            algorithm.sort(&mut data);
                            std::hint::black_box(data)
                        },
                        BatchSize::SmallInput,
                    );
                },
            );
        }
    }
    group.finish();
}

fn bench_nearly_sorted(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearly_sorted_u32");
    let input = generate(&mut StdRng::seed_from_u64(7), 1000, 1_000_000, InputShape::NearlySorted);
    for algorithm in [
        Algorithm::BubbleOptimized,
        Algorithm::Insertion,
        Algorithm::BinaryInsertion,
        Algorithm::QuickMedian,
    ] {
        group.bench_function(algorithm.to_string(), |b| {
            b.iter_batched(
                || input.clone(),
                |mut data| {
                    algorithm.sort(&mut data);
                    std::hint::black_box(data)
                },
                BatchSize::SmallInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_random, bench_nearly_sorted);
criterion_main!(benches);
