//! Wall-clock benchmark harness.
//!
//! Inputs come from a seeded [`StdRng`] so two runs with the same
//! [`BenchConfig`] sort identical data. Each algorithm gets its own copy of
//! every input; the result records whether the copy came out sorted.

use crate::Algorithm;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

/// Shape of the generated input.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum InputShape {
    /// Uniform random values.
    #[default]
    Random,
    /// Already ascending.
    Sorted,
    /// Descending.
    Reversed,
    /// Ascending with about 5% of positions swapped at random.
    NearlySorted,
}

/// What to benchmark.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchConfig {
    /// Input lengths.
    pub sizes: Vec<usize>,
    /// RNG seed.
    pub seed: u64,
    /// Exclusive upper bound of generated values.
    pub max_value: u32,
    /// Input shape.
    pub shape: InputShape,
    /// Algorithms to run, in report order.
    pub algorithms: Vec<Algorithm>,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            sizes: vec![100, 500, 1000, 2000],
            seed: 42,
            max_value: 1000,
            shape: InputShape::Random,
            algorithms: Algorithm::iter().collect(),
        }
    }
}

/// Timing for one (algorithm, size) pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchResult {
    /// Algorithm measured.
    pub algorithm: Algorithm,
    /// Input length.
    pub size: usize,
    /// Wall-clock time of the sort alone.
    pub elapsed: Duration,
    /// Whether the output matched `slice::sort`.
    pub sorted: bool,
}

impl BenchResult {
    /// Elapsed time in milliseconds.
    pub fn millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// All results of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchReport {
    /// Seed the inputs were generated from.
    pub seed: u64,
    /// Input shape.
    pub shape: InputShape,
    /// One entry per (size, algorithm), sizes outermost.
    pub results: Vec<BenchResult>,
}

impl BenchReport {
    /// Renders the report as a plain-text table.
    pub fn table(&self) -> String {
        let mut out = format!(
            "{:<18} {:>8} {:>12} {:>7}\n",
            "algorithm", "size", "ms", "sorted"
        );
        for r in &self.results {
            out.push_str(&format!(
                "{:<18} {:>8} {:>12.3} {:>7}\n",
                r.algorithm.to_string(),
                r.size,
                r.millis(),
                if r.sorted { "yes" } else { "NO" }
            ));
        }
        out
    }
}

/// Generates `len` values in `shape` from `rng`.
pub fn generate<R: Rng + ?Sized>(rng: &mut R, len: usize, max_value: u32, shape: InputShape) -> Vec<u32> {
    let max_value = max_value.max(1);
    let mut values: Vec<u32> = (0..len).map(|_| rng.random_range(0..max_value)).collect();
    match shape {
        InputShape::Random => {}
        InputShape::Sorted => values.sort_unstable(),
        InputShape::Reversed => values.sort_unstable_by(|a, b| b.cmp(a)),
        InputShape::NearlySorted => {
            values.sort_unstable();
            if len > 1 {
                for _ in 0..len.div_ceil(20) {
                    let a = rng.random_range(0..len);
                    let b = rng.random_range(0..len);
                    values.swap(a, b);
                }
            }
        }
    }
    values
}

/// Runs every configured algorithm on every configured size.
#[instrument(skip(config), fields(seed = config.seed, shape = %config.shape))]
pub fn run(config: &BenchConfig) -> BenchReport {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut results = Vec::with_capacity(config.sizes.len() * config.algorithms.len());

    for &size in &config.sizes {
        let input = generate(&mut rng, size, config.max_value, config.shape);
        let mut expected = input.clone();
        expected.sort_unstable();

        for &algorithm in &config.algorithms {
            let mut data = input.clone();
            let start = Instant::now();
            algorithm.sort(&mut data);
            let elapsed = start.elapsed();

            debug!(%algorithm, size, ?elapsed, "Benchmarked");
            results.push(BenchResult {
                algorithm,
                size,
                elapsed,
                sorted: data == expected,
            });
        }
    }

    info!(runs = results.len(), "Benchmark complete");
    BenchReport {
        seed: config.seed,
        shape: config.shape,
        results,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_input() {
        let a = generate(&mut StdRng::seed_from_u64(9), 50, 100, InputShape::Random);
        let b = generate(&mut StdRng::seed_from_u64(9), 50, 100, InputShape::Random);
        assert_eq!(a, b);
        assert!(a.iter().all(|x| *x < 100));
    }

    #[test]
    fn test_shapes() {
        let mut rng = StdRng::seed_from_u64(1);
        let sorted = generate(&mut rng, 30, 1000, InputShape::Sorted);
        assert!(sorted.is_sorted());
        let reversed = generate(&mut rng, 30, 1000, InputShape::Reversed);
        assert!(reversed.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn test_run_covers_every_pair() {
        let config = BenchConfig {
            sizes: vec![0, 1, 25],
            ..BenchConfig::default()
        };
        let report = run(&config);
        assert_eq!(report.results.len(), 3 * config.algorithms.len());
        assert!(report.results.iter().all(|r| r.sorted));
        assert!(report.table().starts_with("algorithm"));
    }
}
