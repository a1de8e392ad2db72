//! Empirical comparison of the two quicksort variants.
//!
//! For every input size and [`Distribution`] one input is generated, then both variants sort
//! copies of it while being timed. Pivots of the randomized variant are drawn from an rng seeded
//! with [`patterns::random_init_seed`], so a run is repeatable given its seed.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::error::{AnalysisError, SortError};
use crate::patterns;
use crate::quicksort::{deterministic, randomized, SortLimits, SortStats};

mod distribution;
pub mod measure;
mod report;

pub use distribution::Distribution;
pub use report::{Outcome, Report, Row};

pub const DEFAULT_LENS: [usize; 3] = [1_000, 5_000, 10_000];

/// Monotonic input drives the deterministic variant to a depth of `len - 2`, so the default
/// sizes stay within this limit.
pub const DEFAULT_MAX_DEPTH: usize = 20_000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalysisConfig {
    pub lens: Vec<usize>,
    pub distributions: Vec<Distribution>,
    /// Timed sorts per variant and input, the report shows the median.
    pub samples: usize,
    pub limits: SortLimits,
    /// Adds mean comparison and deepest level columns to the report.
    pub show_comparisons: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            lens: DEFAULT_LENS.to_vec(),
            distributions: Distribution::ALL.to_vec(),
            samples: 1,
            limits: SortLimits::UNBOUNDED.with_max_depth(DEFAULT_MAX_DEPTH),
            show_comparisons: false,
        }
    }
}

impl AnalysisConfig {
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.samples == 0 {
            return Err(AnalysisError::NoSamples);
        }
        if self.lens.is_empty() {
            return Err(AnalysisError::NoSizes);
        }
        if self.distributions.is_empty() {
            return Err(AnalysisError::NoDistributions);
        }

        Ok(())
    }
}

/// Runs the analysis described by `config`.
///
/// A variant running into `config.limits` is reported in its cell, it does not abort the run.
pub fn run(config: &AnalysisConfig) -> Result<Report, AnalysisError> {
    config.validate()?;

    let seed = patterns::random_init_seed();
    tracing::debug!(?config, seed, "starting empirical analysis");

    let mut pivot_rng = StdRng::seed_from_u64(seed);
    let mut rows = Vec::with_capacity(config.lens.len() * config.distributions.len());

    for &len in &config.lens {
        for &distribution in &config.distributions {
            let input = distribution.generate(len);
            let trial = Trial {
                input: &input,
                distribution,
                samples: config.samples,
            };

            let deterministic =
                trial.measure("deterministic", |v| deterministic::try_sort(v, &config.limits))?;
            let randomized = trial.measure("randomized", |v| {
                randomized::try_sort_with_rng(v, &mut pivot_rng, &config.limits)
            })?;

            tracing::info!(
                len,
                %distribution,
                ?deterministic,
                ?randomized,
                "measured"
            );

            rows.push(Row {
                len,
                distribution,
                deterministic,
                randomized,
            });
        }
    }

    Ok(Report {
        rows,
        show_comparisons: config.show_comparisons,
    })
}

struct Trial<'a> {
    input: &'a [i32],
    distribution: Distribution,
    samples: usize,
}

impl Trial<'_> {
    fn measure<F>(&self, variant: &'static str, mut sort_fn: F) -> Result<Outcome, AnalysisError>
    where
        F: FnMut(&mut [i32]) -> Result<SortStats, SortError>,
    {
        let mut durations = Vec::with_capacity(self.samples);
        let mut total_comparisons = 0;
        let mut max_depth = 0usize;

        for _ in 0..self.samples {
            let timed = measure::time_sort(&mut sort_fn, self.input);

            let stats = match timed.result {
                Ok(stats) => stats,
                Err(err) => {
                    tracing::warn!(
                        variant,
                        len = self.input.len(),
                        distribution = %self.distribution,
                        %err,
                        "sort limit exceeded"
                    );
                    return Ok(Outcome::LimitExceeded(err));
                }
            };

            if !timed.output.windows(2).all(|w| w[0] <= w[1]) {
                return Err(AnalysisError::Unsorted {
                    variant,
                    distribution: self.distribution.to_string(),
                    len: self.input.len(),
                });
            }

            durations.push(timed.duration);
            total_comparisons += stats.comparisons;
            max_depth = max_depth.max(stats.max_depth);
        }

        let Some(duration) = measure::median(&mut durations) else {
            return Err(AnalysisError::NoSamples);
        };

        Ok(Outcome::Sorted {
            duration,
            comparisons: total_comparisons / self.samples as u64,
            max_depth,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> AnalysisConfig {
        AnalysisConfig {
            lens: vec![0, 1, 64, 300],
            samples: 3,
            ..AnalysisConfig::default()
        }
    }

    #[test]
    fn default_config() {
        let config = AnalysisConfig::default();

        assert_eq!(config.lens, [1000, 5000, 10000]);
        assert_eq!(config.distributions, Distribution::ALL);
        assert_eq!(config.limits.max_depth, Some(20_000));
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn rejects_empty_config() {
        let no_samples = AnalysisConfig {
            samples: 0,
            ..small_config()
        };
        assert_eq!(run(&no_samples), Err(AnalysisError::NoSamples));

        let no_lens = AnalysisConfig {
            lens: Vec::new(),
            ..small_config()
        };
        assert_eq!(run(&no_lens), Err(AnalysisError::NoSizes));

        let no_distributions = AnalysisConfig {
            distributions: Vec::new(),
            ..small_config()
        };
        assert_eq!(run(&no_distributions), Err(AnalysisError::NoDistributions));
    }

    #[test]
    fn one_row_per_len_and_distribution() {
        let report = run(&small_config()).unwrap();

        assert_eq!(report.rows.len(), 4 * 3);
        for (row, (len, distribution)) in report.rows.iter().zip(
            [0usize, 1, 64, 300]
                .into_iter()
                .flat_map(|len| Distribution::ALL.map(|dist| (len, dist))),
        ) {
            assert_eq!(row.len, len);
            assert_eq!(row.distribution, distribution);
            assert!(matches!(row.deterministic, Outcome::Sorted { .. }));
            assert!(matches!(row.randomized, Outcome::Sorted { .. }));
        }
    }

    #[test]
    fn sorted_input_is_quadratic_for_deterministic() {
        let config = AnalysisConfig {
            lens: vec![300],
            distributions: vec![Distribution::Sorted, Distribution::Reverse],
            ..small_config()
        };
        let report = run(&config).unwrap();

        for row in &report.rows {
            let Outcome::Sorted {
                comparisons,
                max_depth,
                ..
            } = row.deterministic
            else {
                panic!("{row:?}");
            };

            assert_eq!(comparisons, 300 * 299 / 2);
            assert_eq!(max_depth, 298);
        }
    }

    #[test]
    fn depth_limit_is_reported_not_fatal() {
        let config = AnalysisConfig {
            lens: vec![200],
            distributions: vec![Distribution::Sorted],
            limits: SortLimits::UNBOUNDED.with_max_depth(50),
            ..small_config()
        };
        let report = run(&config).unwrap();

        assert_eq!(
            report.rows[0].deterministic,
            Outcome::LimitExceeded(SortError::DepthLimitExceeded {
                depth: 51,
                max_depth: 50
            })
        );
        // Expected depth for 200 elements is around 2 * ln(200), far below 50.
        assert!(matches!(report.rows[0].randomized, Outcome::Sorted { .. }));
    }
}
