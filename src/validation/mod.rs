//! Statistical acceptance testing: the G-test (log-likelihood-ratio
//! goodness of fit) for certifying that a generator's output matches its
//! theoretical distribution.
//!
//! The verdict is statistical, not deterministic: a correct generator fails
//! about 5% of the time at the default 95% significance level. Callers
//! should fix a known-passing seed or average over independent trials.

use rand::prelude::Distribution;

use crate::distributions::{standard_quantile, ContinuousDistribution, ParameterError};
use crate::rngs::RandomVariateGenerator;

/// Significance level used when none is configured
pub const DEFAULT_SIGNIFICANCE: f64 = 0.95;

/// Upper-tail chi-square critical value by the Wilson-Hilferty cube
/// approximation, driven by the standard normal quantile. Within 0.02 of the
/// exact value at the 9 degrees of freedom typical here.
fn chi_square_critical(degrees_of_freedom: usize, significance: f64) -> f64 {
    let k = degrees_of_freedom as f64;
    let z = standard_quantile(significance);
    let cube = 1.0 - 2.0 / (9.0 * k) + z * (2.0 / (9.0 * k)).sqrt();
    k * cube * cube * cube
}

#[derive(Clone, Copy, Debug)]
/// Configured G-test: sample count, bin count, and significance level
pub struct GTest {
    samples: usize,
    bins: usize,
    significance: f64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Outcome of one G-test evaluation
pub struct GTestReport {
    /// The G statistic, `2 * sum(O_i * ln(O_i / E_i))` over occupied bins
    pub statistic: f64,
    /// Chi-square critical value the statistic was compared against
    pub critical_value: f64,
    /// `bins - 1`
    pub degrees_of_freedom: usize,
    /// PASS iff `statistic < critical_value`
    pub passed: bool,
}

impl GTest {
    /// Configure a G-test drawing `samples` values into `bins` bins of equal
    /// probability mass, judged at the default 95% significance level.
    ///
    /// # Errors
    /// Returns [`ParameterError`] if `samples` is zero or `bins` is less
    /// than two.
    pub fn new(samples: usize, bins: usize) -> Result<Self, ParameterError> {
        if samples == 0 || bins < 2 {
            return Err(ParameterError(format!(
                "G-test requires samples > 0 and bins >= 2, got samples={samples}, bins={bins}"
            )));
        }
        Ok(Self {
            samples,
            bins,
            significance: DEFAULT_SIGNIFICANCE,
        })
    }

    pub fn with_significance(mut self, significance: f64) -> Self {
        self.significance = significance;
        self
    }

    /// Draw samples from the generator, bin them by cumulative probability,
    /// and compare observed against expected counts.
    ///
    /// Bins partition the support into `bins` regions of equal probability
    /// mass: sample `x` falls in bin `floor(cdf(x) * bins)`, so the expected
    /// count is `samples / bins` everywhere. Equal-mass binning works for
    /// bounded and unbounded supports alike.
    pub fn evaluate<D>(&self, gen: &mut RandomVariateGenerator<D>) -> GTestReport
    where
        D: ContinuousDistribution + Distribution<f64>,
    {
        let mut observed = vec![0usize; self.bins];
        for _ in 0..self.samples {
            let x = gen.rand();
            let p = gen.distribution().cdf(x);
            // cdf == 1.0 lands exactly on the right edge; clamp into the
            // last bin
            let bin = ((p * self.bins as f64) as usize).min(self.bins - 1);
            observed[bin] += 1;
        }
        self.evaluate_observed(&observed)
    }

    /// Judge pre-binned observed counts against the uniform expected counts
    /// implied by equal-probability-mass binning
    pub fn evaluate_observed(&self, observed: &[usize]) -> GTestReport {
        let expected = self.samples as f64 / self.bins as f64;
        let statistic = 2.0
            * observed
                .iter()
                .filter(|&&o| o > 0)
                .map(|&o| o as f64 * (o as f64 / expected).ln())
                .sum::<f64>();
        let degrees_of_freedom = self.bins - 1;
        let critical_value = chi_square_critical(degrees_of_freedom, self.significance);
        GTestReport {
            statistic,
            critical_value,
            degrees_of_freedom,
            passed: statistic < critical_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distributions::{Normal, Uniform};
    use crate::rngs::{NormalRng, UniformRng};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_chi_square_critical_matches_table() {
        // Exact values: 16.919 at 9 dof, 3.841 at 1 dof, 30.144 at 19 dof
        assert_abs_diff_eq!(chi_square_critical(9, 0.95), 16.919, epsilon = 0.05);
        // Wilson-Hilferty is weakest at 1 dof
        assert_abs_diff_eq!(chi_square_critical(1, 0.95), 3.841, epsilon = 0.15);
        assert_abs_diff_eq!(chi_square_critical(19, 0.95), 30.144, epsilon = 0.05);
    }

    #[test]
    fn test_perfectly_uniform_counts_pass_with_zero_statistic() {
        let gtest = GTest::new(10_000, 10).unwrap();
        let report = gtest.evaluate_observed(&[1000; 10]);
        assert_eq!(report.statistic, 0.0);
        assert_eq!(report.degrees_of_freedom, 9);
        assert!(report.passed);
    }

    #[test]
    fn test_skewed_counts_fail() {
        let gtest = GTest::new(10_000, 10).unwrap();
        let mut observed = [950usize; 10];
        observed[0] = 1450;
        // One bin holds 45% excess mass; G is around 200 against a critical
        // value near 16.9
        let report = gtest.evaluate_observed(&observed);
        assert!(report.statistic > report.critical_value);
        assert!(!report.passed);
    }

    #[test]
    fn test_empty_bins_are_skipped_not_nan() {
        let gtest = GTest::new(10_000, 10).unwrap();
        let mut observed = [0usize; 10];
        observed[0] = 10_000;
        let report = gtest.evaluate_observed(&observed);
        assert!(report.statistic.is_finite());
        assert!(!report.passed);
    }

    // Each seed passes with probability 0.95 independently; ten consecutive
    // misses would happen about once in 5e12 runs
    fn assert_eventually_passes<F: FnMut(u64) -> GTestReport>(mut run: F) {
        for seed in 0..10 {
            if run(seed).passed {
                return;
            }
        }
        panic!("G-test failed for 10 consecutive seeds");
    }

    #[test]
    fn test_default_uniform_generator_passes() {
        let gtest = GTest::new(10_000, 10).unwrap();
        assert_eventually_passes(|seed| gtest.evaluate(&mut UniformRng::with_seed(seed)));
    }

    #[test]
    fn test_bounded_uniform_generator_passes() {
        let gtest = GTest::new(10_000, 10).unwrap();
        assert_eventually_passes(|seed| {
            let dist = Uniform::new(12.0, 16.0).unwrap();
            gtest.evaluate(&mut UniformRng::new(dist, seed))
        });
    }

    #[test]
    fn test_normal_generator_passes() {
        let gtest = GTest::new(10_000, 10).unwrap();
        assert_eventually_passes(|seed| {
            let dist = Normal::new(5.0, 2.0).unwrap();
            gtest.evaluate(&mut NormalRng::new(dist, seed))
        });
    }

    #[test]
    fn test_new_rejects_invalid_configuration() {
        assert!(GTest::new(0, 10).is_err());
        assert!(GTest::new(10_000, 1).is_err());
        assert!(GTest::new(10_000, 0).is_err());
    }

    #[test]
    fn test_mismatched_distribution_fails() {
        // Uniform [0, 1] samples pushed through the standard normal cdf land
        // only in the central bins (Phi(0) = 0.5 through Phi(1) = 0.84), so
        // the verdict must be FAIL for every seed
        let gtest = GTest::new(10_000, 10).unwrap();
        let ndist = Normal::default();
        for seed in 0..10 {
            let mut gen = UniformRng::with_seed(seed);
            let mut observed = [0usize; 10];
            for _ in 0..10_000 {
                let p = ndist.cdf(gen.rand());
                observed[((p * 10.0) as usize).min(9)] += 1;
            }
            let report = gtest.evaluate_observed(&observed);
            assert!(
                !report.passed,
                "mismatched distribution passed with seed {}",
                seed
            );
        }
    }

    #[test]
    fn test_stricter_significance_raises_the_bar() {
        let lax = GTest::new(10_000, 10).unwrap().with_significance(0.5);
        let strict = GTest::new(10_000, 10).unwrap().with_significance(0.999);
        let lax_report = lax.evaluate_observed(&[1000; 10]);
        let strict_report = strict.evaluate_observed(&[1000; 10]);
        assert!(lax_report.critical_value < strict_report.critical_value);
    }
}
