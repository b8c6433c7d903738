use rand::{prelude::Distribution, Rng};

use super::{check_probability, ContinuousDistribution, DomainError, Normal, ParameterError};

#[derive(Clone, Copy, Debug, PartialEq)]
/// Continuous uniform distribution on `[lower, upper]`.
///
/// The default distribution is the identity on `[0, 1]`: there `cdf` and
/// `quantile` both reduce to `x`, which makes it the natural source
/// distribution for inverse-transform sampling.
pub struct Uniform {
    lower: f64,
    upper: f64,
}

impl Uniform {
    /// Create a uniform distribution on `[lower, upper]`.
    ///
    /// # Errors
    /// Returns [`ParameterError`] unless both bounds are finite and
    /// `lower < upper`. A degenerate interval is rejected because its
    /// density is unbounded.
    pub fn new(lower: f64, upper: f64) -> Result<Self, ParameterError> {
        if !lower.is_finite() || !upper.is_finite() || lower >= upper {
            return Err(ParameterError(format!(
                "Uniform requires finite lower < upper, got lower={lower}, upper={upper}"
            )));
        }
        Ok(Self { lower, upper })
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    // Quantile without the domain check, for sampling paths where `p` is
    // already known to lie in [0, 1)
    pub(crate) fn quantile_unchecked(&self, p: f64) -> f64 {
        self.lower + p * (self.upper - self.lower)
    }
}

impl Default for Uniform {
    /// The identity distribution on `[0, 1]`
    fn default() -> Self {
        Self {
            lower: 0.0,
            upper: 1.0,
        }
    }
}

impl ContinuousDistribution for Uniform {
    fn pdf(&self, x: f64) -> f64 {
        if x >= self.lower && x <= self.upper {
            1.0 / (self.upper - self.lower)
        } else {
            0.0
        }
    }

    fn cdf(&self, x: f64) -> f64 {
        if x < self.lower {
            0.0
        } else if x > self.upper {
            1.0
        } else {
            (x - self.lower) / (self.upper - self.lower)
        }
    }

    fn quantile(&self, p: f64) -> Result<f64, DomainError> {
        check_probability(p).map(|p| self.quantile_unchecked(p))
    }

    fn mean(&self) -> f64 {
        (self.lower + self.upper) / 2.0
    }

    fn variance(&self) -> f64 {
        let width = self.upper - self.lower;
        width * width / 12.0
    }
}

impl Distribution<f64> for Uniform {
    /// Inverse-transform sample: maps a uniform scalar in `[0, 1)` through
    /// the quantile, so every sample lies in `[lower, upper)`
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.quantile_unchecked(rng.gen())
    }
}

// A uniform law never equals a normal one, whatever the parameters
impl PartialEq<Normal> for Uniform {
    fn eq(&self, _: &Normal) -> bool {
        false
    }
}
