//! Closed-form probability distributions evaluated through a fixed capability
//! surface: density, cumulative probability, quantile, and summary moments

use thiserror::Error;

mod normal;
pub(crate) use normal::standard_quantile;
pub use normal::Normal;
mod uniform;
pub use uniform::Uniform;

#[derive(Clone, Copy, Debug, Error, PartialEq)]
#[error("probability {p} lies outside the closed interval [0, 1]")]
/// The probability argument handed to [`ContinuousDistribution::quantile`]
/// (or `p_value`) was outside `[0, 1]`. The only failure the distribution
/// surface can produce; every other operation is total over the reals.
pub struct DomainError {
    /// The offending probability argument
    pub p: f64,
}

#[derive(Clone, Debug, Error, PartialEq)]
#[error("invalid distribution parameters: {0}")]
/// Constructor parameters violate a distribution's invariants
pub struct ParameterError(pub String);

/// The operation set shared by every distribution variant.
///
/// Generators and validators only ever talk to a distribution through these
/// operations, so new variants extend the set without touching either. All
/// operations are pure and stateless; a distribution is safe to share across
/// threads without synchronization.
pub trait ContinuousDistribution {
    /// Relative likelihood of `x`. Never negative, zero outside the support.
    fn pdf(&self, x: f64) -> f64;

    /// Probability of a value at most `x`, in `[0, 1]`. Saturates to 0 below
    /// the support and 1 above it rather than failing.
    fn cdf(&self, x: f64) -> f64;

    /// Inverse cdf: maps a probability in `[0, 1]` to a value in the
    /// support. Fails with [`DomainError`] iff `p < 0` or `p > 1`.
    fn quantile(&self, p: f64) -> Result<f64, DomainError>;

    /// Alias for [`quantile`](Self::quantile); the two are interchangeable
    fn p_value(&self, p: f64) -> Result<f64, DomainError> {
        self.quantile(p)
    }

    fn mean(&self) -> f64;

    fn variance(&self) -> f64;
}

/// Shared domain check for `quantile`/`p_value`. NaN is out of domain.
pub(crate) fn check_probability(p: f64) -> Result<f64, DomainError> {
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(DomainError { p })
    }
}
