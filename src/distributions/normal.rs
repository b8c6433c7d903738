use std::f64::consts::SQRT_2;

use rand::{distributions::Open01, prelude::Distribution, Rng};

use super::{check_probability, ContinuousDistribution, DomainError, ParameterError, Uniform};

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Complementary error function via the Abramowitz & Stegun 7.1.26
/// polynomial, Horner-evaluated. Maximum absolute error 1.5e-7.
fn erfc(x: f64) -> f64 {
    let abs_x = x.abs();

    let t = 1.0 / (1.0 + 0.3275911 * abs_x);
    let poly = t
        * (0.254829592
            + t * (-0.284496736 + t * (1.421413741 + t * (-1.453152027 + t * 1.061405429))));
    let erfc_abs = poly * (-abs_x * abs_x).exp();

    // erfc(-x) = 2 - erfc(x)
    if x < 0.0 {
        2.0 - erfc_abs
    } else {
        erfc_abs
    }
}

/// Inverse standard normal cdf by the Beasley-Springer-Moro rational
/// approximation (Acklam's coefficients), split into a central region and
/// two symmetric tails at p = 0.02425.
///
/// Total on the closed interval: `p = 0` maps to negative infinity and
/// `p = 1` to positive infinity. Callers must have validated `p` already.
pub(crate) fn standard_quantile(p: f64) -> f64 {
    const A: [f64; 6] = [
        -3.969683028665376e+01,
        2.209460984245205e+02,
        -2.759285104469687e+02,
        1.383577518672690e+02,
        -3.066479806614716e+01,
        2.506628277459239e+00,
    ];
    const B: [f64; 5] = [
        -5.447609879822406e+01,
        1.615858368580409e+02,
        -1.556989798598866e+02,
        6.680131188771972e+01,
        -1.328068155288572e+01,
    ];
    const C: [f64; 6] = [
        -7.784894002430293e-03,
        -3.223964580411365e-01,
        -2.400758277161838e+00,
        -2.549732539343734e+00,
        4.374664141464968e+00,
        2.938163982698783e+00,
    ];
    const D: [f64; 4] = [
        7.784695709041462e-03,
        3.224671290700398e-01,
        2.445134137142996e+00,
        3.754408661907416e+00,
    ];
    const P_LOW: f64 = 0.02425;

    if p <= 0.0 {
        return f64::NEG_INFINITY;
    }
    if p >= 1.0 {
        return f64::INFINITY;
    }

    if p < P_LOW {
        let q = (-2.0 * p.ln()).sqrt();
        (((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    } else if p <= 1.0 - P_LOW {
        let q = p - 0.5;
        let r = q * q;
        (((((A[0] * r + A[1]) * r + A[2]) * r + A[3]) * r + A[4]) * r + A[5]) * q
            / (((((B[0] * r + B[1]) * r + B[2]) * r + B[3]) * r + B[4]) * r + 1.0)
    } else {
        let q = (-2.0 * (1.0 - p).ln()).sqrt();
        -(((((C[0] * q + C[1]) * q + C[2]) * q + C[3]) * q + C[4]) * q + C[5])
            / ((((D[0] * q + D[1]) * q + D[2]) * q + D[3]) * q + 1.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
/// Normal (Gaussian) law parameterized by location and scale, i.e. mean and
/// standard deviation. The default is the standard normal `(0, 1)`.
///
/// No closed elementary form exists for the cdf or its inverse; both are
/// rational/polynomial approximations accurate to better than 1e-6, which is
/// plenty for inverse-transform sampling and goodness-of-fit binning.
pub struct Normal {
    loc: f64,
    scale: f64,
}

impl Normal {
    /// Create a normal distribution with mean `loc` and standard deviation
    /// `scale`.
    ///
    /// # Errors
    /// Returns [`ParameterError`] unless both parameters are finite and
    /// `scale > 0`.
    pub fn new(loc: f64, scale: f64) -> Result<Self, ParameterError> {
        if !loc.is_finite() || !scale.is_finite() || scale <= 0.0 {
            return Err(ParameterError(format!(
                "Normal requires finite loc and scale > 0, got loc={loc}, scale={scale}"
            )));
        }
        Ok(Self { loc, scale })
    }

    pub fn loc(&self) -> f64 {
        self.loc
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub(crate) fn quantile_unchecked(&self, p: f64) -> f64 {
        self.loc + self.scale * standard_quantile(p)
    }
}

impl Default for Normal {
    /// The standard normal `(loc = 0, scale = 1)`
    fn default() -> Self {
        Self {
            loc: 0.0,
            scale: 1.0,
        }
    }
}

impl ContinuousDistribution for Normal {
    fn pdf(&self, x: f64) -> f64 {
        let z = (x - self.loc) / self.scale;
        FRAC_1_SQRT_2PI / self.scale * (-0.5 * z * z).exp()
    }

    fn cdf(&self, x: f64) -> f64 {
        let z = (x - self.loc) / self.scale;
        // Phi(z) = erfc(-z / sqrt(2)) / 2
        0.5 * erfc(-z / SQRT_2)
    }

    fn quantile(&self, p: f64) -> Result<f64, DomainError> {
        check_probability(p).map(|p| self.quantile_unchecked(p))
    }

    fn mean(&self) -> f64 {
        self.loc
    }

    fn variance(&self) -> f64 {
        self.scale * self.scale
    }
}

impl Distribution<f64> for Normal {
    /// Inverse-transform sample. Unbounded but finite, concentrated around
    /// `loc` with spread `scale`.
    ///
    /// The uniform scalar is drawn from the open interval `(0, 1)`: the
    /// quantile saturates to infinity at the endpoints, and infinities are
    /// not in the support.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        self.quantile_unchecked(rng.sample(Open01))
    }
}

// A normal law never equals a uniform one, whatever the parameters
impl PartialEq<Uniform> for Normal {
    fn eq(&self, _: &Uniform) -> bool {
        false
    }
}
