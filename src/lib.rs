#![doc = include_str!("../README.md")]

mod distributions;
pub use distributions::{ContinuousDistribution, DomainError, Normal, ParameterError, Uniform};
mod rngs;
pub use rngs::{NormalRng, RandomVariateGenerator, UniformRng};
mod validation;
pub use validation::{GTest, GTestReport};
