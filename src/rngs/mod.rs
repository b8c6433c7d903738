//! Seeded random-variate generators: a distribution paired with an
//! exclusively-owned pseudo-random bit source

mod variate;
pub use variate::{NormalRng, RandomVariateGenerator, UniformRng};
