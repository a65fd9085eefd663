//! Injectable randomness.
//!
//! The confidence level and the projected trajectory carry bounded noise.
//! Every engine operation that needs it takes a [`RandomSource`] so callers
//! decide between real entropy, a seeded generator, or a fixed sequence.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of uniform samples in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;

    /// Uniform sample in `[low, high)`.
    fn uniform(&mut self, low: f64, high: f64) -> f64 {
        low + self.next_unit() * (high - low)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Adapter from any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl RngSource<StdRng> {
    /// Deterministic generator for reproducible runs.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    /// Generator seeded from operating-system entropy.
    pub fn from_entropy() -> Self {
        Self(StdRng::from_os_rng())
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.0.random::<f64>()
    }
}

/// Replays a fixed list of samples, cycling when exhausted.
///
/// Values are clamped into `[0, 1)`; an empty list always yields `0.0`.
#[derive(Debug, Clone)]
pub struct FixedSequence {
    values: Vec<f64>,
    cursor: usize,
}

impl FixedSequence {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            cursor: 0,
        }
    }

    /// Always returns the same sample.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }
}

impl RandomSource for FixedSequence {
    fn next_unit(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.cursor % self.values.len()];
        self.cursor += 1;
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }
}
