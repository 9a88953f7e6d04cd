//! Injectable randomness for the simulated assistant.
//!
//! The session never touches a global generator. Reply choice, typing delay
//! and suggestion attachment all go through a [`ChanceSource`], so tests can
//! pin every decision.

use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the random decisions a session makes.
pub trait ChanceSource: Send {
    /// Uniform index in `0..len`. `len` is never zero.
    fn pick_index(&mut self, len: usize) -> usize;

    /// Uniform duration in `min..max`; returns `min` when the window is empty.
    fn delay_between(&mut self, min: Duration, max: Duration) -> Duration;

    /// `true` with the given probability.
    fn chance(&mut self, probability: f64) -> bool;
}

/// [`ChanceSource`] backed by any `rand` generator.
#[derive(Debug)]
pub struct RngChance<R> {
    rng: R,
}

impl<R: Rng + Send> RngChance<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngChance<StdRng> {
    /// Generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible generator.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng + Send> ChanceSource for RngChance<R> {
    fn pick_index(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len.max(1))
    }

    fn delay_between(&mut self, min: Duration, max: Duration) -> Duration {
        if max <= min {
            return min;
        }
        let min_ms = min.as_millis() as u64;
        let max_ms = max.as_millis() as u64;
        Duration::from_millis(self.rng.gen_range(min_ms..max_ms))
    }

    fn chance(&mut self, probability: f64) -> bool {
        if !probability.is_finite() {
            return false;
        }
        self.rng.gen_bool(probability.clamp(0.0, 1.0))
    }
}

/// [`ChanceSource`] that always makes the same decisions.
///
/// Useful for demos and tests that need a known reply and delay.
#[derive(Debug, Clone)]
pub struct FixedChance {
    pub index: usize,
    pub delay: Duration,
    pub attach_suggestions: bool,
}

impl FixedChance {
    pub fn new(index: usize, delay: Duration, attach_suggestions: bool) -> Self {
        Self {
            index,
            delay,
            attach_suggestions,
        }
    }
}

impl ChanceSource for FixedChance {
    fn pick_index(&mut self, len: usize) -> usize {
        self.index % len.max(1)
    }

    fn delay_between(&mut self, _min: Duration, _max: Duration) -> Duration {
        self.delay
    }

    fn chance(&mut self, _probability: f64) -> bool {
        self.attach_suggestions
    }
}
