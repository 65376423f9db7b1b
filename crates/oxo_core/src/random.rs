//! Injectable randomness for the move selectors.
//!
//! Move selection never reaches for a global generator. Callers pass a
//! [`RandomSource`], which lets production code use a real `rand`
//! generator while tests script the exact samples that force a branch.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::instrument;

/// A source of uniform samples in `[0, 1)`.
pub trait RandomSource {
    /// Draws the next sample in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

impl<S: RandomSource + ?Sized> RandomSource for Box<S> {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// Picks one item uniformly: `floor(sample * len)`, clamped to the last
/// item so a misbehaving source can never index out of bounds.
pub(crate) fn choose<T: Copy, S: RandomSource + ?Sized>(items: &[T], source: &mut S) -> Option<T> {
    let last = items.len().checked_sub(1)?;
    let index = (source.next_unit() * items.len() as f64) as usize;
    Some(items[index.min(last)])
}

/// Adapts any [`rand::Rng`] into a [`RandomSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    /// Wraps an existing generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Creates a source seeded from the operating system.
    #[instrument]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Creates a reproducible source from a fixed seed.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn next_unit(&mut self) -> f64 {
        self.rng.random::<f64>()
    }
}

/// Replays a fixed list of samples, cycling back to the start when
/// exhausted. An empty script always yields `0.0`.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedSource {
    samples: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    /// Creates a source that yields `samples` in order.
    pub fn new(samples: impl Into<Vec<f64>>) -> Self {
        Self {
            samples: samples.into(),
            cursor: 0,
        }
    }

    /// Number of samples drawn so far.
    pub fn drawn(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn next_unit(&mut self) -> f64 {
        if self.samples.is_empty() {
            return 0.0;
        }
        let sample = self.samples[self.cursor % self.samples.len()];
        self.cursor += 1;
        sample
    }
}
