//! Sources of uniformly distributed integers used to build and drain the stores
//!
//! The benchmark functions never reach for a global generator. The caller passes a
//! [`RandomSource`] into every run, so the same source can be shared by the array and the linked
//! list runs of one size and tests can replay exact sequences with [`ScriptedRandom`].

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A source of integers in the half-open range `[0, bound)`
pub trait RandomSource {
    /// Return the next value in `[0, bound)`
    ///
    /// Callers never pass a `bound` of `0`.
    fn next_below(&mut self, bound: usize) -> usize;
}

impl<T: RandomSource + ?Sized> RandomSource for &mut T {
    fn next_below(&mut self, bound: usize) -> usize {
        (**self).next_below(bound)
    }
}

/// The default [`RandomSource`] backed by [`StdRng`]
#[derive(Debug, Clone)]
pub struct SeededRandom {
    rng: StdRng,
    seed: Option<u64>,
}

impl SeededRandom {
    /// Create a new `SeededRandom` which is reproducible across runs
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            seed: Some(seed),
        }
    }

    /// Create a new `SeededRandom` seeded from the operating system
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            seed: None,
        }
    }

    /// The seed if this source was created with [`SeededRandom::from_seed`]
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl RandomSource for SeededRandom {
    fn next_below(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}

/// A [`RandomSource`] replaying a fixed sequence of values
///
/// Each value is reduced modulo the requested bound, so a script of positions which are already in
/// range is replayed verbatim. The sequence starts over from the beginning when exhausted. An empty
/// script always yields `0`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScriptedRandom {
    position: usize,
    values: Vec<usize>,
}

impl ScriptedRandom {
    /// Create a new `ScriptedRandom` from the values in the order they should be drawn
    pub fn new<I>(values: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        Self {
            position: 0,
            values: values.into_iter().collect(),
        }
    }

    /// The number of values drawn so far
    pub fn drawn(&self) -> usize {
        self.position
    }
}

impl RandomSource for ScriptedRandom {
    fn next_below(&mut self, bound: usize) -> usize {
        if self.values.is_empty() {
            return 0;
        }

        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value % bound
    }
}
