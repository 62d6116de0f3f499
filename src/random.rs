//! Randomness used for seeding and scores, injected into setup and simulation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of uniform integers and shuffles.
pub trait RandomSource {
    /// Uniform integer in `[low, high]`, both ends inclusive.
    fn uniform_int(&mut self, low: u32, high: u32) -> u32;

    /// Fisher-Yates: for i from the last index down to 1, swap with a uniform index in [0, i].
    fn shuffle<T>(&mut self, items: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..items.len()).rev() {
            let j = self.uniform_int(0, i as u32) as usize;
            items.swap(i, j);
        }
    }
}

/// Adapter from any `rand::Rng`.
#[derive(Clone, Debug)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    /// Fresh OS seed per run.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn uniform_int(&mut self, low: u32, high: u32) -> u32 {
        self.rng.gen_range(low..=high)
    }
}
