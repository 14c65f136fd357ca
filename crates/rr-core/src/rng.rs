//! Deterministic simulation RNG.
//!
//! There is no global random state.  A run owns exactly one [`SimRng`],
//! seeded from [`SimConfig::seed`][crate::SimConfig::seed], and passes it by
//! `&mut` to every initializer that draws from it.  Two runs with the same
//! seed and population sizes therefore build identical populations.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Simulation-level RNG, used only while building the population.
///
/// Never touched inside a parallel region, so it needs no synchronisation.
pub struct SimRng(SmallRng);

impl SimRng {
    pub fn new(seed: u64) -> Self {
        SimRng(SmallRng::seed_from_u64(seed))
    }

    /// Sample a uniformly distributed value of any `Standard`-distributed type.
    #[inline]
    pub fn random<T>(&mut self) -> T
    where
        rand::distributions::Standard: rand::distributions::Distribution<T>,
    {
        self.0.r#gen()
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
