//! Random source backed by a `rand` generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::RandomSource;

/// A [`RandomSource`] backed by [`StdRng`].
///
/// Seed it for a reproducible run, or let it draw from OS entropy.
#[derive(Debug)]
pub struct RngSource {
    rng: StdRng,
}

impl RngSource {
    /// Create a source seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create a source with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded when `seed` is given, entropy otherwise.
    pub fn new(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl RandomSource for RngSource {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen_range(0.0..=1.0)
    }
}
