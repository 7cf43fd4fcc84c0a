//! Injected randomness
//!
//! Everything that makes a random decision takes a `RandomSource`, so tests
//! can swap in a scripted fake and get deterministic maps and moves.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;

/// Source of random numbers for map generation and the simulation
pub trait RandomSource {
    /// Returns a number in `[0, n)`
    fn generate_num(&mut self, n: usize) -> usize;

    /// Returns the numbers `[0, n)` in random order, empty when `n == 0`
    fn generate_permutation(&mut self, n: usize) -> Vec<usize>;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn generate_num(&mut self, n: usize) -> usize {
        (**self).generate_num(n)
    }

    fn generate_permutation(&mut self, n: usize) -> Vec<usize> {
        (**self).generate_permutation(n)
    }
}

/// Random source backed by `rand`
///
/// Uses the thread-local generator unless constructed with a seed.
#[derive(Debug, Default)]
pub struct ThreadRandom {
    rng: Option<StdRng>,
}

impl ThreadRandom {
    pub fn new() -> Self {
        Self { rng: None }
    }

    /// Create a random source with a seeded RNG for reproducible runs
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: Some(StdRng::seed_from_u64(seed)),
        }
    }
}

impl RandomSource for ThreadRandom {
    fn generate_num(&mut self, n: usize) -> usize {
        if n == 0 {
            return 0;
        }
        match &mut self.rng {
            Some(rng) => rng.random_range(0..n),
            None => rand::rng().random_range(0..n),
        }
    }

    fn generate_permutation(&mut self, n: usize) -> Vec<usize> {
        let mut values: Vec<usize> = (0..n).collect();
        match &mut self.rng {
            Some(rng) => values.shuffle(rng),
            None => values.shuffle(&mut rand::rng()),
        }
        values
    }
}

