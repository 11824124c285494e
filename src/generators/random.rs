// src/generators/random.rs
use rand::rngs::ThreadRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Source of uniform indices used when sampling from a character pool.
///
/// `next_index(bound)` must return a value in `0..bound`; callers never pass
/// a zero bound.
pub trait RandomSource {
    fn next_index(&mut self, bound: usize) -> usize;
}

/// Thread-local generator from `rand`.
pub struct SystemRandom {
    rng: ThreadRng,
}

impl SystemRandom {
    pub fn new() -> Self {
        Self { rng: rand::thread_rng() }
    }
}

impl Default for SystemRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for SystemRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}

/// Reproducible generator, handy for tests and for replaying a session.
pub struct SeededRandom {
    rng: ChaCha8Rng,
}

impl SeededRandom {
    pub fn from_seed(seed: u64) -> Self {
        Self { rng: ChaCha8Rng::seed_from_u64(seed) }
    }
}

impl RandomSource for SeededRandom {
    fn next_index(&mut self, bound: usize) -> usize {
        self.rng.gen_range(0..bound)
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}
