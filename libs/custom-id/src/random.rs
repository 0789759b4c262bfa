//! Random sources for the random and GUID elements.
//!
//! All randomness used by the generator goes through [`RandSource`], so a
//! seeded source can stand in for the thread RNG in tests.

use std::ops::RangeInclusive;

use rand::rngs::StdRng;
use rand::{rng, Rng, SeedableRng};

/// A source of random values for rendering elements.
pub trait RandSource {
    /// Returns a uniformly random `u32`.
    fn rand_u32(&mut self) -> u32;

    /// Returns a uniformly random value in `range`.
    fn rand_in(&mut self, range: RangeInclusive<u32>) -> u32;

    /// Returns 16 random bytes.
    fn rand_bytes(&mut self) -> [u8; 16];
}

/// A `RandSource` backed by the thread-local RNG.
///
/// Cryptographically secure and reseeded periodically; this is what the
/// free `generate` function uses.
#[derive(Debug, Default, Clone, Copy)]
pub struct ThreadRandom;

impl RandSource for ThreadRandom {
    fn rand_u32(&mut self) -> u32 {
        rng().random()
    }

    fn rand_in(&mut self, range: RangeInclusive<u32>) -> u32 {
        rng().random_range(range)
    }

    fn rand_bytes(&mut self) -> [u8; 16] {
        rng().random()
    }
}

/// A deterministic `RandSource` for reproducible output.
#[derive(Debug, Clone)]
pub struct SeededRandom(StdRng);

impl SeededRandom {
    /// Creates a source seeded from `seed`.
    pub fn new(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

impl RandSource for SeededRandom {
    fn rand_u32(&mut self) -> u32 {
        self.0.random()
    }

    fn rand_in(&mut self, range: RangeInclusive<u32>) -> u32 {
        self.0.random_range(range)
    }

    fn rand_bytes(&mut self) -> [u8; 16] {
        self.0.random()
    }
}

impl<R: RandSource + ?Sized> RandSource for &mut R {
    fn rand_u32(&mut self) -> u32 {
        (**self).rand_u32()
    }

    fn rand_in(&mut self, range: RangeInclusive<u32>) -> u32 {
        (**self).rand_in(range)
    }

    fn rand_bytes(&mut self) -> [u8; 16] {
        (**self).rand_bytes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_random_is_reproducible() {
        let mut a = SeededRandom::new(7);
        let mut b = SeededRandom::new(7);
        for _ in 0..32 {
            assert_eq!(a.rand_u32(), b.rand_u32());
        }
        assert_eq!(a.rand_bytes(), b.rand_bytes());
    }

    #[test]
    fn test_rand_in_stays_in_range() {
        let mut source = SeededRandom::new(1);
        for _ in 0..1000 {
            let value = source.rand_in(100_000..=999_999);
            assert!((100_000..=999_999).contains(&value));
        }
    }

    #[test]
    fn test_thread_random_in_range() {
        let mut source = ThreadRandom;
        let value = source.rand_in(1..=3);
        assert!((1..=3).contains(&value));
    }
}
