//! Small randomness helpers shared by the generator and option builder.
//!
//! Every function takes the caller's random source so tests can pin
//! sequences with a seeded or mock generator.

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Uniform integer in `lo..=hi`. Callers guarantee `lo <= hi`.
pub fn between<R: Rng + ?Sized>(rng: &mut R, lo: i64, hi: i64) -> i64 {
    debug_assert!(lo <= hi, "empty range {lo}..={hi}");
    rng.gen_range(lo..=hi)
}

/// Uniform element of a non-empty slice.
pub fn pick<T: Copy, R: Rng + ?Sized>(rng: &mut R, items: &[T]) -> T {
    debug_assert!(!items.is_empty());
    items[rng.gen_range(0..items.len())]
}

/// Uniform random permutation (Fisher–Yates).
pub fn shuffle<T, R: Rng + ?Sized>(rng: &mut R, items: &mut [T]) {
    items.shuffle(rng);
}

/// A reproducible random source for the given seed.
pub fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// A random source seeded from OS entropy.
pub fn from_entropy() -> ChaCha8Rng {
    ChaCha8Rng::from_entropy()
}
