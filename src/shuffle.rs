//! Fisher-Yates shuffle and random selection primitives.
//!
//! Everything here takes a caller-supplied `Rng` so round generation stays
//! deterministic under a seeded generator.

use rand::Rng;

/// Shuffle a slice in place with the Fisher-Yates algorithm.
pub fn shuffle<T>(items: &mut [T], rng: &mut impl Rng) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Draw `count` distinct items from `pool` uniformly at random, without
/// replacement, using a partial Fisher-Yates pass over a scratch copy.
/// Draws the whole pool if `count` exceeds it.
pub fn sample<T: Copy>(pool: &[T], count: usize, rng: &mut impl Rng) -> Vec<T> {
    let mut scratch = pool.to_vec();
    let count = count.min(scratch.len());
    for i in 0..count {
        let j = rng.gen_range(i..scratch.len());
        scratch.swap(i, j);
    }
    scratch.truncate(count);
    scratch
}
