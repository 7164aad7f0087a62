//! Hash functions for the Bloom filter
//!
//! A single rolling hash, varied by a seed. Seeds `1..=k` give the k hash
//! functions.
//!
//! For every UTF-16 code unit `c` of the key:
//!
//! ```text
//! acc = (acc << 5) - acc + c * seed      (32-bit signed, wrapping)
//! ```
//!
//! and the position is `|acc| mod capacity`, with `|i32::MIN| = 2^31`.
//! Positions recorded in history depend on this arithmetic, so it must not
//! change.

/// Run the rolling hash over `key` with the given seed.
pub fn rolling_hash(key: &str, seed: u32) -> i32 {
    let seed = seed as i32;
    key.encode_utf16().fold(0i32, |acc, unit| {
        acc.wrapping_shl(5)
            .wrapping_sub(acc)
            .wrapping_add((unit as i32).wrapping_mul(seed))
    })
}

/// Map `key` to a bit index in `[0, capacity)` using one seed.
///
/// `capacity` must be non-zero.
pub fn hash_position(key: &str, seed: u32, capacity: usize) -> usize {
    rolling_hash(key, seed).unsigned_abs() as usize % capacity
}

/// Compute the k hash positions for a key, seeds `1..=hash_count` in order.
///
/// Duplicate positions across seeds are kept.
pub fn compute_hash_positions(key: &str, hash_count: usize, capacity: usize) -> Vec<usize> {
    (1..=hash_count as u32)
        .map(|seed| hash_position(key, seed, capacity))
        .collect()
}
