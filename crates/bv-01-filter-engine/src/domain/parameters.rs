//! Filter parameters and their valid ranges
//!
//! Capacity (m) and hash count (k) are bounded so the bit array stays small
//! enough to draw:
//! - m in [8, 128]
//! - k in [1, 5]
//!
//! Callers that take raw input should go through [`FilterParams::clamp`], which
//! never fails and reports what it had to change.

use serde::{Deserialize, Serialize};

use crate::error::FilterError;

/// Smallest allowed bit array
pub const MIN_CAPACITY: usize = 8;
/// Largest allowed bit array
pub const MAX_CAPACITY: usize = 128;
/// Fewest hash functions
pub const MIN_HASH_COUNT: usize = 1;
/// Most hash functions
pub const MAX_HASH_COUNT: usize = 5;

/// Capacity of a freshly opened visualizer
pub const DEFAULT_CAPACITY: usize = 32;
/// Hash count of a freshly opened visualizer
pub const DEFAULT_HASH_COUNT: usize = 3;

/// Bloom filter parameters, always within range
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterParams {
    /// Number of bits in the filter
    pub capacity: usize,
    /// Number of hash functions
    pub hash_count: usize,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            hash_count: DEFAULT_HASH_COUNT,
        }
    }
}

/// Requested values that were out of range.
///
/// A field is `Some(requested)` only when that value had to be clamped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParamAdjustment {
    pub requested_capacity: Option<i64>,
    pub requested_hash_count: Option<i64>,
}

impl ParamAdjustment {
    /// Whether any requested value was changed.
    pub fn is_adjusted(&self) -> bool {
        self.requested_capacity.is_some() || self.requested_hash_count.is_some()
    }
}

/// Result of clamping raw input
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClampedParams {
    pub params: FilterParams,
    pub adjustment: ParamAdjustment,
}

impl FilterParams {
    /// Create parameters, rejecting out-of-range values.
    pub fn new(capacity: usize, hash_count: usize) -> Result<Self, FilterError> {
        if !(MIN_CAPACITY..=MAX_CAPACITY).contains(&capacity) {
            return Err(FilterError::InvalidParameters(format!(
                "capacity {} outside [{}, {}]",
                capacity, MIN_CAPACITY, MAX_CAPACITY
            )));
        }
        if !(MIN_HASH_COUNT..=MAX_HASH_COUNT).contains(&hash_count) {
            return Err(FilterError::InvalidParameters(format!(
                "hash count {} outside [{}, {}]",
                hash_count, MIN_HASH_COUNT, MAX_HASH_COUNT
            )));
        }
        Ok(Self {
            capacity,
            hash_count,
        })
    }

    /// Clamp raw input into range, recording which values changed.
    pub fn clamp(requested_capacity: i64, requested_hash_count: i64) -> ClampedParams {
        let capacity = requested_capacity.clamp(MIN_CAPACITY as i64, MAX_CAPACITY as i64);
        let hash_count = requested_hash_count.clamp(MIN_HASH_COUNT as i64, MAX_HASH_COUNT as i64);

        ClampedParams {
            params: Self {
                capacity: capacity as usize,
                hash_count: hash_count as usize,
            },
            adjustment: ParamAdjustment {
                requested_capacity: (capacity != requested_capacity).then_some(requested_capacity),
                requested_hash_count: (hash_count != requested_hash_count)
                    .then_some(requested_hash_count),
            },
        }
    }

    /// Clamp already-unsigned values. Used where the engine must not fail.
    pub fn saturating(capacity: usize, hash_count: usize) -> Self {
        Self {
            capacity: capacity.clamp(MIN_CAPACITY, MAX_CAPACITY),
            hash_count: hash_count.clamp(MIN_HASH_COUNT, MAX_HASH_COUNT),
        }
    }
}

/// Calculate the false positive rate for given parameters
///
/// Formula: FPR = (1 - e^(-kn/m))^k
pub fn calculate_fpr(m: usize, n: usize, k: usize) -> f64 {
    if m == 0 {
        return 1.0;
    }
    if n == 0 {
        return 0.0;
    }

    let exponent = -(k as f64) * (n as f64) / (m as f64);
    (1.0 - exponent.exp()).powi(k as i32)
}
