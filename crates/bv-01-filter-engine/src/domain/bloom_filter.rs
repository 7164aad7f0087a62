//! Core Bloom Filter implementation
//!
//! Besides the bit array the filter keeps the exact set of inserted keys. That
//! set is what makes `remove` possible: the bit array is cleared and rebuilt
//! from the surviving keys, so bits shared with other keys are never lost.
//!
//! INVARIANTS:
//! - INVARIANT-1: `bits.len() == capacity`, with capacity in [8, 128] and hash
//!   count in [1, 5]
//! - INVARIANT-2: every member's hash positions (under the current parameters)
//!   are set. No false negatives for members.

use bitvec::prelude::*;
use indexmap::IndexSet;
use shared_types::FilterSnapshot;

use super::hash_functions::{compute_hash_positions, hash_position};
use super::parameters::{calculate_fpr, FilterParams};
use crate::error::FilterError;

/// Bloom filter with an exact member record
///
/// `might_contain` answers the classical probabilistic question (false
/// positives possible). `definitely_contains` answers from the member set.
#[derive(Clone, Debug)]
pub struct BloomFilter {
    /// Bit array storing the filter state
    bits: BitVec<u8, Lsb0>,
    /// Capacity (m) and hash count (k)
    params: FilterParams,
    /// Inserted keys, in insertion order
    members: IndexSet<String>,
}

impl Default for BloomFilter {
    fn default() -> Self {
        Self::with_params(FilterParams::default())
    }
}

impl BloomFilter {
    /// Create an empty filter
    ///
    /// Out-of-range values are clamped to capacity [8, 128] and hash count
    /// [1, 5]. Use [`FilterParams::clamp`] first if the caller needs to know.
    pub fn new(capacity: usize, hash_count: usize) -> Self {
        Self::with_params(FilterParams::saturating(capacity, hash_count))
    }

    /// Create an empty filter from validated parameters
    pub fn with_params(params: FilterParams) -> Self {
        Self {
            bits: bitvec![u8, Lsb0; 0; params.capacity],
            params,
            members: IndexSet::new(),
        }
    }

    /// Rebuild a filter from a recorded snapshot
    ///
    /// The bit array is taken as recorded. The snapshot is rejected if its
    /// parameters are out of range, its bit array has the wrong length, a
    /// member is listed twice, or a member's positions are not all set.
    pub fn from_snapshot(snapshot: &FilterSnapshot) -> Result<Self, FilterError> {
        let params = FilterParams::new(snapshot.capacity, snapshot.hash_count)
            .map_err(|e| FilterError::CorruptSnapshot(e.to_string()))?;

        if snapshot.bits.len() != params.capacity {
            return Err(FilterError::CorruptSnapshot(format!(
                "bit array has {} bits, capacity is {}",
                snapshot.bits.len(),
                params.capacity
            )));
        }

        let bits: BitVec<u8, Lsb0> = snapshot.bits.iter().copied().collect();
        let mut members = IndexSet::with_capacity(snapshot.members.len());

        for member in &snapshot.members {
            let positions = compute_hash_positions(member, params.hash_count, params.capacity);
            if !positions.iter().all(|&pos| bits[pos]) {
                return Err(FilterError::CorruptSnapshot(format!(
                    "member {:?} has unset hash positions",
                    member
                )));
            }
            if !members.insert(member.clone()) {
                return Err(FilterError::CorruptSnapshot(format!(
                    "member {:?} listed twice",
                    member
                )));
            }
        }

        Ok(Self {
            bits,
            params,
            members,
        })
    }

    /// Hash `key` with one seed into `[0, capacity)`
    pub fn hash(&self, key: &str, seed: u32) -> usize {
        hash_position(key, seed, self.params.capacity)
    }

    /// The k positions for `key`, seeds 1..=k in order, duplicates kept
    pub fn hash_positions(&self, key: &str) -> Vec<usize> {
        compute_hash_positions(key, self.params.hash_count, self.params.capacity)
    }

    /// Insert a key
    ///
    /// Returns `false` without touching any state if the key is already a
    /// member.
    pub fn insert(&mut self, key: &str) -> bool {
        if self.members.contains(key) {
            return false;
        }

        for pos in self.hash_positions(key) {
            self.bits.set(pos, true);
        }
        self.members.insert(key.to_owned());
        true
    }

    /// Remove a key
    ///
    /// Returns `false` if the key is not a member. Otherwise the bit array is
    /// cleared and every remaining member is hashed back in, O(n * k).
    pub fn remove(&mut self, key: &str) -> bool {
        if !self.members.shift_remove(key) {
            return false;
        }

        self.rebuild();
        true
    }

    /// Clear all bits and members
    pub fn reset(&mut self) {
        self.bits.fill(false);
        self.members.clear();
    }

    /// Change capacity and hash count, re-inserting every member
    ///
    /// Values are clamped into range. Returns the members held before the
    /// change, in insertion order.
    pub fn update_params(&mut self, capacity: usize, hash_count: usize) -> Vec<String> {
        self.apply_params(FilterParams::saturating(capacity, hash_count))
    }

    /// Change to already-validated parameters, re-inserting every member
    pub fn apply_params(&mut self, params: FilterParams) -> Vec<String> {
        let previous: Vec<String> = self.members.iter().cloned().collect();

        self.reset();
        self.params = params;
        self.bits = bitvec![u8, Lsb0; 0; params.capacity];

        for key in &previous {
            self.insert(key);
        }
        previous
    }

    /// Test if a key might be in the filter
    ///
    /// - `true` if every hash position is set (could be a false positive)
    /// - `false` if the key is definitely not in the set
    pub fn might_contain(&self, key: &str) -> bool {
        self.hash_positions(key).iter().all(|&pos| self.bits[pos])
    }

    /// Exact membership from the member record
    pub fn definitely_contains(&self, key: &str) -> bool {
        self.members.contains(key)
    }

    /// Independent copy of the current state
    pub fn snapshot(&self) -> FilterSnapshot {
        FilterSnapshot {
            bits: self.bits.iter().by_vals().collect(),
            members: self.members.iter().cloned().collect(),
            capacity: self.params.capacity,
            hash_count: self.params.hash_count,
        }
    }

    /// Estimated false positive rate for the current fill
    ///
    /// Formula: FPR = (1 - e^(-kn/m))^k
    pub fn estimated_fpr(&self) -> f64 {
        calculate_fpr(self.params.capacity, self.members.len(), self.params.hash_count)
    }

    /// Number of bits set
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }

    /// Fraction of bits set
    pub fn fill_ratio(&self) -> f64 {
        self.bits_set() as f64 / self.params.capacity as f64
    }

    /// Whether the bit at `index` is set. Out-of-range indices read as unset.
    pub fn bit(&self, index: usize) -> bool {
        self.bits.get(index).map(|bit| *bit).unwrap_or(false)
    }

    pub fn params(&self) -> FilterParams {
        self.params
    }

    pub fn capacity(&self) -> usize {
        self.params.capacity
    }

    pub fn hash_count(&self) -> usize {
        self.params.hash_count
    }

    /// Members in insertion order
    pub fn members(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    fn rebuild(&mut self) {
        let Self {
            bits,
            params,
            members,
        } = self;

        bits.fill(false);
        for key in members.iter() {
            for pos in compute_hash_positions(key, params.hash_count, params.capacity) {
                bits.set(pos, true);
            }
        }
    }
}
