//! # Filter State Entities
//!
//! `FilterSnapshot` is the full, independent copy of a filter's state that the
//! engine hands out and that every history entry carries.

use serde::{Deserialize, Serialize};

use crate::errors::CodecError;

/// Point-in-time copy of a Bloom filter.
///
/// `bits.len() == capacity` for every snapshot produced by the engine.
/// `members` is in insertion order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSnapshot {
    /// The bit array, index 0..capacity-1
    pub bits: Vec<bool>,
    /// Keys currently inserted, oldest first
    pub members: Vec<String>,
    /// Number of bits (m)
    pub capacity: usize,
    /// Number of hash functions (k)
    pub hash_count: usize,
}

impl FilterSnapshot {
    /// Snapshot of an empty filter with the given parameters.
    pub fn empty(capacity: usize, hash_count: usize) -> Self {
        Self {
            bits: vec![false; capacity],
            members: Vec::new(),
            capacity,
            hash_count,
        }
    }

    /// Number of bits set to true.
    pub fn bits_set(&self) -> usize {
        self.bits.iter().filter(|&&bit| bit).count()
    }

    /// Indices of the bits that are set, ascending.
    pub fn set_positions(&self) -> Vec<usize> {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(i, &bit)| bit.then_some(i))
            .collect()
    }

    /// Whether `key` was a member when the snapshot was taken.
    pub fn has_member(&self, key: &str) -> bool {
        self.members.iter().any(|m| m == key)
    }

    /// Render the bit array as a string of `0`/`1`, index 0 first.
    pub fn bit_string(&self) -> String {
        self.bits.iter().map(|&b| if b { '1' } else { '0' }).collect()
    }

    /// Encode to compact binary form.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CodecError> {
        Ok(bincode::serialize(self)?)
    }

    /// Decode from the binary form produced by [`FilterSnapshot::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, CodecError> {
        Ok(bincode::deserialize(bytes)?)
    }

    /// Encode as a JSON document.
    pub fn to_json(&self) -> Result<String, CodecError> {
        Ok(serde_json::to_string(self)?)
    }
}
