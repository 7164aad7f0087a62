//! # BV-01 Filter Engine
//!
//! An inspectable Bloom filter: a small bit array, k seeded rolling hashes,
//! and an exact record of the inserted keys.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): Pure logic, no I/O
//!   - `BloomFilter`: bit array, member set, all mutations and queries
//!   - `hash_functions`: the seeded 32-bit rolling hash
//!   - `FilterParams`: capacity / hash count ranges and clamping
//!
//! ## Invariants
//!
//! - **INVARIANT-1**: `8 <= capacity <= 128`, `1 <= hash_count <= 5`, and the
//!   bit array is exactly `capacity` bits long
//! - **INVARIANT-2**: every member's hash positions are set, so
//!   `might_contain(member)` is always true
//!
//! ## Removal
//!
//! Bits cannot be cleared one at a time without risking bits shared with other
//! keys. `remove` drops the key from the member set, clears the array and
//! hashes every survivor back in. The same replay happens when the parameters
//! change.
//!
//! ## Usage Example
//!
//! ```
//! use bv_01_filter_engine::BloomFilter;
//!
//! let mut filter = BloomFilter::new(32, 3);
//! assert!(filter.insert("apple"));
//! assert!(!filter.insert("apple"));
//!
//! assert!(filter.might_contain("apple"));
//! assert!(filter.definitely_contains("apple"));
//!
//! assert!(filter.remove("apple"));
//! assert_eq!(filter.bits_set(), 0);
//! ```

pub mod domain;
pub mod error;

// Re-exports for convenience
pub use domain::{BloomFilter, ClampedParams, FilterParams, ParamAdjustment};
pub use error::FilterError;
pub use shared_types::FilterSnapshot;
