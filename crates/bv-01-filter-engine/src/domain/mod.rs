//! Domain Layer - Pure filter logic
//!
//! This layer contains:
//! - Bloom filter with exact member record
//! - Rolling hash functions
//! - Parameter ranges, clamping and FPR estimation
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - Pure functions where possible

pub mod bloom_filter;
pub mod hash_functions;
pub mod parameters;

pub use bloom_filter::BloomFilter;
pub use hash_functions::{compute_hash_positions, hash_position, rolling_hash};
pub use parameters::{
    calculate_fpr, ClampedParams, FilterParams, ParamAdjustment, DEFAULT_CAPACITY,
    DEFAULT_HASH_COUNT, MAX_CAPACITY, MAX_HASH_COUNT, MIN_CAPACITY, MIN_HASH_COUNT,
};
