//! Session configuration and validation
//!
//! # Example
//!
//! ```
//! use bv_03_session::SessionConfigBuilder;
//!
//! let config = SessionConfigBuilder::new()
//!     .initial_capacity(64)
//!     .initial_hash_count(4)
//!     .max_history(20)
//!     .build()
//!     .expect("Valid config");
//! assert_eq!(config.initial_capacity, 64);
//! ```

use std::env;

use bv_01_filter_engine::domain::{
    FilterParams, DEFAULT_CAPACITY, DEFAULT_HASH_COUNT, MAX_CAPACITY, MAX_HASH_COUNT,
    MIN_CAPACITY, MIN_HASH_COUNT,
};
use bv_02_history_log::MAX_HISTORY_SIZE;
use serde::{Deserialize, Serialize};

use crate::error::SessionError;

/// Session configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Bits in the filter at startup (8 to 128)
    pub initial_capacity: usize,
    /// Hash functions at startup (1 to 5)
    pub initial_hash_count: usize,
    /// History entries kept before the oldest is evicted
    pub max_history: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_CAPACITY,
            initial_hash_count: DEFAULT_HASH_COUNT,
            max_history: MAX_HISTORY_SIZE,
        }
    }
}

impl SessionConfig {
    /// Validate ranges
    pub fn validate(&self) -> Result<(), SessionError> {
        if !(MIN_CAPACITY..=MAX_CAPACITY).contains(&self.initial_capacity) {
            return Err(SessionError::InvalidConfig(format!(
                "initial_capacity must be between {} and {}",
                MIN_CAPACITY, MAX_CAPACITY
            )));
        }

        if !(MIN_HASH_COUNT..=MAX_HASH_COUNT).contains(&self.initial_hash_count) {
            return Err(SessionError::InvalidConfig(format!(
                "initial_hash_count must be between {} and {}",
                MIN_HASH_COUNT, MAX_HASH_COUNT
            )));
        }

        if self.max_history == 0 {
            return Err(SessionError::InvalidConfig(
                "max_history cannot be 0".to_string(),
            ));
        }

        Ok(())
    }

    /// Load from environment variables, keeping defaults for anything unset
    /// or unparsable.
    ///
    /// # Environment Variables
    ///
    /// - `BV_CAPACITY`: initial capacity (default: 32)
    /// - `BV_HASH_COUNT`: initial hash count (default: 3)
    /// - `BV_MAX_HISTORY`: history bound (default: 50)
    ///
    /// Values are not range-checked here; the session clamps the filter
    /// parameters when it starts.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`SessionConfig::from_env`] over any key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let parse = |key: &str, default: usize| {
            lookup(key)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(default)
        };

        Self {
            initial_capacity: parse("BV_CAPACITY", defaults.initial_capacity),
            initial_hash_count: parse("BV_HASH_COUNT", defaults.initial_hash_count),
            max_history: parse("BV_MAX_HISTORY", defaults.max_history),
        }
    }

    /// Filter parameters for a new session, clamped into range.
    pub fn filter_params(&self) -> FilterParams {
        FilterParams::saturating(self.initial_capacity, self.initial_hash_count)
    }
}

/// Builder for SessionConfig with validation
#[derive(Default)]
pub struct SessionConfigBuilder {
    initial_capacity: Option<usize>,
    initial_hash_count: Option<usize>,
    max_history: Option<usize>,
}

impl SessionConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting capacity (8 to 128)
    pub fn initial_capacity(mut self, bits: usize) -> Self {
        self.initial_capacity = Some(bits);
        self
    }

    /// Set the starting hash count (1 to 5)
    pub fn initial_hash_count(mut self, k: usize) -> Self {
        self.initial_hash_count = Some(k);
        self
    }

    /// Set the history bound
    pub fn max_history(mut self, entries: usize) -> Self {
        self.max_history = Some(entries);
        self
    }

    /// Build the SessionConfig, validating all parameters
    pub fn build(self) -> Result<SessionConfig, SessionError> {
        let defaults = SessionConfig::default();

        let config = SessionConfig {
            initial_capacity: self.initial_capacity.unwrap_or(defaults.initial_capacity),
            initial_hash_count: self.initial_hash_count.unwrap_or(defaults.initial_hash_count),
            max_history: self.max_history.unwrap_or(defaults.max_history),
        };

        config.validate()?;
        Ok(config)
    }
}
