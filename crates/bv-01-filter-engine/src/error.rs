//! Error types for the filter engine
//!
//! Everyday operations report failure through their return values
//! (`insert`/`remove` return `false`). These errors cover strict construction
//! and rebuilding an engine from a recorded snapshot.

use thiserror::Error;

/// Errors that can occur in the filter engine
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("Invalid filter parameters: {0}")]
    InvalidParameters(String),

    #[error("Corrupt snapshot: {0}")]
    CorruptSnapshot(String),
}
