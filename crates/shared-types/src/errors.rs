//! # Error Types
//!
//! Errors raised while encoding or decoding shared data.

use thiserror::Error;

/// Errors from the binary and JSON snapshot codecs.
#[derive(Debug, Error)]
pub enum CodecError {
    /// Binary encoding or decoding failed.
    #[error("Binary codec error: {0}")]
    Binary(#[from] bincode::Error),

    /// JSON encoding or decoding failed.
    #[error("JSON codec error: {0}")]
    Json(#[from] serde_json::Error),
}
