//! Error types for the session layer

use bv_01_filter_engine::FilterError;
use thiserror::Error;

/// Errors that can occur while driving a session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Please enter a word")]
    EmptyWord,

    #[error("History entry not found: {0}")]
    EntryNotFound(String),

    #[error("Invalid session configuration: {0}")]
    InvalidConfig(String),

    #[error("Filter error: {0}")]
    Filter(#[from] FilterError),
}
