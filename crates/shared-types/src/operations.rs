//! # Operation Records
//!
//! The kinds of operation a caller performs against the filter, and the data
//! recorded for each one. Every payload carries the filter state captured right
//! after the operation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::entities::FilterSnapshot;

/// Kind of operation recorded in the history log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Add,
    Check,
    Remove,
    Reset,
    Update,
}

impl OperationKind {
    pub const ALL: [OperationKind; 5] = [
        OperationKind::Add,
        OperationKind::Check,
        OperationKind::Remove,
        OperationKind::Reset,
        OperationKind::Update,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OperationKind::Add => "add",
            OperationKind::Check => "check",
            OperationKind::Remove => "remove",
            OperationKind::Reset => "reset",
            OperationKind::Update => "update",
        }
    }

    /// Whether the operation changes filter state.
    pub fn is_mutation(&self) -> bool {
        !matches!(self, OperationKind::Check)
    }
}

impl fmt::Display for OperationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Operation-specific data stored with a history entry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum OperationPayload {
    /// A word was inserted
    Add {
        word: String,
        positions: Vec<usize>,
        filter_state: FilterSnapshot,
    },
    /// A word was tested for membership
    Check {
        word: String,
        positions: Vec<usize>,
        might_contain: bool,
        definitely_contains: bool,
        filter_state: FilterSnapshot,
    },
    /// A word was removed and the bit array rebuilt
    Remove {
        word: String,
        filter_state: FilterSnapshot,
    },
    /// The filter was cleared
    Reset { filter_state: FilterSnapshot },
    /// Capacity and hash count were changed
    Update {
        filter_state: FilterSnapshot,
        /// Members held before the change, re-inserted under the new parameters
        previous_members: Vec<String>,
        /// Requested capacity, present only when it had to be clamped
        requested_capacity: Option<i64>,
        /// Requested hash count, present only when it had to be clamped
        requested_hash_count: Option<i64>,
    },
}

impl OperationPayload {
    pub fn kind(&self) -> OperationKind {
        match self {
            OperationPayload::Add { .. } => OperationKind::Add,
            OperationPayload::Check { .. } => OperationKind::Check,
            OperationPayload::Remove { .. } => OperationKind::Remove,
            OperationPayload::Reset { .. } => OperationKind::Reset,
            OperationPayload::Update { .. } => OperationKind::Update,
        }
    }

    /// The filter state captured with this operation.
    pub fn filter_state(&self) -> &FilterSnapshot {
        match self {
            OperationPayload::Add { filter_state, .. }
            | OperationPayload::Check { filter_state, .. }
            | OperationPayload::Remove { filter_state, .. }
            | OperationPayload::Reset { filter_state }
            | OperationPayload::Update { filter_state, .. } => filter_state,
        }
    }

    /// The word the operation acted on, if any.
    pub fn word(&self) -> Option<&str> {
        match self {
            OperationPayload::Add { word, .. }
            | OperationPayload::Check { word, .. }
            | OperationPayload::Remove { word, .. } => Some(word),
            OperationPayload::Reset { .. } | OperationPayload::Update { .. } => None,
        }
    }

    /// Hash positions to animate, for add and check.
    pub fn positions(&self) -> Option<&[usize]> {
        match self {
            OperationPayload::Add { positions, .. } | OperationPayload::Check { positions, .. } => {
                Some(positions)
            }
            _ => None,
        }
    }
}
