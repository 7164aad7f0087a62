//! History entries
//!
//! An entry is created once by the log and never changed afterwards. Fields
//! are private; callers read them through accessors.

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use shared_types::{FilterSnapshot, OperationKind, OperationPayload};
use uuid::Uuid;

/// One recorded operation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Unique id (UUID v4)
    id: String,
    /// RFC 3339 UTC time of recording, millisecond precision
    timestamp: String,
    /// Kind of operation
    kind: OperationKind,
    /// Operation data, including the filter state
    payload: OperationPayload,
    /// Human-readable summary
    description: String,
}

impl HistoryEntry {
    /// Stamp a new entry with a fresh id and the current time.
    pub(crate) fn record(
        kind: OperationKind,
        payload: OperationPayload,
        description: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            kind,
            payload,
            description,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    pub fn payload(&self) -> &OperationPayload {
        &self.payload
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Filter state recorded with the entry.
    pub fn filter_state(&self) -> &FilterSnapshot {
        self.payload.filter_state()
    }
}
