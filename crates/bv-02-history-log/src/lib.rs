//! # BV-02 History Log
//!
//! A bounded, most-recent-first log of the operations performed against a
//! filter. Each entry holds a full copy of the filter state at the time it was
//! recorded, so any past state can be inspected or replayed.
//!
//! The log is a passive recorder: it never calls into the filter engine.
//!
//! ## Invariants
//!
//! - **INVARIANT-1**: `0 <= len <= max_size` (50 by default)
//! - **INVARIANT-2**: entries are ordered newest first; when the log is full
//!   the oldest entry is evicted
//! - **INVARIANT-3**: entries are immutable once recorded
//!
//! ## Usage Example
//!
//! ```
//! use bv_02_history_log::HistoryLog;
//! use shared_types::{FilterSnapshot, OperationKind, OperationPayload};
//!
//! let mut log = HistoryLog::new();
//! let entry = log.add_entry(
//!     OperationKind::Reset,
//!     OperationPayload::Reset { filter_state: FilterSnapshot::empty(32, 3) },
//!     "Reset Bloom Filter",
//! );
//!
//! assert_eq!(log.get_entry(entry.id()), Some(&entry));
//! ```

pub mod domain;

pub use domain::{HistoryEntry, HistoryLog, MAX_HISTORY_SIZE};
