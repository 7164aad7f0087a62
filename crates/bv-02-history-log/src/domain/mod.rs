//! Domain Layer - history entries and the bounded log
//!
//! RULES:
//! - No I/O operations
//! - No async code

pub mod entry;
pub mod log;

pub use entry::HistoryEntry;
pub use log::{HistoryLog, MAX_HISTORY_SIZE};
