//! Inbound Ports (Driving Ports)
//!
//! The API a presentation layer uses to drive the filter and read back state
//! and history.

use bv_01_filter_engine::{FilterParams, ParamAdjustment};
use bv_02_history_log::HistoryEntry;
use serde::Serialize;
use shared_types::FilterSnapshot;

use crate::error::SessionError;

/// How a membership check came out
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// The word is a member
    Present,
    /// Every bit is set but the word was never inserted
    PossibleFalsePositive,
    /// At least one bit is clear
    Absent,
}

impl Verdict {
    pub fn from_flags(might_contain: bool, definitely_contains: bool) -> Self {
        if definitely_contains {
            Verdict::Present
        } else if might_contain {
            Verdict::PossibleFalsePositive
        } else {
            Verdict::Absent
        }
    }

    /// User-facing sentence for a checked word.
    pub fn message(&self, word: &str) -> String {
        match self {
            Verdict::Present => format!("\"{}\" is DEFINITELY in the Bloom filter.", word),
            Verdict::PossibleFalsePositive => format!(
                "\"{}\" MIGHT be in the Bloom filter (possible false positive).",
                word
            ),
            Verdict::Absent => format!("\"{}\" is DEFINITELY NOT in the Bloom filter.", word),
        }
    }
}

/// Result of checking a word
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CheckResult {
    pub word: String,
    pub might_contain: bool,
    pub definitely_contains: bool,
    /// Positions that were tested, seeds 1..=k
    pub positions: Vec<usize>,
    pub verdict: Verdict,
}

/// Result of a parameter update
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ParamUpdate {
    /// Parameters now in effect
    pub applied: FilterParams,
    /// Requested values that were clamped
    pub adjustment: ParamAdjustment,
    /// Members before the change, re-inserted under the new parameters
    pub previous_members: Vec<String>,
}

/// Primary visualizer API (Driving Port)
///
/// Every successful mutation and every check is recorded in the history log.
/// Failed inserts and removals leave both the filter and the log untouched.
pub trait VisualizerApi {
    /// Insert a word (surrounding whitespace trimmed). `Ok(false)` if it was
    /// already present.
    fn add_word(&mut self, word: &str) -> Result<bool, SessionError>;

    /// Check a word. Always recorded.
    fn check_word(&mut self, word: &str) -> Result<CheckResult, SessionError>;

    /// Remove a word. `Ok(false)` if it was not present.
    fn remove_word(&mut self, word: &str) -> Result<bool, SessionError>;

    /// Clear the filter. Always recorded.
    fn reset_filter(&mut self);

    /// Clamp and apply new parameters. Always recorded.
    fn update_params(&mut self, capacity: i64, hash_count: i64) -> ParamUpdate;

    /// Positions a word maps to under the current parameters.
    fn hash_positions(&self, word: &str) -> Vec<usize>;

    /// Copy of the live filter state.
    fn snapshot(&self) -> FilterSnapshot;

    /// Copy of the history, most recent first.
    fn history(&self) -> Vec<HistoryEntry>;

    /// The most recent entry, for re-animating it.
    fn replay_last(&self) -> Option<HistoryEntry>;

    /// A specific entry, for re-animating it.
    fn replay_entry(&self, id: &str) -> Result<HistoryEntry, SessionError>;

    /// Put the live filter back into the state recorded with an entry.
    fn restore_entry(&mut self, id: &str) -> Result<FilterSnapshot, SessionError>;

    /// Drop all history.
    fn clear_history(&mut self);
}
