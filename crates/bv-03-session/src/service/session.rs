//! Visualizer Session
//!
//! Owns one filter engine and one history log. Each operation runs against the
//! engine first; the outcome, with a fresh snapshot, is then recorded in the
//! log. The log never calls back into the engine.

use std::sync::Arc;

use bv_01_filter_engine::{BloomFilter, ClampedParams, FilterParams};
use bv_02_history_log::{HistoryEntry, HistoryLog};
use bv_telemetry::{log_event, subsystem_span};
use shared_types::{FilterSnapshot, OperationPayload};
use tracing::{debug, info};

use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::metrics::{MetricsRecorder, MetricsSnapshot, SessionMetrics};
use crate::ports::{CheckResult, ParamUpdate, Verdict, VisualizerApi};

const SUBSYSTEM: &str = "session";

/// A filter and its history, driven through [`VisualizerApi`]
pub struct VisualizerSession {
    filter: BloomFilter,
    history: HistoryLog,
    metrics: Arc<dyn MetricsRecorder>,
}

impl Default for VisualizerSession {
    fn default() -> Self {
        Self::new(&SessionConfig::default())
    }
}

impl VisualizerSession {
    /// Create a session with counting metrics
    pub fn new(config: &SessionConfig) -> Self {
        Self::with_metrics(config, Arc::new(SessionMetrics::new()))
    }

    /// Create a session reporting to the given recorder
    pub fn with_metrics(config: &SessionConfig, metrics: Arc<dyn MetricsRecorder>) -> Self {
        let params = config.filter_params();
        info!(
            capacity = params.capacity,
            hash_count = params.hash_count,
            max_history = config.max_history,
            "Creating visualizer session"
        );

        Self {
            filter: BloomFilter::with_params(params),
            history: HistoryLog::with_max_size(config.max_history),
            metrics,
        }
    }

    /// Read access to the live filter
    pub fn filter(&self) -> &BloomFilter {
        &self.filter
    }

    /// Read access to the history log
    pub fn history_log(&self) -> &HistoryLog {
        &self.history
    }

    pub fn params(&self) -> FilterParams {
        self.filter.params()
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }

    fn normalize(word: &str) -> Result<&str, SessionError> {
        let word = word.trim();
        if word.is_empty() {
            return Err(SessionError::EmptyWord);
        }
        Ok(word)
    }

    fn record(&mut self, payload: OperationPayload, description: String) -> HistoryEntry {
        let kind = payload.kind();
        let entry = self.history.add_entry(kind, payload, description);
        debug!(
            id = entry.id(),
            kind = %kind,
            history_len = self.history.len(),
            "Recorded history entry"
        );
        entry
    }
}

impl VisualizerApi for VisualizerSession {
    fn add_word(&mut self, word: &str) -> Result<bool, SessionError> {
        let word = Self::normalize(word)?;

        let inserted = self.filter.insert(word);
        self.metrics.record_insert(inserted);

        if !inserted {
            log_event!(warn, SUBSYSTEM, "Word is already in the filter", word = word);
            return Ok(false);
        }

        let positions = self.filter.hash_positions(word);
        info!(word = word, positions = ?positions, "Added word");

        self.record(
            OperationPayload::Add {
                word: word.to_owned(),
                positions,
                filter_state: self.filter.snapshot(),
            },
            format!("Added word \"{}\" to the filter", word),
        );
        Ok(true)
    }

    fn check_word(&mut self, word: &str) -> Result<CheckResult, SessionError> {
        let word = Self::normalize(word)?;

        let might_contain = self.filter.might_contain(word);
        let definitely_contains = self.filter.definitely_contains(word);
        let positions = self.filter.hash_positions(word);
        let verdict = Verdict::from_flags(might_contain, definitely_contains);
        self.metrics.record_check(might_contain, definitely_contains);

        debug!(word = word, verdict = ?verdict, positions = ?positions, "Checked word");

        self.record(
            OperationPayload::Check {
                word: word.to_owned(),
                positions: positions.clone(),
                might_contain,
                definitely_contains,
                filter_state: self.filter.snapshot(),
            },
            format!("Checked if word \"{}\" exists in the filter", word),
        );

        Ok(CheckResult {
            word: word.to_owned(),
            might_contain,
            definitely_contains,
            positions,
            verdict,
        })
    }

    fn remove_word(&mut self, word: &str) -> Result<bool, SessionError> {
        let word = Self::normalize(word)?;

        let removed = self.filter.remove(word);
        self.metrics.record_remove(removed, self.filter.len());

        if !removed {
            log_event!(warn, SUBSYSTEM, "Word is not in the filter", word = word);
            return Ok(false);
        }

        info!(
            word = word,
            survivors = self.filter.len(),
            bits_set = self.filter.bits_set(),
            "Removed word and rebuilt bit array"
        );

        self.record(
            OperationPayload::Remove {
                word: word.to_owned(),
                filter_state: self.filter.snapshot(),
            },
            format!("Removed word \"{}\" from the filter", word),
        );
        Ok(true)
    }

    fn reset_filter(&mut self) {
        self.filter.reset();
        self.metrics.record_reset();
        info!(capacity = self.filter.capacity(), "Reset filter");

        self.record(
            OperationPayload::Reset {
                filter_state: self.filter.snapshot(),
            },
            "Reset Bloom Filter".to_string(),
        );
    }

    fn update_params(&mut self, capacity: i64, hash_count: i64) -> ParamUpdate {
        let ClampedParams { params, adjustment } = FilterParams::clamp(capacity, hash_count);

        if adjustment.is_adjusted() {
            log_event!(
                warn,
                SUBSYSTEM,
                "Requested parameters adjusted into range",
                requested_capacity = capacity,
                requested_hash_count = hash_count,
                capacity = params.capacity,
                hash_count = params.hash_count
            );
        }

        let previous_members = self.filter.apply_params(params);
        self.metrics.record_param_update(previous_members.len());

        info!(
            capacity = params.capacity,
            hash_count = params.hash_count,
            members = previous_members.len(),
            "Updated filter parameters"
        );

        self.record(
            OperationPayload::Update {
                filter_state: self.filter.snapshot(),
                previous_members: previous_members.clone(),
                requested_capacity: adjustment.requested_capacity,
                requested_hash_count: adjustment.requested_hash_count,
            },
            format!(
                "Updated filter parameters to size={}, hash functions={}",
                params.capacity, params.hash_count
            ),
        );

        ParamUpdate {
            applied: params,
            adjustment,
            previous_members,
        }
    }

    fn hash_positions(&self, word: &str) -> Vec<usize> {
        self.filter.hash_positions(word.trim())
    }

    fn snapshot(&self) -> FilterSnapshot {
        self.filter.snapshot()
    }

    fn history(&self) -> Vec<HistoryEntry> {
        self.history.get_history()
    }

    fn replay_last(&self) -> Option<HistoryEntry> {
        self.history.latest().cloned()
    }

    fn replay_entry(&self, id: &str) -> Result<HistoryEntry, SessionError> {
        self.history
            .get_entry(id)
            .cloned()
            .ok_or_else(|| SessionError::EntryNotFound(id.to_owned()))
    }

    fn restore_entry(&mut self, id: &str) -> Result<FilterSnapshot, SessionError> {
        let _span = subsystem_span!("restore_entry", subsystem = SUBSYSTEM, id = id).entered();

        let snapshot = self
            .history
            .get_entry(id)
            .map(|entry| entry.filter_state().clone())
            .ok_or_else(|| SessionError::EntryNotFound(id.to_owned()))?;

        self.filter = BloomFilter::from_snapshot(&snapshot)?;
        info!(
            capacity = snapshot.capacity,
            hash_count = snapshot.hash_count,
            members = snapshot.members.len(),
            "Restored filter from history"
        );
        Ok(snapshot)
    }

    fn clear_history(&mut self) {
        let dropped = self.history.len();
        self.history.clear_history();
        info!(dropped = dropped, "Cleared history");
    }
}
