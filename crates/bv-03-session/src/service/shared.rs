//! Thread-safe session handle
//!
//! One session per user. Clones share the same filter and history, and every
//! call runs with the lock held so an operation and its history entry land
//! together.

use std::sync::Arc;

use parking_lot::Mutex;
use shared_types::FilterSnapshot;

use bv_02_history_log::HistoryEntry;

use super::VisualizerSession;
use crate::config::SessionConfig;
use crate::error::SessionError;
use crate::metrics::MetricsSnapshot;
use crate::ports::{CheckResult, ParamUpdate, VisualizerApi};

/// Cloneable handle to a locked [`VisualizerSession`]
#[derive(Clone)]
pub struct SharedSession {
    inner: Arc<Mutex<VisualizerSession>>,
}

impl SharedSession {
    pub fn new(session: VisualizerSession) -> Self {
        Self {
            inner: Arc::new(Mutex::new(session)),
        }
    }

    pub fn from_config(config: &SessionConfig) -> Self {
        Self::new(VisualizerSession::new(config))
    }

    /// Run a closure with exclusive access to the session.
    pub fn with<R>(&self, f: impl FnOnce(&mut VisualizerSession) -> R) -> R {
        let mut guard = self.inner.lock();
        f(&mut guard)
    }

    pub fn add_word(&self, word: &str) -> Result<bool, SessionError> {
        self.inner.lock().add_word(word)
    }

    pub fn check_word(&self, word: &str) -> Result<CheckResult, SessionError> {
        self.inner.lock().check_word(word)
    }

    pub fn remove_word(&self, word: &str) -> Result<bool, SessionError> {
        self.inner.lock().remove_word(word)
    }

    pub fn reset_filter(&self) {
        self.inner.lock().reset_filter()
    }

    pub fn update_params(&self, capacity: i64, hash_count: i64) -> ParamUpdate {
        self.inner.lock().update_params(capacity, hash_count)
    }

    pub fn snapshot(&self) -> FilterSnapshot {
        self.inner.lock().snapshot()
    }

    pub fn history(&self) -> Vec<HistoryEntry> {
        self.inner.lock().history()
    }

    pub fn restore_entry(&self, id: &str) -> Result<FilterSnapshot, SessionError> {
        self.inner.lock().restore_entry(id)
    }

    pub fn metrics(&self) -> MetricsSnapshot {
        self.inner.lock().metrics()
    }
}

impl Default for SharedSession {
    fn default() -> Self {
        Self::new(VisualizerSession::default())
    }
}
