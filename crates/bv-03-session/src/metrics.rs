//! Metrics hooks for session operations
//!
//! Counts what the user did to the filter: inserts, removals (each one a full
//! rebuild), checks and the false positives they surfaced.
//!
//! ## Usage
//!
//! ```ignore
//! use bv_03_session::metrics::{SessionMetrics, MetricsRecorder};
//!
//! let metrics = SessionMetrics::new();
//! metrics.record_insert(true);
//! metrics.record_check(true, false);
//! assert_eq!(metrics.snapshot().false_positives, 1);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;

/// Counters for session operations
///
/// Thread-safe so one recorder can be shared between sessions.
#[derive(Default, Debug)]
pub struct SessionMetrics {
    /// Successful inserts
    pub inserts: AtomicU64,
    /// Inserts rejected because the word was already a member
    pub duplicate_inserts: AtomicU64,
    /// Successful removals
    pub removals: AtomicU64,
    /// Removals of words that were not members
    pub missed_removals: AtomicU64,
    /// Membership checks
    pub checks: AtomicU64,
    /// Checks where might_contain was true for a non-member
    pub false_positives: AtomicU64,
    /// Filter resets
    pub resets: AtomicU64,
    /// Parameter updates
    pub param_updates: AtomicU64,
    /// Bit array rebuilds (removals and parameter updates)
    pub rebuilds: AtomicU64,
    /// Keys hashed back in during rebuilds
    pub keys_rehashed: AtomicU64,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an insert attempt
    pub fn record_insert(&self, inserted: bool) {
        if inserted {
            self.inserts.fetch_add(1, Ordering::Relaxed);
        } else {
            self.duplicate_inserts.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a removal attempt
    ///
    /// # Arguments
    /// * `removed` - Whether the word was a member
    /// * `survivors` - Members hashed back in by the rebuild
    pub fn record_remove(&self, removed: bool, survivors: usize) {
        if removed {
            self.removals.fetch_add(1, Ordering::Relaxed);
            self.record_rebuild(survivors);
        } else {
            self.missed_removals.fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Record a membership check
    pub fn record_check(&self, might_contain: bool, definitely_contains: bool) {
        self.checks.fetch_add(1, Ordering::Relaxed);
        if might_contain && !definitely_contains {
            self.false_positives.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_reset(&self) {
        self.resets.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a parameter change that re-inserted `members` keys
    pub fn record_param_update(&self, members: usize) {
        self.param_updates.fetch_add(1, Ordering::Relaxed);
        self.record_rebuild(members);
    }

    fn record_rebuild(&self, keys: usize) {
        self.rebuilds.fetch_add(1, Ordering::Relaxed);
        self.keys_rehashed.fetch_add(keys as u64, Ordering::Relaxed);
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            inserts: self.inserts.load(Ordering::Relaxed),
            duplicate_inserts: self.duplicate_inserts.load(Ordering::Relaxed),
            removals: self.removals.load(Ordering::Relaxed),
            missed_removals: self.missed_removals.load(Ordering::Relaxed),
            checks: self.checks.load(Ordering::Relaxed),
            false_positives: self.false_positives.load(Ordering::Relaxed),
            resets: self.resets.load(Ordering::Relaxed),
            param_updates: self.param_updates.load(Ordering::Relaxed),
            rebuilds: self.rebuilds.load(Ordering::Relaxed),
            keys_rehashed: self.keys_rehashed.load(Ordering::Relaxed),
        }
    }

    /// Share of checks that hit a false positive
    pub fn observed_false_positive_rate(&self) -> f64 {
        let checks = self.checks.load(Ordering::Relaxed);
        let fp = self.false_positives.load(Ordering::Relaxed);
        if checks > 0 {
            fp as f64 / checks as f64
        } else {
            0.0
        }
    }

    /// Reset all counters
    pub fn reset(&self) {
        for counter in [
            &self.inserts,
            &self.duplicate_inserts,
            &self.removals,
            &self.missed_removals,
            &self.checks,
            &self.false_positives,
            &self.resets,
            &self.param_updates,
            &self.rebuilds,
            &self.keys_rehashed,
        ] {
            counter.store(0, Ordering::Relaxed);
        }
    }
}

/// Point-in-time metrics snapshot
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct MetricsSnapshot {
    pub inserts: u64,
    pub duplicate_inserts: u64,
    pub removals: u64,
    pub missed_removals: u64,
    pub checks: u64,
    pub false_positives: u64,
    pub resets: u64,
    pub param_updates: u64,
    pub rebuilds: u64,
    pub keys_rehashed: u64,
}

/// Trait for custom metrics recording implementations
pub trait MetricsRecorder: Send + Sync {
    fn record_insert(&self, inserted: bool);
    fn record_remove(&self, removed: bool, survivors: usize);
    fn record_check(&self, might_contain: bool, definitely_contains: bool);
    fn record_reset(&self);
    fn record_param_update(&self, members: usize);

    /// Current counters. Recorders that keep nothing return zeros.
    fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot::default()
    }
}

/// No-op metrics recorder for when metrics are disabled
#[derive(Default, Debug)]
pub struct NoOpMetrics;

impl MetricsRecorder for NoOpMetrics {
    fn record_insert(&self, _: bool) {}
    fn record_remove(&self, _: bool, _: usize) {}
    fn record_check(&self, _: bool, _: bool) {}
    fn record_reset(&self) {}
    fn record_param_update(&self, _: usize) {}
}

impl MetricsRecorder for SessionMetrics {
    fn record_insert(&self, inserted: bool) {
        SessionMetrics::record_insert(self, inserted);
    }

    fn record_remove(&self, removed: bool, survivors: usize) {
        SessionMetrics::record_remove(self, removed, survivors);
    }

    fn record_check(&self, might_contain: bool, definitely_contains: bool) {
        SessionMetrics::record_check(self, might_contain, definitely_contains);
    }

    fn record_reset(&self) {
        SessionMetrics::record_reset(self);
    }

    fn record_param_update(&self, members: usize) {
        SessionMetrics::record_param_update(self, members);
    }

    fn snapshot(&self) -> MetricsSnapshot {
        SessionMetrics::snapshot(self)
    }
}
