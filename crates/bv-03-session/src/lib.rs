//! # Session Subsystem
//!
//! Couples the filter engine with the history log: each user operation runs
//! against the engine and its outcome is recorded together with a snapshot of
//! the filter.
//!
//! ## Architecture
//!
//! - `ports` - [`VisualizerApi`], the driving port a front end calls
//! - `service` - [`VisualizerSession`] and the thread-safe [`SharedSession`]
//! - `metrics` - operation counters
//! - `config` - startup parameters from code or environment
//!
//! ## Example
//!
//! ```
//! use bv_03_session::{VisualizerApi, VisualizerSession, Verdict};
//!
//! let mut session = VisualizerSession::default();
//! session.add_word("apple").unwrap();
//!
//! let result = session.check_word("apple").unwrap();
//! assert_eq!(result.verdict, Verdict::Present);
//! assert_eq!(session.history().len(), 2);
//! ```

pub mod config;
pub mod error;
pub mod metrics;
pub mod ports;
pub mod service;

pub use config::{SessionConfig, SessionConfigBuilder};
pub use error::SessionError;
pub use metrics::{MetricsRecorder, MetricsSnapshot, NoOpMetrics, SessionMetrics};
pub use ports::{CheckResult, ParamUpdate, Verdict, VisualizerApi};
pub use service::{SharedSession, VisualizerSession};
