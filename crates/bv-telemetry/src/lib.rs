//! # BV Telemetry
//!
//! Logging setup shared by the Bloom Visualizer binaries.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bv_telemetry::{init_logging, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = TelemetryConfig::from_env();
//!     init_logging(&config)?;
//!
//!     // Application code here
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `BV_SERVICE_NAME` | `bloom-visualizer` | Service name in startup logs |
//! | `BV_LOG_LEVEL` | `info` | Log level filter (falls back to `RUST_LOG`) |
//! | `BV_JSON_LOGS` | `false` | Emit JSON logs |
//! | `NO_COLOR` | unset | Disable ANSI colours |

mod config;
mod logging;

pub use config::TelemetryConfig;
pub use logging::{build_filter, init_logging};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Failed to initialize tracing subscriber: {0}")]
    SubscriberInit(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Convenience macro for creating a span with subsystem context.
///
/// # Example
///
/// ```rust,ignore
/// use bv_telemetry::subsystem_span;
///
/// fn replay() {
///     let _span = subsystem_span!("replay", subsystem = "session", entries = 12).entered();
/// }
/// ```
#[macro_export]
macro_rules! subsystem_span {
    ($name:expr, $($field:tt)*) => {
        tracing::info_span!($name, $($field)*)
    };
}
