//! Telemetry configuration from environment variables.

use std::env;

/// Configuration for logging output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// Service name attached to startup logs
    pub service_name: String,

    /// Log level filter (trace, debug, info, warn, error) or a full
    /// `EnvFilter` directive such as `bv_03_session=debug`
    pub log_level: String,

    /// Whether to emit JSON formatted logs
    pub json_logs: bool,

    /// Whether to use ANSI colours in pretty output
    pub ansi: bool,
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            service_name: "bloom-visualizer".to_string(),
            log_level: "info".to_string(),
            json_logs: false,
            ansi: true,
        }
    }
}

impl TelemetryConfig {
    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `BV_SERVICE_NAME`: Service name (default: bloom-visualizer)
    /// - `BV_LOG_LEVEL` or `RUST_LOG`: Log level (default: info)
    /// - `BV_JSON_LOGS`: Enable JSON logs (default: false)
    /// - `NO_COLOR`: Disable ANSI colours when set
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup. `from_env` passes the process
    /// environment.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            service_name: lookup("BV_SERVICE_NAME").unwrap_or(defaults.service_name),

            log_level: lookup("BV_LOG_LEVEL")
                .or_else(|| lookup("RUST_LOG"))
                .unwrap_or(defaults.log_level),

            json_logs: lookup("BV_JSON_LOGS")
                .map(|v| v.to_lowercase() == "true" || v == "1")
                .unwrap_or(defaults.json_logs),

            ansi: lookup("NO_COLOR").is_none(),
        }
    }

    /// Builder-style method to force JSON output
    pub fn with_json_logs(mut self, json_logs: bool) -> Self {
        self.json_logs = json_logs;
        self
    }

    /// Builder-style method to set the log level
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }
}
