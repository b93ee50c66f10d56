//! Structured logging and timing for the jowafrique tools
//!
//! - Subscriber setup from the `[logging]` configuration section
//! - A per-process session id for correlating log lines
//! - Operation timers

use jowafrique_core::config::{LogFormat, LoggingConfig};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use uuid::Uuid;

/// Global session ID for correlating logs
static SESSION_ID: Lazy<String> = Lazy::new(|| Uuid::new_v4().to_string());

/// Initialize with custom configuration
///
/// `RUST_LOG` takes precedence over the configured level. Log lines go to
/// stderr so command output on stdout stays machine readable.
pub fn init_with_config(config: TelemetryConfig) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .map_err(|e| anyhow::anyhow!("Invalid log filter '{}': {}", config.log_level, e))?;

    let registry = tracing_subscriber::registry().with(filter);
    let result = match config.format {
        LogFormat::Compact => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(config.show_target)
                    .with_thread_ids(config.show_thread_ids)
                    .compact(),
            )
            .try_init(),
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(config.show_target)
                    .json(),
            )
            .try_init(),
    };
    result.map_err(|e| anyhow::anyhow!("Failed to set tracing subscriber: {}", e))?;

    tracing::debug!(
        session_id = %session_id(),
        version = env!("CARGO_PKG_VERSION"),
        "Telemetry initialized"
    );

    Ok(())
}

/// Get the current session ID
pub fn session_id() -> &'static str {
    &SESSION_ID
}

/// Telemetry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryConfig {
    pub log_level: String,
    pub format: LogFormat,
    pub show_target: bool,
    pub show_thread_ids: bool,
}

impl TelemetryConfig {
    /// Raise the level to `debug` (one `-v`) or `trace` (two or more).
    #[must_use]
    pub fn with_verbosity(mut self, verbose: u8) -> Self {
        match verbose {
            0 => {}
            1 => self.log_level = "debug".to_string(),
            _ => self.log_level = "trace".to_string(),
        }
        self
    }
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: "warn".to_string(),
            format: LogFormat::Compact,
            show_target: false,
            show_thread_ids: false,
        }
    }
}

impl From<&LoggingConfig> for TelemetryConfig {
    fn from(logging: &LoggingConfig) -> Self {
        Self {
            log_level: logging.level.clone(),
            format: logging.format,
            ..Self::default()
        }
    }
}

/// Timer for measuring operation duration
pub struct Timer {
    name: String,
    start: Instant,
}

impl Timer {
    /// Start a new timer
    pub fn start(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            start: Instant::now(),
        }
    }

    /// Time elapsed so far
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Stop the timer and log the duration
    pub fn stop(self) -> Duration {
        let duration = self.start.elapsed();
        tracing::debug!(
            operation = %self.name,
            duration_ms = duration.as_millis(),
            "Timer completed"
        );
        duration
    }
}
