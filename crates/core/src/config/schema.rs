//! Configuration schema definitions

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Root configuration schema
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigSchema {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub search: SearchConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl ConfigSchema {
    /// Check value ranges that serde cannot express
    pub fn validate(&self) -> Result<()> {
        if self.api.timeout_secs == 0 {
            return Err(Error::invalid_config_value("api.timeout_secs", "must be > 0"));
        }
        for (key, value) in [
            ("search.meal_threshold", self.search.meal_threshold),
            ("search.plan_threshold", self.search.plan_threshold),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::invalid_config_value(key, "must be within 0.0..=1.0"));
            }
        }
        Ok(())
    }
}

/// Backend connection settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Backend origin, without the `/api` suffix
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Local search settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Quiet period before a query change is scored
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Minimum score for meal results
    #[serde(default = "default_meal_threshold")]
    pub meal_threshold: f64,

    /// Minimum score for plan results
    #[serde(default = "default_plan_threshold")]
    pub plan_threshold: f64,

    /// Queries shorter than this are not scored
    #[serde(default = "default_min_match_char_length")]
    pub min_match_char_length: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            meal_threshold: default_meal_threshold(),
            plan_threshold: default_plan_threshold(),
            min_match_char_length: default_min_match_char_length(),
        }
    }
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_meal_threshold() -> f64 {
    0.3
}

fn default_plan_threshold() -> f64 {
    0.4
}

fn default_min_match_char_length() -> usize {
    2
}

/// Log output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    #[serde(default = "default_level")]
    pub level: String,

    /// Output format
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_level() -> String {
    "info".to_string()
}

/// Log line format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Single-line human readable output
    #[default]
    Compact,
    /// One JSON object per line
    Json,
}
