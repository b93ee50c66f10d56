//! Structured error handling with context and recovery suggestions
//!
//! Errors carry:
//! - A stable error code for programmatic handling
//! - Optional context describing what was being attempted
//! - An optional recovery suggestion shown to the user

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error codes for programmatic error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    // General errors (1xxx)
    Unknown = 1000,
    Internal = 1001,

    // IO errors (2xxx)
    IoError = 2000,
    FileNotFound = 2001,
    PermissionDenied = 2002,

    // Configuration errors (3xxx)
    ConfigError = 3000,
    ConfigNotFound = 3001,
    ConfigParseError = 3002,
    InvalidConfigValue = 3004,

    // Validation errors (6xxx)
    ValidationError = 6000,
    InvalidInput = 6001,
    InvalidFormat = 6002,
}

impl ErrorCode {
    /// Get the numeric code
    #[must_use]
    pub fn code(&self) -> u32 {
        *self as u32
    }

    /// Get a human-readable category
    #[must_use]
    pub fn category(&self) -> &'static str {
        match self.code() / 1000 {
            1 => "General",
            2 => "IO",
            3 => "Configuration",
            6 => "Validation",
            _ => "Unknown",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

/// Main error type with rich context
#[derive(Error, Debug)]
pub struct Error {
    /// Error code for programmatic handling
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
    /// Additional context
    pub context: Option<String>,
    /// Recovery suggestion
    pub suggestion: Option<String>,
    /// Source error
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        if let Some(ctx) = &self.context {
            write!(f, "\n  Context: {ctx}")?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, "\n  Suggestion: {suggestion}")?;
        }
        Ok(())
    }
}

impl Error {
    /// Create a new error
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: None,
            suggestion: None,
            source: None,
        }
    }

    /// Add context to the error
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// Add a recovery suggestion
    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    /// Add a source error
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Generic configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Configuration file that cannot be parsed
    pub fn config_parse(path: impl AsRef<std::path::Path>, detail: impl fmt::Display) -> Self {
        Self::new(
            ErrorCode::ConfigParseError,
            format!(
                "Failed to parse config file {}: {detail}",
                path.as_ref().display()
            ),
        )
        .with_suggestion("Check the TOML syntax of jowafrique.toml or pass --config explicitly")
    }

    /// Configuration value outside its allowed range
    pub fn invalid_config_value(key: &str, detail: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::InvalidConfigValue,
            format!("Invalid value for `{key}`: {}", detail.into()),
        )
    }

    /// Generic validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValidationError, message)
    }

    /// Malformed user input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        let code = match err.kind() {
            std::io::ErrorKind::NotFound => ErrorCode::FileNotFound,
            std::io::ErrorKind::PermissionDenied => ErrorCode::PermissionDenied,
            _ => ErrorCode::IoError,
        };
        Error::new(code, err.to_string()).with_source(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::new(ErrorCode::InvalidFormat, format!("JSON parse error: {err}")).with_source(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::new(ErrorCode::ConfigParseError, format!("TOML parse error: {err}"))
            .with_source(err)
    }
}

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Attach context to the error, if any
    fn context(self, context: impl Into<String>) -> Result<T>;
    /// Attach a recovery suggestion to the error, if any
    fn with_suggestion(self, suggestion: impl Into<String>) -> Result<T>;
}

impl<T> ResultExt<T> for Result<T> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_context(context))
    }

    fn with_suggestion(self, suggestion: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.with_suggestion(suggestion))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::FileNotFound.to_string(), "E2001");
        assert_eq!(ErrorCode::ConfigParseError.to_string(), "E3002");
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::IoError.category(), "IO");
        assert_eq!(ErrorCode::InvalidConfigValue.category(), "Configuration");
        assert_eq!(ErrorCode::InvalidInput.category(), "Validation");
    }

    #[test]
    fn test_config_parse_has_suggestion() {
        let err = Error::config_parse("jowafrique.toml", "expected `=`")
            .with_context("While loading configuration");

        assert_eq!(err.code, ErrorCode::ConfigParseError);
        assert!(err.context.is_some());
        assert!(err.suggestion.is_some());
        assert!(err.to_string().contains("jowafrique.toml"));
    }

    #[test]
    fn test_result_ext_context() {
        let result: Result<()> = Err(Error::invalid_input("rating must be 0-5"));
        let err = result.context("While rating a meal").unwrap_err();
        assert_eq!(err.context.as_deref(), Some("While rating a meal"));
    }
}
