//! Error types for the search crate.

use thiserror::Error;

/// Result type alias for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

/// Errors that can occur while configuring a search.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// Options outside their allowed range
    #[error("Invalid search options: {0}")]
    InvalidOptions(String),
}
