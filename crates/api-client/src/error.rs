//! Error types for the API client

use thiserror::Error;

/// Result type alias for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// API client errors
#[derive(Error, Debug)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// JSON serialization/deserialization failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// API returned a non-2xx response
    #[error("API error ({status}): {}", message.as_deref().unwrap_or("no message"))]
    ApiResponse {
        /// HTTP status code
        status: u16,
        /// `message` or `error` field of a JSON error body, if any
        message: Option<String>,
    },

    /// Request timeout
    #[error("Request timeout after {0:?}")]
    Timeout(std::time::Duration),

    /// Invalid URL
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an API response error
    pub fn api_response(status: u16, message: Option<String>) -> Self {
        Self::ApiResponse { status, message }
    }

    /// Check if the backend could not be reached at all
    #[must_use]
    pub fn is_connectivity(&self) -> bool {
        match self {
            Self::Request(e) => e.is_connect(),
            _ => false,
        }
    }

    /// Check if this is a client error (4xx)
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::ApiResponse { status, .. } if (400..500).contains(status))
    }

    /// Check if this is a server error (5xx)
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::ApiResponse { status, .. } if *status >= 500)
    }

    /// Message carried by a structured error body
    #[must_use]
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::ApiResponse {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => Some(message),
            _ => None,
        }
    }
}
