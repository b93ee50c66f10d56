//! Configuration for the JowAfrique API client
//!
//! Supports environment-based configuration with sensible defaults.

use crate::error::{ApiError, ApiResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;

/// Local development backend
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Client-side timeout applied to every request
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Origin of the backend, without the `/api` prefix
    pub base_url: String,
    /// Request timeout
    #[serde(with = "secs_serde")]
    pub timeout: Duration,
    /// Value of the `User-Agent` header
    pub user_agent: String,
}

mod secs_serde {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
            user_agent: format!("jowafrique-api-client/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Create configuration from environment variables
    ///
    /// Reads the following environment variables:
    /// - `JOWAFRIQUE_API_URL`: backend origin
    /// - `JOWAFRIQUE_TIMEOUT_SECS`: request timeout in seconds
    ///
    /// Unset or unparsable values fall back to the defaults.
    pub fn from_env() -> ApiResult<Self> {
        let mut config = Self::default();

        if let Ok(url) = env::var("JOWAFRIQUE_API_URL") {
            if !url.trim().is_empty() {
                config.base_url = url.trim().to_string();
            }
        }

        if let Some(timeout) = env::var("JOWAFRIQUE_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.trim().parse().ok())
            .map(Duration::from_secs)
        {
            config.timeout = timeout;
        }

        config.validate()?;
        Ok(config)
    }

    /// Builder-style method to set base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Builder-style method to set timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Builder-style method to set the user agent
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Full URL of an API path such as `api/plans`
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Validate the configuration
    pub fn validate(&self) -> ApiResult<()> {
        if self.base_url.is_empty() {
            return Err(ApiError::config("base_url cannot be empty"));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ApiError::config("base_url must start with http:// or https://"));
        }

        if self.timeout.is_zero() {
            return Err(ApiError::config("timeout cannot be zero"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:5000");
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("jowafrique-api-client/"));
    }

    #[test]
    fn test_builder_pattern() {
        let config = ClientConfig::default()
            .with_base_url("http://192.168.1.20:5000/")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.url("/api/plans"), "http://192.168.1.20:5000/api/plans");
        assert_eq!(config.url("api/plans"), "http://192.168.1.20:5000/api/plans");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_validation() {
        assert!(ClientConfig::default().validate().is_ok());
        assert!(ClientConfig::default().with_base_url("").validate().is_err());
        assert!(
            ClientConfig::default()
                .with_base_url("localhost:5000")
                .validate()
                .is_err()
        );
        assert!(
            ClientConfig::default()
                .with_timeout(Duration::ZERO)
                .validate()
                .is_err()
        );
    }

    #[test]
    fn test_timeout_serializes_as_seconds() {
        let value = serde_json::to_value(ClientConfig::default()).unwrap();
        assert_eq!(value["timeout"], 30);
    }
}
