//! Health check endpoint

use crate::client::JowClient;
use crate::envelope::{ApiResponse, Endpoint};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Health check API interface
#[derive(Clone)]
pub struct HealthApi {
    client: JowClient,
}

impl HealthApi {
    /// Create a new health API interface
    pub(crate) fn new(client: JowClient) -> Self {
        Self { client }
    }

    /// `GET /api/health`
    pub async fn check(&self) -> ApiResponse<HealthResponse> {
        ApiResponse::from_result(Endpoint::Health, self.client.get("api/health").await)
    }

    /// Check health with timing information
    pub async fn check_timed(&self) -> ApiResponse<(HealthResponse, Duration)> {
        ApiResponse::from_result(Endpoint::Health, self.client.timed_get("api/health").await)
    }
}

/// Health check response from the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Backend version
    #[serde(default)]
    pub version: String,
    /// Timestamp of the health check
    #[serde(default)]
    pub timestamp: String,
}

impl HealthResponse {
    /// Whether the backend reports itself healthy
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        matches!(self.status.as_str(), "healthy" | "ok")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_deserialize() {
        let json = r#"{
            "status": "healthy",
            "timestamp": "2024-03-18T12:00:00.123456",
            "version": "2.0"
        }"#;

        let response: HealthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.version, "2.0");
        assert!(response.is_healthy());
    }

    #[test]
    fn test_unhealthy_status() {
        let response: HealthResponse = serde_json::from_str(r#"{"status": "degraded"}"#).unwrap();
        assert!(!response.is_healthy());
        assert!(response.version.is_empty());
    }
}
