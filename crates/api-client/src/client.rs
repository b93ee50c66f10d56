//! Main API client implementation

use crate::config::ClientConfig;
use crate::endpoints::{
    AiApi, FavoritesApi, HealthApi, MealsApi, PlansApi, ShoppingApi, StatisticsApi,
};
use crate::error::{ApiError, ApiResult};
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, instrument};
use uuid::Uuid;

/// Request correlation ID header
const X_REQUEST_ID: &str = "X-Request-ID";

/// JowAfrique backend client
///
/// Cheap to clone: clones share the connection pool and configuration.
/// Every request carries a JSON content type and a fresh `X-Request-ID`.
/// Requests are tried once; there is no retry layer.
#[derive(Clone)]
pub struct JowClient {
    inner: Client,
    config: Arc<ClientConfig>,
}

impl JowClient {
    /// Create a new client with default configuration from environment
    pub fn new() -> ApiResult<Self> {
        let config = ClientConfig::from_env()?;
        Self::with_config(config)
    }

    /// Create a new client with specific configuration
    pub fn with_config(config: ClientConfig) -> ApiResult<Self> {
        config.validate()?;

        let mut default_headers = HeaderMap::new();
        default_headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|e| ApiError::config(format!("invalid user agent: {e}")))?;
        default_headers.insert(USER_AGENT, user_agent);

        let inner = Client::builder()
            .timeout(config.timeout)
            .default_headers(default_headers)
            .build()
            .map_err(ApiError::Request)?;

        Ok(Self {
            inner,
            config: Arc::new(config),
        })
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Get the base URL
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    // -------------------------------------------------------------------------
    // Endpoint API accessors
    // -------------------------------------------------------------------------

    /// Access weekly plan endpoints
    #[must_use]
    pub fn plans(&self) -> PlansApi {
        PlansApi::new(self.clone())
    }

    /// Access meal endpoints
    #[must_use]
    pub fn meals(&self) -> MealsApi {
        MealsApi::new(self.clone())
    }

    /// Access favorite endpoints
    #[must_use]
    pub fn favorites(&self) -> FavoritesApi {
        FavoritesApi::new(self.clone())
    }

    /// Access the statistics endpoint
    #[must_use]
    pub fn statistics(&self) -> StatisticsApi {
        StatisticsApi::new(self.clone())
    }

    /// Access the shopping list endpoint
    #[must_use]
    pub fn shopping(&self) -> ShoppingApi {
        ShoppingApi::new(self.clone())
    }

    /// Access AI feature endpoints
    #[must_use]
    pub fn ai(&self) -> AiApi {
        AiApi::new(self.clone())
    }

    /// Access the health check endpoint
    #[must_use]
    pub fn health(&self) -> HealthApi {
        HealthApi::new(self.clone())
    }

    // -------------------------------------------------------------------------
    // Low-level HTTP methods
    // -------------------------------------------------------------------------

    /// Perform a GET request and decode the JSON body
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self.execute(Method::GET, path, Option::<&()>::None).await?;
        decode(response).await
    }

    /// Perform a POST request and decode the JSON body
    pub async fn post<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self.execute(Method::POST, path, Some(body)).await?;
        decode(response).await
    }

    /// Perform a POST request without body, ignoring the response body
    pub async fn post_empty(&self, path: &str) -> ApiResult<()> {
        self.execute(Method::POST, path, Option::<&()>::None)
            .await
            .map(drop)
    }

    /// Perform a PUT request and decode the JSON body
    pub async fn put<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let response = self.execute(Method::PUT, path, Some(body)).await?;
        decode(response).await
    }

    /// Perform a DELETE request, ignoring the response body
    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        self.execute(Method::DELETE, path, Option::<&()>::None)
            .await
            .map(drop)
    }

    /// GET with timing information
    pub async fn timed_get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<(T, Duration)> {
        let start = Instant::now();
        let result = self.get(path).await?;
        Ok((result, start.elapsed()))
    }

    /// Send a single request and return the response once its status is 2xx
    #[instrument(skip(self, body), fields(request_id = tracing::field::Empty))]
    async fn execute<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> ApiResult<Response> {
        let request_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("request_id", request_id.as_str());

        let url = self.config.url(path);
        let url = reqwest::Url::parse(&url)
            .map_err(|e| ApiError::InvalidUrl(format!("{url}: {e}")))?;
        let mut request = self
            .inner
            .request(method.clone(), url)
            .header(X_REQUEST_ID, &request_id);
        if let Some(b) = body {
            request = request.json(b);
        }

        let start = Instant::now();
        let result = request.send().await;
        let elapsed = start.elapsed();

        let response = match result {
            Ok(response) => response,
            Err(e) if e.is_timeout() => {
                debug!(
                    request_id = %request_id,
                    elapsed_ms = elapsed.as_millis(),
                    "Request timed out"
                );
                return Err(ApiError::Timeout(self.config.timeout));
            }
            Err(e) => {
                debug!(
                    request_id = %request_id,
                    error = %e,
                    "Request failed"
                );
                return Err(ApiError::Request(e));
            }
        };

        debug!(
            request_id = %request_id,
            %method,
            path = %path,
            status = response.status().as_u16(),
            elapsed_ms = elapsed.as_millis(),
            "Request completed"
        );

        handle_status(response).await
    }
}

/// Turn a non-2xx response into [`ApiError::ApiResponse`]
async fn handle_status(response: Response) -> ApiResult<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .text()
        .await
        .ok()
        .and_then(|body| error_message(&body));
    Err(ApiError::api_response(status.as_u16(), message))
}

/// Decode a JSON body
async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

/// Extract the `message` (or `error`) field of a JSON error body
fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .find_map(|key| value.get(key).and_then(serde_json::Value::as_str))
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            error_message(r#"{"error": "Plan non trouvé"}"#).as_deref(),
            Some("Plan non trouvé")
        );
        assert_eq!(
            error_message(r#"{"message": "Données invalides", "error": "bad"}"#).as_deref(),
            Some("Données invalides")
        );
        assert_eq!(error_message(r#"{"error": 42}"#), None);
        assert_eq!(error_message("<html>Internal Server Error</html>"), None);
        assert_eq!(error_message(""), None);
    }

    #[test]
    fn test_client_creation() {
        let client = JowClient::with_config(ClientConfig::default());
        assert!(client.is_ok());
    }

    #[test]
    fn test_client_rejects_invalid_config() {
        let config = ClientConfig::default().with_base_url("ftp://localhost");
        assert!(matches!(
            JowClient::with_config(config),
            Err(ApiError::Config(_))
        ));
    }
}
