//! HTTP plumbing shared by every remote operation.

use crate::error::{ApiError, Result};
use reqwest::{Client, Method, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use std::sync::OnceLock;

/// Default origin of the Taskwell backend.
const DEFAULT_BASE_URL: &str = "http://localhost:8080";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Origin the API lives on, without a trailing slash.
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// HTTP client for the Taskwell API.
///
/// Cheap to clone; all user and task operations hang off this type. On
/// wasm every request carries cookie credentials so the session survives
/// cross-origin calls.
#[derive(Debug, Clone)]
pub struct TaskwellClient {
    http: Client,
    base_url: String,
}

impl TaskwellClient {
    /// Create a client against the default origin.
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client with a custom configuration.
    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            http: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!("{}{}", self.base_url, path))?)
    }

    /// Build a request with session credentials attached.
    pub(crate) fn request(&self, method: Method, path: &str) -> Result<RequestBuilder> {
        let builder = self.http.request(method, self.endpoint(path)?);
        Ok(with_credentials(builder))
    }

    /// Send a request and decode a JSON body, mapping non-success statuses
    /// to [`ApiError::Status`] carrying the response body text.
    pub(crate) async fn send_json<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        fallback: &str,
    ) -> Result<T> {
        let body = self.send_text(builder, fallback).await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Send a request, discarding any success body.
    pub(crate) async fn send_unit(&self, builder: RequestBuilder, fallback: &str) -> Result<()> {
        self.send_text(builder, fallback).await.map(|_| ())
    }

    async fn send_text(&self, builder: RequestBuilder, fallback: &str) -> Result<String> {
        let response = builder.send().await?;
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), "request rejected");
            return Err(ApiError::status(status, body, fallback));
        }
        Ok(body)
    }
}

impl Default for TaskwellClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Cookie credentials ride along automatically in the browser build.
fn with_credentials(builder: RequestBuilder) -> RequestBuilder {
    #[cfg(target_arch = "wasm32")]
    {
        builder.fetch_credentials_include()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        builder
    }
}

/// Process-wide client instance used by views and widgets.
pub fn client() -> &'static TaskwellClient {
    static CLIENT: OnceLock<TaskwellClient> = OnceLock::new();
    CLIENT.get_or_init(TaskwellClient::new)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_points_at_localhost() {
        let client = TaskwellClient::new();
        assert_eq!(client.base_url(), "http://localhost:8080");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = TaskwellClient::with_config(ClientConfig {
            base_url: "https://tasks.example.com/".into(),
        });
        assert_eq!(client.base_url(), "https://tasks.example.com");
        let url = client.endpoint("/api/tasks").unwrap();
        assert_eq!(url.as_str(), "https://tasks.example.com/api/tasks");
    }

    #[test]
    fn garbage_base_url_is_rejected_per_request() {
        let client = TaskwellClient::with_config(ClientConfig {
            base_url: "not a url".into(),
        });
        assert!(matches!(
            client.endpoint("/api/tasks"),
            Err(ApiError::UrlParse(_))
        ));
    }
}
