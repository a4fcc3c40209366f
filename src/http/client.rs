use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_TYPE};
use reqwest::{Client, Method};
use serde_json::Value;

use crate::config::{build_auth_header, ApiConfig};
use crate::http::error::ApiError;
use crate::http::transport::Transport;

/// reqwest-backed [`Transport`] rooted at the configured API prefix.
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some((name, value)) = build_auth_header(config) {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| ApiError::InvalidClient(e.to_string()))?;
            let mut value = HeaderValue::from_str(&value)
                .map_err(|e| ApiError::InvalidClient(format!("invalid api_key: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(name, value);
        }

        let client = Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds.into()))
            .build()
            .map_err(|e| ApiError::InvalidClient(e.to_string()))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a path relative to the API prefix.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send(&self, method: Method, path: &str, body: Option<&Value>) -> Result<Value, ApiError> {
        let url = self.url(path);
        tracing::debug!(method = %method, url = %url, "Starting request");

        let mut builder = self.client.request(method.clone(), &url);
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!(method = %method, url = %url, error = %e, "Request failed to connect");
            ApiError::ConnectionError {
                url: url.clone(),
                source: e,
            }
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| ApiError::BodyError {
            url: url.clone(),
            source: e,
        })?;

        if !status.is_success() {
            tracing::error!(
                method = %method,
                url = %url,
                status = status.as_u16(),
                "Error response from API"
            );
            return Err(ApiError::StatusError {
                url,
                status: status.as_u16(),
                body: text,
            });
        }

        Ok(parse_body(&url, &text))
    }
}

/// Decodes a response body, degrading to `Null` for empty or non-JSON bodies.
fn parse_body(url: &str, text: &str) -> Value {
    if text.trim().is_empty() {
        return Value::Null;
    }
    match serde_json::from_str(text) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(url = %url, error = %e, "Response body is not JSON");
            Value::Null
        }
    }
}

#[async_trait]
impl Transport for ApiClient {
    async fn get(&self, path: &str) -> Result<Value, ApiError> {
        self.send(Method::GET, path, None).await
    }

    async fn post(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.send(Method::POST, path, Some(body)).await
    }

    async fn patch(&self, path: &str, body: &Value) -> Result<Value, ApiError> {
        self.send(Method::PATCH, path, Some(body)).await
    }

    async fn delete(&self, path: &str) -> Result<Value, ApiError> {
        self.send(Method::DELETE, path, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(&ApiConfig {
            base_url: base.to_string(),
            ..ApiConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn url_joins_prefix_and_path_with_single_slash() {
        let api = client("https://cms.example.com/api/");
        assert_eq!(api.base_url(), "https://cms.example.com/api");
        assert_eq!(api.url("skills"), "https://cms.example.com/api/skills");
        assert_eq!(api.url("/skills/7"), "https://cms.example.com/api/skills/7");
    }

    #[test]
    fn parse_body_degrades_to_null() {
        assert_eq!(parse_body("u", ""), Value::Null);
        assert_eq!(parse_body("u", "  \n"), Value::Null);
        assert_eq!(parse_body("u", "<html>oops</html>"), Value::Null);
        assert_eq!(parse_body("u", r#"{"ok":true}"#), json!({"ok": true}));
    }

    #[test]
    fn api_key_with_newline_is_rejected() {
        let result = ApiClient::new(&ApiConfig {
            api_key: Some("bad\nkey".to_string()),
            ..ApiConfig::default()
        });
        assert!(matches!(result, Err(ApiError::InvalidClient(_))));
    }
}
