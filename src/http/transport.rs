//! Seam between resource managers and the network.

use async_trait::async_trait;
use serde_json::Value;

use super::error::ApiError;

/// JSON-over-HTTP operations a resource manager needs.
///
/// Paths are relative to the API base (e.g. `"skills"` or `"skills/7"`).
/// Implementations decode the response body to a JSON value; a body that is
/// empty or not JSON is returned as `Value::Null`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self, path: &str) -> Result<Value, ApiError>;

    async fn post(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    async fn patch(&self, path: &str, body: &Value) -> Result<Value, ApiError>;

    async fn delete(&self, path: &str) -> Result<Value, ApiError>;
}
