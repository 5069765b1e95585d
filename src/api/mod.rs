//! Request helpers: the only point of contact with the backend.

mod client;
mod error;

pub use client::HttpBackend;
pub use error::RequestError;

use async_trait::async_trait;
use serde_json::Value;

/// JSON-over-HTTP access to the backend.
///
/// Both calls treat any non-2xx status as [`RequestError::Http`] and decode a
/// successful body as JSON. `path` is relative to the backend base URL and
/// may carry a query string.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Backend: Send + Sync {
    async fn get_json(&self, path: &str) -> Result<Value, RequestError>;

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, RequestError>;
}
