//! HTTP implementation of [`Backend`] on top of reqwest.

use anyhow::Result;
use async_trait::async_trait;
use hyper::ext::ReasonPhrase;
use reqwest::{Client, Response};
use serde_json::Value;
use tracing::debug;

use super::{Backend, RequestError};

/// Talks JSON to the backend at `base_url`.
///
/// No timeout is set: a request that never completes leaves its caller
/// suspended.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a new backend client.
    ///
    /// # Arguments
    /// * `base_url` - Base URL of the backend (e.g., "http://localhost:8080")
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Create a backend client around an existing reqwest client.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn read_json(response: Response) -> Result<Value, RequestError> {
        let status = response.status();
        if !status.is_success() {
            // hyper only keeps the phrase when it differs from the canonical one.
            let reason = response
                .extensions()
                .get::<ReasonPhrase>()
                .and_then(|phrase| std::str::from_utf8(phrase.as_bytes()).ok());
            return Err(RequestError::http_with_reason(status, reason));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| RequestError::Decode(e.to_string()))
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn get_json(&self, path: &str) -> Result<Value, RequestError> {
        let url = self.url(path);
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        debug!("GET {} -> {}", url, response.status());
        Self::read_json(response).await
    }

    async fn post_json(&self, path: &str, body: &Value) -> Result<Value, RequestError> {
        let url = self.url(path);
        debug!("POST {}", url);
        let response = self.client.post(&url).json(body).send().await?;
        debug!("POST {} -> {}", url, response.status());
        Self::read_json(response).await
    }
}
