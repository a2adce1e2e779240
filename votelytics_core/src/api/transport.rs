//! HTTP transport seam
//!
//! The client talks to the backend through the [`Transport`] trait so tests
//! can substitute canned responses. Retry and timeout policy beyond the
//! per-request timeout is delegated to `reqwest`.

use crate::error::{ApiError, ConfigError, Result};
use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;

/// One GET against the backend, returning the decoded JSON body
#[async_trait]
pub trait Transport: Send + Sync {
    /// `path` is relative to the API root (e.g. `/constituencies/`);
    /// `query` is appended as query parameters.
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value>;
}

/// `reqwest`-backed transport
pub struct HttpTransport {
    client: reqwest::Client,
    base_url: String,
}

impl HttpTransport {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ConfigError::Invalid(format!("failed to build HTTP client: {e}")))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ConfigError::Invalid("api_base_url is empty".to_string()).into());
        }

        Ok(Self { client, base_url })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await
            .map_err(|e| ApiError::Request {
                path: path.to_string(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                path: path.to_string(),
                detail: extract_detail(&body),
            }
            .into());
        }

        response.json().await.map_err(|e| {
            ApiError::Request {
                path: path.to_string(),
                source: e,
            }
            .into()
        })
    }
}

/// The backend wraps error messages as `{"detail": "..."}`; fall back to
/// the raw body when it doesn't.
fn extract_detail(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| {
            if body.is_empty() {
                "<no body>".to_string()
            } else {
                body.to_string()
            }
        })
}
