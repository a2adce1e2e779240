//! Mock transports
//!
//! `MockTransport` serves canned JSON bodies keyed by request path and
//! records every call, so tests can assert that cache hits skipped the
//! network. `FailingTransport` refuses everything, for testing that a
//! warmed cache keeps working while the backend is down.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Mutex;
use votelytics_core::Transport;
use votelytics_core::error::{ApiError, Result};

/// Transport serving canned responses and counting calls
pub struct MockTransport {
    responses: Mutex<HashMap<String, Value>>,
    calls: Mutex<Vec<String>>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            responses: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Register the body returned for `path` (query parameters are ignored
    /// when matching)
    pub fn with_response(self, path: &str, body: Value) -> Self {
        self.responses
            .lock()
            .unwrap()
            .insert(path.to_string(), body);
        self
    }

    /// How many requests hit `path`
    pub fn calls_to(&self, path: &str) -> usize {
        self.calls.lock().unwrap().iter().filter(|p| *p == path).count()
    }

    /// Total requests across all paths
    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn get(&self, path: &str, _query: &[(String, String)]) -> Result<Value> {
        self.calls.lock().unwrap().push(path.to_string());

        self.responses
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| {
                ApiError::Status {
                    status: 404,
                    path: path.to_string(),
                    detail: "no canned response registered".to_string(),
                }
                .into()
            })
    }
}

/// Transport where every request fails, as if the backend were unreachable
pub struct FailingTransport;

#[async_trait]
impl Transport for FailingTransport {
    async fn get(&self, path: &str, _query: &[(String, String)]) -> Result<Value> {
        Err(ApiError::Status {
            status: 503,
            path: path.to_string(),
            detail: "simulated backend outage".to_string(),
        }
        .into())
    }
}
