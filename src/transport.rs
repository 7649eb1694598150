//! HTTP transport shared by all backends.
//!
//! Paths handed to a [`Transport`] are already percent-encoded and start
//! with `/`; the transport only prefixes its base URL.

use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use serde_json::Value;
use tracing::debug;

use crate::config::HttpConfig;
use crate::error::{BugError, Result};

const JSON_MIME: &str = "application/json";

/// Request/response channel to a single backend host.
///
/// Implementations map 404 to [`BugError::NotFound`] and every other non-200
/// status to [`BugError::Transport`].
pub trait Transport {
    /// GET `path` and decode the body as JSON.
    fn get(&self, path: &str) -> Result<Value>;

    /// DELETE `path`. The response body is read and discarded.
    fn delete(&self, path: &str) -> Result<()>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn get(&self, path: &str) -> Result<Value> {
        (**self).get(path)
    }

    fn delete(&self, path: &str) -> Result<()> {
        (**self).delete(path)
    }
}

/// Blocking reqwest transport bound to one base URL.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    base_url: String,
    client: Client,
}

impl HttpTransport {
    pub fn new(base_url: &str, http: &HttpConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(http.timeout_secs))
            .user_agent(http.user_agent.clone())
            .build()
            .map_err(|err| BugError::Config(format!("HTTP client error: {err}")))?;
        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn send(&self, request: reqwest::blocking::RequestBuilder, path: &str) -> Result<Response> {
        request
            .header("Accept", JSON_MIME)
            .header("Content-Type", JSON_MIME)
            .send()
            .map_err(|err| BugError::Network(format!("{path}: {err}")))
    }
}

impl Transport for HttpTransport {
    fn get(&self, path: &str) -> Result<Value> {
        debug!(method = "GET", path = %path, "HTTP request");
        let response = self.send(self.client.get(self.url(path)), path)?;
        let status = response.status();
        let body = response
            .bytes()
            .map_err(|err| BugError::Network(format!("read {path}: {err}")))?;
        check_status(status, path)?;
        // Raw bytes: invalid UTF-8 must fail here rather than be replaced.
        serde_json::from_slice(&body)
            .map_err(|err| BugError::MalformedResponse(format!("{path}: invalid JSON: {err}")))
    }

    fn delete(&self, path: &str) -> Result<()> {
        debug!(method = "DELETE", path = %path, "HTTP request");
        let response = self.send(self.client.delete(self.url(path)), path)?;
        let status = response.status();
        // Drain the body so the pooled connection can take the next request.
        response
            .bytes()
            .map_err(|err| BugError::Network(format!("read {path}: {err}")))?;
        check_status(status, path)
    }
}

/// 200 passes, 404 is `NotFound`, anything else carries the status code.
pub fn check_status(status: StatusCode, path: &str) -> Result<()> {
    match status {
        StatusCode::OK => Ok(()),
        StatusCode::NOT_FOUND => Err(BugError::NotFound(path.to_string())),
        other => Err(BugError::Transport {
            status: other.as_u16(),
            path: path.to_string(),
        }),
    }
}
