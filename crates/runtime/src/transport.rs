//! HTTP command transport.
//!
//! The W3C WebDriver protocol is plain request/response JSON over HTTP: each
//! command is one HTTP call, every response wraps its payload in a
//! `{"value": ...}` envelope, and errors come back as non-2xx responses with
//! a `{"value": {"error", "message", "stacktrace"}}` body. This module owns
//! that envelope; callers see decoded payloads or [`Error::Remote`].

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, trace};
use url::Url;
use wd_protocol::{ErrorCode, ResponseValue, WireError};

use crate::error::{Error, Result};

/// A reqwest wrapper bound to one remote end base URL.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    http: reqwest::Client,
    base: Url,
}

impl HttpTransport {
    pub fn new(base: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base,
        }
    }

    /// Base URL of the remote end this transport talks to.
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// `POST` a command body and return the decoded `value` payload.
    pub async fn post(&self, path: &str, body: &impl Serialize) -> Result<Value> {
        self.execute(Method::POST, path, Some(serde_json::to_value(body)?))
            .await
    }

    /// `GET` a command and return the decoded `value` payload.
    pub async fn get(&self, path: &str) -> Result<Value> {
        self.execute(Method::GET, path, None).await
    }

    /// `DELETE` a command and return the decoded `value` payload.
    pub async fn delete(&self, path: &str) -> Result<Value> {
        self.execute(Method::DELETE, path, None).await
    }

    async fn execute(&self, method: Method, path: &str, body: Option<Value>) -> Result<Value> {
        let url = self.base.join(path)?;
        trace!(target = "wd", %method, %url, "command");

        let mut request = self.http.request(method, url);
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let payload: Value = response.json().await?;

        if status.is_success() {
            let envelope: ResponseValue<Value> = serde_json::from_value(payload)?;
            return Ok(envelope.value);
        }

        let wire: WireError = serde_json::from_value(payload["value"].clone())
            .unwrap_or_else(|_| WireError {
                error: "unknown error".into(),
                message: payload.to_string(),
                stacktrace: String::new(),
            });
        let code = wire.code();
        if code != ErrorCode::NoSuchElement {
            // Absent elements are routine during polling waits; everything
            // else is worth a log line.
            debug!(target = "wd", %status, %code, message = %wire.message, "command failed");
        }
        Err(Error::Remote {
            code,
            message: wire.message,
        })
    }
}
