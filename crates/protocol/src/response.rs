//! Response envelope and status payloads.

use base64::Engine;
use serde::Deserialize;

/// Every WebDriver response wraps its payload in `{"value": ...}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ResponseValue<T> {
    pub value: T,
}

/// `value` payload of `GET /status`.
#[derive(Debug, Clone, Deserialize)]
pub struct StatusValue {
    /// Whether the remote end can accept a new session.
    pub ready: bool,

    #[serde(default)]
    pub message: String,
}

/// Decode the base64 PNG returned by Take Screenshot.
pub fn decode_screenshot(data: &str) -> Result<Vec<u8>, base64::DecodeError> {
    base64::engine::general_purpose::STANDARD.decode(data)
}
