//! Request bodies for session and element commands.

use serde::{Deserialize, Serialize};

/// Body of `POST /session/{id}/url`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigateRequest {
    pub url: String,
}

impl NavigateRequest {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Body of `POST /session/{id}/element/{eid}/value`.
///
/// The W3C Element Send Keys command takes the full string to type; key
/// codepoints from [`crate::keys`] may be embedded anywhere in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SendKeysRequest {
    pub text: String,
}

impl SendKeysRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Commands like Element Click take an empty JSON object, not an empty body.
pub fn empty_body() -> serde_json::Value {
    serde_json::json!({})
}
