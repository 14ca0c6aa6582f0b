//! Error payloads as returned by the remote end.

use std::fmt;

use serde::{Deserialize, Serialize};

/// `value` payload of a non-2xx WebDriver response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WireError {
    /// W3C error string, e.g. `"no such element"`.
    pub error: String,

    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub stacktrace: String,
}

impl WireError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::from_wire(&self.error)
    }
}

/// The subset of W3C error codes the client distinguishes. Everything else
/// collapses into `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    NoSuchElement,
    StaleElementReference,
    ElementNotInteractable,
    InvalidSelector,
    InvalidSessionId,
    SessionNotCreated,
    Timeout,
    UnknownCommand,
    Unknown,
}

impl ErrorCode {
    pub fn from_wire(s: &str) -> Self {
        match s {
            "no such element" => Self::NoSuchElement,
            "stale element reference" => Self::StaleElementReference,
            "element not interactable" => Self::ElementNotInteractable,
            "invalid selector" => Self::InvalidSelector,
            "invalid session id" => Self::InvalidSessionId,
            "session not created" => Self::SessionNotCreated,
            "timeout" => Self::Timeout,
            "unknown command" => Self::UnknownCommand,
            _ => Self::Unknown,
        }
    }

    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::NoSuchElement => "no such element",
            Self::StaleElementReference => "stale element reference",
            Self::ElementNotInteractable => "element not interactable",
            Self::InvalidSelector => "invalid selector",
            Self::InvalidSessionId => "invalid session id",
            Self::SessionNotCreated => "session not created",
            Self::Timeout => "timeout",
            Self::UnknownCommand => "unknown command",
            Self::Unknown => "unknown error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}
