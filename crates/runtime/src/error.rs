//! Error types shared by the runtime and client layers.

use thiserror::Error;
use wd_protocol::ErrorCode;

/// Result type alias for runtime operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur talking to a WebDriver remote end.
#[derive(Debug, Error)]
pub enum Error {
    /// No WebDriver server binary could be located on the host.
    #[error("WebDriver server not found (searched: {searched}). Install chromedriver or set WD_DRIVER_EXE.")]
    DriverNotFound { searched: String },

    /// Failed to launch the WebDriver server process.
    #[error("failed to launch WebDriver server: {0}")]
    LaunchFailed(String),

    /// The server process started but never reported ready.
    #[error("WebDriver server at {endpoint} not ready after {waited_ms}ms")]
    NotReady { endpoint: String, waited_ms: u64 },

    /// Remote-end error response with its W3C error code preserved.
    #[error("{code}: {message}")]
    Remote { code: ErrorCode, message: String },

    /// A bounded poll elapsed without the condition being observed.
    #[error("timeout after {elapsed_ms}ms waiting for: {condition}")]
    WaitTimeout { condition: String, elapsed_ms: u64 },

    /// HTTP-level failure reaching the remote end.
    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The remote end answered 2xx but the payload was not what the
    /// command's contract promises.
    #[error("malformed payload from remote end: {0}")]
    Payload(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for "element is not there yet" responses the polling wait
    /// treats as retryable.
    pub fn is_no_such_element(&self) -> bool {
        matches!(
            self,
            Error::Remote {
                code: ErrorCode::NoSuchElement,
                ..
            }
        )
    }

    /// True when the element reference went stale between resolution and
    /// use. Also retryable inside a polling wait.
    pub fn is_stale(&self) -> bool {
        matches!(
            self,
            Error::Remote {
                code: ErrorCode::StaleElementReference,
                ..
            }
        )
    }

    /// True if this is a timeout, either remote or from a local wait.
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            Error::WaitTimeout { .. }
                | Error::Remote {
                    code: ErrorCode::Timeout,
                    ..
                }
        )
    }
}
