//! Error types for backend operations.

use std::io;

/// Result type alias for backend operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Backend client error types.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error.
    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),

    /// Backend answered with a non-success status.
    #[error("Backend returned {status}: {detail}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Backend's `detail` message, or the raw body.
        detail: String,
    },

    /// Backend answered 2xx but reported `success: false`.
    #[error("Backend rejected the request: {0}")]
    Rejected(String),

    /// Session payload in a redirect could not be decoded.
    #[error("Malformed session payload: {0}")]
    MalformedSession(String),

    /// Local redirect listener failed.
    #[error("Redirect listener error: {0}")]
    Listener(String),

    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl Error {
    /// Creates a status error from a code and backend detail.
    #[must_use]
    pub fn status(status: u16, detail: impl Into<String>) -> Self {
        Self::Status {
            status,
            detail: detail.into(),
        }
    }

    /// Returns true if the backend no longer recognises the signed-in user.
    ///
    /// The backend keeps credentials in memory, so this happens after every
    /// backend restart. It wraps its own 401 into a 500, hence the detail check.
    #[must_use]
    pub fn is_unauthorized(&self) -> bool {
        match self {
            Self::Status { status, detail } => {
                *status == 401 || detail.contains("not authenticated")
            }
            _ => false,
        }
    }
}
