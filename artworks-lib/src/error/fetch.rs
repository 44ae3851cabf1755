//! Catalog fetch error types

use std::time::Duration;

/// Maximum number of response body bytes kept in an error message.
const BODY_EXCERPT_LEN: usize = 512;

/// Errors that can occur while fetching a page from the catalog.
///
/// A failed fetch never yields partial results. The pagination controller
/// keeps its previously loaded page when it receives one of these.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The catalog answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Excerpt of the response body.
        message: String,
    },

    /// Transport-level failure (connection refused, TLS, reset, ...).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The request exceeded the configured timeout.
    #[error("Timeout after {0:?}")]
    Timeout(Duration),

    /// The response body was not the expected JSON document.
    #[error("Response parse error: {message}")]
    Parse {
        /// Description of the parse error.
        message: String,
        /// Raw response body, if available.
        body: Option<String>,
    },

    /// The fetch task ended without producing a result (it panicked or was cancelled).
    #[error("Fetch task failed: {0}")]
    Task(String),
}

impl FetchError {
    /// Creates a new HTTP error, truncating the body to a short excerpt.
    pub fn http(status: u16, body: impl Into<String>) -> Self {
        Self::Http {
            status,
            message: excerpt(body.into()),
        }
    }

    /// Creates a new parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            body: None,
        }
    }

    /// Creates a new parse error with the raw response body.
    pub fn parse_with_body(message: impl Into<String>, body: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            body: Some(excerpt(body.into())),
        }
    }

    /// Returns the HTTP status code if this is an HTTP error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Returns `true` if trying the same request again might succeed.
    ///
    /// Nothing retries automatically; this only drives the wording of the
    /// "failed to load" indicator.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Http { status, .. } => matches!(status, 429 | 500 | 502 | 503 | 504),
            Self::Network(_) => true,
            Self::Timeout(_) => true,
            _ => false,
        }
    }
}

fn excerpt(mut body: String) -> String {
    if body.len() > BODY_EXCERPT_LEN {
        let mut end = BODY_EXCERPT_LEN;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        body.truncate(end);
        body.push_str("...");
    }
    body
}
