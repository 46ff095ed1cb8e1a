//! Unified error types using thiserror
//!
//! Every variant is fatal to the single smoke run; nothing is caught and
//! retried. The top level logs the message and exits non-zero.

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    /// Port allocation or server bind failed; aborts before any request is made.
    #[error("bind error: {0}")]
    Bind(#[from] std::io::Error),
    /// The client could not reach the server at all.
    #[error("connection error: {0}")]
    Connection(String),
    /// No response arrived within the fetch timeout.
    #[error("timed out waiting for response: {0}")]
    Timeout(String),
    /// The homepage answered, but not with 200.
    #[error("unexpected status: {0}")]
    UnexpectedStatus(u16),
    /// The homepage answered 200, but the body lacks the required substring.
    #[error("response body missing expected marker {0:?}")]
    MissingMarker(String),
    #[error("config error: {0}")]
    Config(#[from] config::ConfigError),
    /// Client-side failures that are neither timeout nor connect refusal.
    #[error("fetch error: {0}")]
    Fetch(String),
}

impl From<reqwest::Error> for AppError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            AppError::Timeout(e.to_string())
        } else if e.is_connect() {
            AppError::Connection(e.to_string())
        } else {
            AppError::Fetch(e.to_string())
        }
    }
}

pub(crate) type AppResult<T> = Result<T, AppError>;
