//! Coach error types.

use clarity_config::ConfigError;
use thiserror::Error;

/// Errors from building prompts, calling the model, and parsing completions.
#[derive(Debug, Error)]
pub enum CoachError {
    /// The completion is structurally broken (unbalanced brackets or braces).
    /// Raised by the sanitizer; never retried.
    #[error("structural mismatch: {0}")]
    StructuralMismatch(String),

    /// The answers are not complete enough to build a prompt.
    #[error("invalid answers: {0}")]
    InvalidAnswers(String),

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The model API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The model API returned 429 Too Many Requests.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// The model answered without any text.
    #[error("completion contained no text")]
    EmptyCompletion,

    /// The API response body could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),

    /// The completion provider lacks credentials or settings.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CoachError {
    /// Whether retrying the same request may succeed: timeouts, connection
    /// failures, 429 and 5xx responses.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Http(e) => e.is_timeout() || e.is_connect(),
            Self::RateLimited { .. } => true,
            Self::Api { status, .. } => *status >= 500,
            Self::StructuralMismatch(_)
            | Self::InvalidAnswers(_)
            | Self::EmptyCompletion
            | Self::Parse(_)
            | Self::Config(_) => false,
        }
    }
}
