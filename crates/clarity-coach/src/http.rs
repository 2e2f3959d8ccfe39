//! Status handling for Gemini API responses.

use reqwest::StatusCode;
use reqwest::header::{HeaderMap, RETRY_AFTER};
use serde::Deserialize;

use crate::error::CoachError;

/// Wait used when a 429 carries no usable `Retry-After`.
pub const DEFAULT_RETRY_AFTER_SECS: u64 = 60;

/// Longest slice of a non-JSON error body kept in [`CoachError::Api`].
const MAX_ERROR_CHARS: usize = 300;

/// Gemini's error envelope: `{"error": {"code", "message", "status"}}`.
#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
}

/// Pass 2xx responses through and turn everything else into a [`CoachError`].
///
/// 429 becomes `RateLimited`. Other statuses become `Api`, carrying Gemini's
/// own `status: message` when the body is its error envelope.
pub async fn ensure_success(resp: reqwest::Response) -> Result<reqwest::Response, CoachError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(CoachError::RateLimited {
            retry_after_secs: retry_after_secs(resp.headers()),
        });
    }
    let body = resp.text().await.unwrap_or_default();
    Err(CoachError::Api {
        status: status.as_u16(),
        message: error_message(&body),
    })
}

fn retry_after_secs(headers: &HeaderMap) -> u64 {
    headers
        .get(RETRY_AFTER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_RETRY_AFTER_SECS)
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorEnvelope>(body) {
        Ok(ErrorEnvelope { error }) if !error.message.is_empty() => {
            if error.status.is_empty() {
                error.message
            } else {
                format!("{}: {}", error.status, error.message)
            }
        }
        _ => body.trim().chars().take(MAX_ERROR_CHARS).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn response(status: u16, body: String) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    fn rate_limited(retry_after: &str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(429)
                .header("retry-after", retry_after)
                .body(String::new())
                .unwrap(),
        )
    }

    async fn api_error(status: u16, body: &str) -> (u16, String) {
        match ensure_success(response(status, body.to_string())).await {
            Err(CoachError::Api { status, message }) => (status, message),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn retry_after_header_is_honoured() {
        let err = ensure_success(rate_limited(" 12 ")).await.unwrap_err();
        assert!(matches!(err, CoachError::RateLimited { retry_after_secs: 12 }));
        assert!(err.is_transient());
    }

    #[tokio::test]
    async fn unusable_retry_after_falls_back() {
        let err = ensure_success(rate_limited("Wed, 21 Oct 2026 07:28:00 GMT"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            CoachError::RateLimited {
                retry_after_secs: DEFAULT_RETRY_AFTER_SECS
            }
        ));
    }

    #[tokio::test]
    async fn gemini_envelope_is_unwrapped() {
        let body = r#"{"error":{"code":400,"message":"API key not valid.","status":"INVALID_ARGUMENT"}}"#;
        let (status, message) = api_error(400, body).await;
        assert_eq!(status, 400);
        assert_eq!(message, "INVALID_ARGUMENT: API key not valid.");
    }

    #[tokio::test]
    async fn plain_bodies_are_trimmed_and_clipped() {
        let (status, message) = api_error(503, "  overloaded\n").await;
        assert_eq!(status, 503);
        assert_eq!(message, "overloaded");

        let (_, message) = api_error(502, &"x".repeat(1_000)).await;
        assert_eq!(message.len(), MAX_ERROR_CHARS);
    }

    #[tokio::test]
    async fn success_passes_through() {
        assert!(ensure_success(response(200, "{}".into())).await.is_ok());
    }
}
