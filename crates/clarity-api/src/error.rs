//! HTTP error mapping.
//!
//! Every failure leaves the server as `{ "error": "<message>" }`. Coach and
//! store failures are logged in full and answered with a generic message.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use clarity_coach::CoachError;
use clarity_core::errors::CoreError;
use clarity_core::responses::ErrorResponse;
use clarity_db::error::DatabaseError;

pub const MSG_UNPARSEABLE: &str = "Could not understand the coach's response. Please try again.";
pub const MSG_UNAVAILABLE: &str = "The coach is unavailable right now. Please try again.";
pub const MSG_COACH_FAILED: &str = "The coach could not answer. Please try again.";
pub const MSG_INTERNAL: &str = "Something went wrong. Please try again.";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("rejected request ({0}): {1}")]
    Rejected(StatusCode, String),

    #[error("unauthorized: {0}")]
    Unauthorized(&'static str),

    #[error("not found: {0}")]
    NotFound(&'static str),

    #[error(transparent)]
    Coach(#[from] CoachError),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl ApiError {
    /// Map `NoResult` onto a 404 with an entity-specific message.
    pub fn not_found_as(error: DatabaseError, message: &'static str) -> Self {
        if error.is_not_found() {
            Self::NotFound(message)
        } else {
            Self::Database(error)
        }
    }

    fn status_and_message(&self) -> (StatusCode, String) {
        match self {
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::Rejected(status, msg) => (*status, msg.clone()),
            Self::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, (*msg).to_string()),
            Self::NotFound(msg) => (StatusCode::NOT_FOUND, (*msg).to_string()),
            Self::Coach(CoachError::InvalidAnswers(msg)) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::Coach(CoachError::StructuralMismatch(_)) => {
                (StatusCode::BAD_GATEWAY, MSG_UNPARSEABLE.to_string())
            }
            Self::Coach(e) if e.is_transient() => {
                (StatusCode::SERVICE_UNAVAILABLE, MSG_UNAVAILABLE.to_string())
            }
            Self::Coach(_) => (StatusCode::BAD_GATEWAY, MSG_COACH_FAILED.to_string()),
            Self::Database(DatabaseError::Conflict(msg)) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::Database(DatabaseError::NoResult) => (StatusCode::NOT_FOUND, "Not found".into()),
            Self::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, MSG_INTERNAL.to_string()),
        }
    }
}

impl From<CoreError> for ApiError {
    fn from(error: CoreError) -> Self {
        match error {
            CoreError::Validation(msg) => Self::BadRequest(msg),
            CoreError::NotFound { .. } => Self::NotFound("Not found"),
            CoreError::Other(e) => Self::Database(DatabaseError::Other(e)),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected(rejection.status(), rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::Rejected(rejection.status(), rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = self.status_and_message();
        if status.is_server_error() {
            tracing::error!(%status, error = %self, "request failed");
        } else {
            tracing::debug!(%status, error = %self, "request rejected");
        }
        (status, Json(ErrorResponse { error: message })).into_response()
    }
}
