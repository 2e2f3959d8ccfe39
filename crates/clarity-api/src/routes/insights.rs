//! Insight generation from a completed questionnaire.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};

use clarity_core::entities::QuestionnaireAnswers;
use clarity_core::responses::{InsightResult, MessageResponse};

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::state::SharedState;

pub fn routes() -> Router<SharedState> {
    Router::new().route("/api/insights", post(generate))
}

/// Generate an insight and record it in the caller's history.
///
/// A store failure after a successful generation is logged and the insight
/// is still returned, with no `entryId`.
async fn generate(
    State(state): State<SharedState>,
    AuthUser(identity): AuthUser,
    body: Result<Json<QuestionnaireAnswers>, JsonRejection>,
) -> Result<Json<MessageResponse<InsightResult>>, ApiError> {
    let Json(answers) = body?;
    answers.validate_complete()?;

    let insight = state.coach.advise(&answers, None).await?;

    let entry_id = match state
        .service
        .create_history(&identity.user_id, &answers, &insight)
        .await
    {
        Ok(entry) => Some(entry.id),
        Err(error) => {
            tracing::error!(user_id = %identity.user_id, %error, "failed to save history entry");
            None
        }
    };

    Ok(Json(MessageResponse::success(InsightResult { entry_id, insight })))
}
