//! Username registration.

use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::routing::post;
use axum::{Json, Router};
use serde::Deserialize;

use clarity_core::responses::RegisterResponse;
use clarity_core::validation::validate_username;

use crate::error::ApiError;
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
struct RegisterRequest {
    #[serde(default)]
    username: String,
}

pub fn routes() -> Router<SharedState> {
    Router::new().route("/api/auth", post(register))
}

async fn register(
    State(state): State<SharedState>,
    body: Result<Json<RegisterRequest>, JsonRejection>,
) -> Result<Json<RegisterResponse>, ApiError> {
    let Json(request) = body?;
    let username = request.username.trim();
    validate_username(username)?;

    let user = state.service.create_user(username).await?;
    Ok(Json(RegisterResponse {
        user_id: user.id,
        username: user.username,
    }))
}
