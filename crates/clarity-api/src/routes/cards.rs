//! Bookmarked solution cards.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::routing::{delete, get};
use axum::{Json, Router};
use serde::Deserialize;

use clarity_core::entities::SavedCard;
use clarity_core::responses::DataResponse;
use clarity_core::validation::validate_card;

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::state::SharedState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SaveCardRequest {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
    history_id: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CardContent {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: String,
}

pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/api/cards", get(list).post(save).delete(remove_by_content))
        .route("/api/cards/:id", delete(remove))
}

async fn list(
    State(state): State<SharedState>,
    AuthUser(identity): AuthUser,
) -> Result<Json<DataResponse<Vec<SavedCard>>>, ApiError> {
    let data = state.service.list_cards(&identity.user_id).await?;
    Ok(Json(DataResponse { data }))
}

async fn save(
    State(state): State<SharedState>,
    AuthUser(identity): AuthUser,
    body: Result<Json<SaveCardRequest>, JsonRejection>,
) -> Result<Json<DataResponse<Vec<SavedCard>>>, ApiError> {
    let Json(request) = body?;
    let title = request.title.trim();
    let description = request.description.trim();
    validate_card(title, description)?;

    let history_id = request
        .history_id
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty());

    let card = state
        .service
        .save_card(&identity.user_id, title, description, history_id)
        .await
        .map_err(|e| ApiError::not_found_as(e, "Entry not found"))?;
    Ok(Json(DataResponse { data: vec![card] }))
}

async fn remove(
    State(state): State<SharedState>,
    AuthUser(identity): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<DataResponse<Vec<SavedCard>>>, ApiError> {
    state
        .service
        .delete_card(&identity.user_id, &id)
        .await
        .map_err(|e| ApiError::not_found_as(e, "Card not found"))?;
    Ok(Json(DataResponse { data: Vec::new() }))
}

/// Toggle a bookmark off by its content. Removing nothing is not an error.
async fn remove_by_content(
    State(state): State<SharedState>,
    AuthUser(identity): AuthUser,
    body: Result<Json<CardContent>, JsonRejection>,
) -> Result<Json<DataResponse<Vec<SavedCard>>>, ApiError> {
    let Json(content) = body?;
    let title = content.title.trim();
    let description = content.description.trim();
    validate_card(title, description)?;

    let removed = state
        .service
        .delete_card_by_content(&identity.user_id, title, description)
        .await?;
    tracing::debug!(user_id = %identity.user_id, removed, "card unbookmarked");
    Ok(Json(DataResponse { data: Vec::new() }))
}
