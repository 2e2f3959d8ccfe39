//! History listing, lookup, deletion and adjustment.

use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

use clarity_core::entities::HistoryEntry;
use clarity_core::responses::{DataResponse, InsightResult, MessageResponse};
use clarity_core::validation::normalize_adjustments;

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::state::SharedState;

const ENTRY_NOT_FOUND: &str = "Entry not found";

#[derive(Debug, Deserialize)]
struct ListParams {
    limit: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct AdjustRequest {
    #[serde(default)]
    adjustments: String,
}

pub fn routes() -> Router<SharedState> {
    Router::new()
        .route("/api/history", get(list))
        .route("/api/history/:id", get(fetch).delete(remove))
        .route("/api/history/:id/adjust", post(adjust))
}

async fn list(
    State(state): State<SharedState>,
    AuthUser(identity): AuthUser,
    query: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<DataResponse<Vec<HistoryEntry>>>, ApiError> {
    let Query(params) = query?;
    let limit = params
        .limit
        .filter(|&l| l > 0)
        .unwrap_or(state.default_limit);
    let data = state.service.list_history(&identity.user_id, limit).await?;
    Ok(Json(DataResponse { data }))
}

async fn fetch(
    State(state): State<SharedState>,
    AuthUser(identity): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<DataResponse<HistoryEntry>>, ApiError> {
    let data = state
        .service
        .get_history(&identity.user_id, &id)
        .await
        .map_err(|e| ApiError::not_found_as(e, ENTRY_NOT_FOUND))?;
    Ok(Json(DataResponse { data }))
}

async fn remove(
    State(state): State<SharedState>,
    AuthUser(identity): AuthUser,
    Path(id): Path<String>,
) -> Result<Json<DataResponse<Vec<HistoryEntry>>>, ApiError> {
    state
        .service
        .delete_history(&identity.user_id, &id)
        .await
        .map_err(|e| ApiError::not_found_as(e, ENTRY_NOT_FOUND))?;
    Ok(Json(DataResponse { data: Vec::new() }))
}

/// Regenerate an entry's insight from its stored answers plus the user's
/// adjustments, replacing the previous insight in place.
async fn adjust(
    State(state): State<SharedState>,
    AuthUser(identity): AuthUser,
    Path(id): Path<String>,
    body: Result<Json<AdjustRequest>, JsonRejection>,
) -> Result<Json<MessageResponse<InsightResult>>, ApiError> {
    let Json(request) = body?;
    let adjustments = normalize_adjustments(&request.adjustments)?;

    let entry = state
        .service
        .get_history(&identity.user_id, &id)
        .await
        .map_err(|e| ApiError::not_found_as(e, ENTRY_NOT_FOUND))?;

    let insight = state.coach.advise(&entry.answers, Some(adjustments)).await?;

    let updated = state
        .service
        .replace_insight(&identity.user_id, &entry.id, &insight)
        .await
        .map_err(|e| ApiError::not_found_as(e, ENTRY_NOT_FOUND))?;

    Ok(Json(MessageResponse::success(InsightResult {
        entry_id: Some(updated.id),
        insight: updated.insight,
    })))
}
