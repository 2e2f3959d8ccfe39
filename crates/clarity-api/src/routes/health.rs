use axum::routing::get;
use axum::{Json, Router};

use clarity_core::responses::HealthResponse;

use crate::state::SharedState;

pub fn routes() -> Router<SharedState> {
    Router::new().route("/api/health", get(health))
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".into(),
        version: env!("CARGO_PKG_VERSION").into(),
    })
}
