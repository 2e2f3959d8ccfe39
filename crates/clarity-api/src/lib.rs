//! # clarity-api
//!
//! HTTP surface for Clarity, built on axum.
//!
//! Public routes: `GET /api/health`, `POST /api/auth`. Every other route
//! requires an `x-user-id` header that resolves to a registered user (see
//! [`auth::AuthUser`]); history and card queries are scoped to that user.
//!
//! Errors leave as `{ "error": "..." }` with the status chosen by
//! [`error::ApiError`].

pub mod auth;
pub mod error;
mod routes;
pub mod state;

use std::net::SocketAddr;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use clarity_config::ServerConfig;

pub use state::{AppState, SharedState};

/// Build the full router over shared state.
pub fn router(state: SharedState, max_body_bytes: usize) -> Router {
    routes::api_routes()
        .with_state(state)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Bind and serve until ctrl-c.
///
/// # Errors
///
/// Returns an I/O error if the address is invalid or cannot be bound.
pub async fn serve(state: SharedState, config: &ServerConfig) -> std::io::Result<()> {
    let addr: SocketAddr = config
        .bind
        .parse()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;
    let app = router(state, config.max_body_bytes);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(addr = %listener.local_addr()?, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::warn!(%error, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
