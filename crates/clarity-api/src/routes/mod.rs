//! Route groups, merged into one router in [`crate::router`].

mod auth;
mod cards;
mod health;
mod history;
mod insights;

use axum::Router;

use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .merge(health::routes())
        .merge(auth::routes())
        .merge(insights::routes())
        .merge(history::routes())
        .merge(cards::routes())
}
