//! Shared application state.

use std::sync::Arc;

use clarity_coach::Coach;
use clarity_db::service::ClarityService;

/// Everything a handler needs, shared read-only across requests.
pub struct AppState {
    pub service: Arc<ClarityService>,
    pub coach: Coach,
    /// History page size when the client gives no `limit`.
    pub default_limit: u32,
}

pub type SharedState = Arc<AppState>;

impl AppState {
    #[must_use]
    pub fn new(service: Arc<ClarityService>, coach: Coach, default_limit: u32) -> Self {
        Self {
            service,
            coach,
            default_limit,
        }
    }
}
