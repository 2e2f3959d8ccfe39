//! Caller identity resolved from the `x-user-id` header.
//!
//! The header is only a claim: it is looked up in the store on every request,
//! and the stored user becomes the identity handlers scope their queries by.

use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use clarity_core::identity::AuthIdentity;

use crate::error::ApiError;
use crate::state::SharedState;

pub const USER_ID_HEADER: &str = "x-user-id";

/// Extractor for authenticated routes.
#[derive(Debug, Clone)]
pub struct AuthUser(pub AuthIdentity);

#[async_trait]
impl FromRequestParts<SharedState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedState,
    ) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or(ApiError::Unauthorized("Unauthorized"))?;

        let user = state
            .service
            .get_user(user_id)
            .await
            .map_err(|e| {
                if e.is_not_found() {
                    ApiError::Unauthorized("Invalid user")
                } else {
                    ApiError::Database(e)
                }
            })?;

        Ok(Self(AuthIdentity {
            user_id: user.id,
            username: user.username,
        }))
    }
}
