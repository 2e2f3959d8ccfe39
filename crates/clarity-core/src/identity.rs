use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Authenticated user identity resolved by the server for one request.
///
/// Produced by `clarity-api` after looking the client-supplied user ID up in
/// the store. A client-held ID on its own is never treated as proof.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuthIdentity {
    pub user_id: String,
    pub username: String,
}
