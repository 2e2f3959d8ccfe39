//! Response envelopes returned as JSON by the HTTP API and the CLI.
//!
//! Generation endpoints answer `{ "message", "result" }`; collection
//! endpoints answer `{ "data" }`; failures answer `{ "error" }`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::StructuredInsight;

/// Envelope for generation and adjustment endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MessageResponse<T> {
    pub message: String,
    pub result: T,
}

impl<T> MessageResponse<T> {
    pub fn success(result: T) -> Self {
        Self {
            message: String::from("Success"),
            result,
        }
    }
}

/// Result of a generation or adjustment: the stored entry and its insight.
///
/// `entry_id` is `None` when the insight was produced but could not be stored.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct InsightResult {
    pub entry_id: Option<String>,
    pub insight: StructuredInsight,
}

/// Envelope for list/get/delete endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DataResponse<T> {
    pub data: T,
}

/// Envelope for every error response.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

/// Response from `POST /api/auth` and `clarity user create`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub user_id: String,
    pub username: String,
}

/// Response from `GET /api/health`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}
