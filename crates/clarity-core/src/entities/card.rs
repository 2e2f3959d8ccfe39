use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A bookmarked solution, scoped to one user.
///
/// `history_id` points back at the entry the solution came from when the
/// client supplies it; the card survives deletion of that entry.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SavedCard {
    pub id: String,
    pub user_id: String,
    pub title: String,
    pub description: String,
    pub history_id: Option<String>,
    pub created_at: DateTime<Utc>,
}
