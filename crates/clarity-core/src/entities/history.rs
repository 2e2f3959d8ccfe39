use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::{QuestionnaireAnswers, StructuredInsight};

/// A completed questionnaire together with the coach's parsed answer.
///
/// The `insight` half is replaced in place when the user adjusts the entry;
/// `answers` and `created_at` never change after creation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub id: String,
    pub user_id: String,
    pub answers: QuestionnaireAnswers,
    pub insight: StructuredInsight,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
