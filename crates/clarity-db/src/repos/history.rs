//! History repository: one row per submitted questionnaire and its insight.
//!
//! The answer columns are written once; the insight columns are replaced in
//! place when the user adjusts an entry.

use clarity_core::entities::{HistoryEntry, QuestionnaireAnswers, Solution, StructuredInsight};
use clarity_core::enums::Topic;
use clarity_core::ids::PREFIX_HISTORY;

use crate::error::DatabaseError;
use crate::helpers::{format_datetime, get_rating, now, parse_datetime};
use crate::service::ClarityService;

const HISTORY_COLUMNS: &str = "id, user_id,
    decision, decision_rating, emotion, emotion_rating, today, today_rating,
    fear, fear_rating, future, future_rating, friend, friend_rating,
    assumption, assumption_rating,
    title, insight,
    solution_1_title, solution_1_description,
    solution_2_title, solution_2_description,
    solution_3_title, solution_3_description,
    challenge, created_at, updated_at";

/// Column index of the first insight column (`title`).
const INSIGHT_OFFSET: i32 = 16;

fn row_to_history(row: &libsql::Row) -> Result<HistoryEntry, DatabaseError> {
    let mut answers = QuestionnaireAnswers::default();
    let mut idx = 2;
    for topic in Topic::ALL {
        answers.set(topic, row.get::<String>(idx)?, get_rating(row, idx + 1)?);
        idx += 2;
    }

    let text = |offset: i32| row.get::<String>(INSIGHT_OFFSET + offset);
    let insight = StructuredInsight {
        title: text(0)?,
        insight: text(1)?,
        solutions: [
            Solution::new(text(2)?, text(3)?),
            Solution::new(text(4)?, text(5)?),
            Solution::new(text(6)?, text(7)?),
        ],
        challenge: text(8)?,
    };

    Ok(HistoryEntry {
        id: row.get::<String>(0)?,
        user_id: row.get::<String>(1)?,
        answers,
        insight,
        created_at: parse_datetime(&row.get::<String>(25)?)?,
        updated_at: parse_datetime(&row.get::<String>(26)?)?,
    })
}

fn insight_values(insight: &StructuredInsight) -> Vec<libsql::Value> {
    let mut values: Vec<libsql::Value> =
        vec![insight.title.clone().into(), insight.insight.clone().into()];
    for solution in &insight.solutions {
        values.push(solution.title.clone().into());
        values.push(solution.description.clone().into());
    }
    values.push(insight.challenge.clone().into());
    values
}

impl ClarityService {
    /// Persist a submitted questionnaire together with its parsed insight.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the insert fails (e.g., unknown user).
    pub async fn create_history(
        &self,
        user_id: &str,
        answers: &QuestionnaireAnswers,
        insight: &StructuredInsight,
    ) -> Result<HistoryEntry, DatabaseError> {
        let created_at = now();
        let id = self.db().generate_id(PREFIX_HISTORY).await?;

        let mut params: Vec<libsql::Value> = vec![id.clone().into(), user_id.into()];
        for (_, text, rating) in answers.iter() {
            params.push(text.into());
            params.push(i64::from(rating).into());
        }
        params.extend(insight_values(insight));
        params.push(format_datetime(&created_at).into());
        params.push(format_datetime(&created_at).into());

        let placeholders = (1..=params.len())
            .map(|i| format!("?{i}"))
            .collect::<Vec<_>>()
            .join(", ");
        let sql = format!("INSERT INTO history ({HISTORY_COLUMNS}) VALUES ({placeholders})");

        self.db()
            .conn()
            .execute(&sql, libsql::params_from_iter(params))
            .await?;

        tracing::debug!(entry_id = %id, %user_id, "history entry created");
        Ok(HistoryEntry {
            id,
            user_id: user_id.to_string(),
            answers: answers.clone(),
            insight: insight.clone(),
            created_at,
            updated_at: created_at,
        })
    }

    /// Fetch one of the user's entries.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no entry with this ID belongs to the user.
    pub async fn get_history(
        &self,
        user_id: &str,
        id: &str,
    ) -> Result<HistoryEntry, DatabaseError> {
        let sql = format!("SELECT {HISTORY_COLUMNS} FROM history WHERE id = ?1 AND user_id = ?2");
        let mut rows = self.db().conn().query(&sql, [id, user_id]).await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_history(&row)
    }

    /// List the user's entries, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_history(
        &self,
        user_id: &str,
        limit: u32,
    ) -> Result<Vec<HistoryEntry>, DatabaseError> {
        let sql = format!(
            "SELECT {HISTORY_COLUMNS} FROM history WHERE user_id = ?1
             ORDER BY created_at DESC, rowid DESC LIMIT ?2"
        );
        let mut rows = self
            .db()
            .conn()
            .query(&sql, libsql::params![user_id, i64::from(limit)])
            .await?;

        let mut entries = Vec::new();
        while let Some(row) = rows.next().await? {
            entries.push(row_to_history(&row)?);
        }
        Ok(entries)
    }

    /// Replace the insight half of an entry, keeping its answers and creation time.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no entry with this ID belongs to the user.
    pub async fn replace_insight(
        &self,
        user_id: &str,
        id: &str,
        insight: &StructuredInsight,
    ) -> Result<HistoryEntry, DatabaseError> {
        let updated_at = now();

        let mut params = insight_values(insight);
        params.push(format_datetime(&updated_at).into());
        params.push(id.into());
        params.push(user_id.into());

        let affected = self
            .db()
            .conn()
            .execute(
                "UPDATE history SET title = ?1, insight = ?2,
                    solution_1_title = ?3, solution_1_description = ?4,
                    solution_2_title = ?5, solution_2_description = ?6,
                    solution_3_title = ?7, solution_3_description = ?8,
                    challenge = ?9, updated_at = ?10
                 WHERE id = ?11 AND user_id = ?12",
                libsql::params_from_iter(params),
            )
            .await?;
        if affected == 0 {
            return Err(DatabaseError::NoResult);
        }

        tracing::debug!(entry_id = %id, %user_id, "history insight replaced");
        self.get_history(user_id, id).await
    }

    /// Delete one of the user's entries. Cards bookmarked from it survive.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no entry with this ID belongs to the user.
    pub async fn delete_history(&self, user_id: &str, id: &str) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute(
                "DELETE FROM history WHERE id = ?1 AND user_id = ?2",
                [id, user_id],
            )
            .await?;
        if affected == 0 {
            return Err(DatabaseError::NoResult);
        }
        tracing::debug!(entry_id = %id, %user_id, "history entry deleted");
        Ok(())
    }
}
