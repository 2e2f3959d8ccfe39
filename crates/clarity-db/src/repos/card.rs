//! Saved-card repository: bookmarked solutions.
//!
//! A card is identified by its owner plus its exact `(title, description)`;
//! saving the same pair twice returns the existing card.

use clarity_core::entities::SavedCard;
use clarity_core::ids::PREFIX_CARD;

use crate::error::DatabaseError;
use crate::helpers::{format_datetime, get_opt_string, now, parse_datetime};
use crate::service::ClarityService;

fn row_to_card(row: &libsql::Row) -> Result<SavedCard, DatabaseError> {
    Ok(SavedCard {
        id: row.get::<String>(0)?,
        user_id: row.get::<String>(1)?,
        title: row.get::<String>(2)?,
        description: row.get::<String>(3)?,
        history_id: get_opt_string(row, 4)?,
        created_at: parse_datetime(&row.get::<String>(5)?)?,
    })
}

impl ClarityService {
    /// Bookmark a solution. Idempotent per `(user, title, description)`.
    ///
    /// When `history_id` is given it must name one of the user's entries.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if `history_id` does not belong to the user.
    pub async fn save_card(
        &self,
        user_id: &str,
        title: &str,
        description: &str,
        history_id: Option<&str>,
    ) -> Result<SavedCard, DatabaseError> {
        if let Some(history_id) = history_id {
            self.get_history(user_id, history_id).await?;
        }

        let id = self.db().generate_id(PREFIX_CARD).await?;
        let inserted = self
            .db()
            .conn()
            .execute(
                "INSERT INTO cards (id, user_id, title, description, history_id, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                 ON CONFLICT (user_id, title, description) DO NOTHING",
                libsql::params![
                    id.as_str(),
                    user_id,
                    title,
                    description,
                    history_id,
                    format_datetime(&now())
                ],
            )
            .await?;
        if inserted == 0 {
            tracing::debug!(%user_id, "card already saved");
        }

        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, user_id, title, description, history_id, created_at FROM cards
                 WHERE user_id = ?1 AND title = ?2 AND description = ?3",
                [user_id, title, description],
            )
            .await?;
        let row = rows.next().await?.ok_or_else(|| {
            DatabaseError::InvalidState("card missing right after insert".into())
        })?;
        row_to_card(&row)
    }

    /// List the user's cards, newest first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn list_cards(&self, user_id: &str) -> Result<Vec<SavedCard>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, user_id, title, description, history_id, created_at FROM cards
                 WHERE user_id = ?1 ORDER BY created_at DESC, rowid DESC",
                [user_id],
            )
            .await?;

        let mut cards = Vec::new();
        while let Some(row) = rows.next().await? {
            cards.push(row_to_card(&row)?);
        }
        Ok(cards)
    }

    /// Delete one of the user's cards by ID.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if no card with this ID belongs to the user.
    pub async fn delete_card(&self, user_id: &str, id: &str) -> Result<(), DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute(
                "DELETE FROM cards WHERE id = ?1 AND user_id = ?2",
                [id, user_id],
            )
            .await?;
        if affected == 0 {
            return Err(DatabaseError::NoResult);
        }
        Ok(())
    }

    /// Remove the bookmark matching a solution's content. Returns the number of
    /// cards removed (0 when it was not bookmarked).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the delete fails.
    pub async fn delete_card_by_content(
        &self,
        user_id: &str,
        title: &str,
        description: &str,
    ) -> Result<u64, DatabaseError> {
        let affected = self
            .db()
            .conn()
            .execute(
                "DELETE FROM cards WHERE user_id = ?1 AND title = ?2 AND description = ?3",
                [user_id, title, description],
            )
            .await?;
        Ok(affected)
    }
}
