//! User repository: username-only registration and lookup.

use clarity_core::entities::User;
use clarity_core::ids::PREFIX_USER;

use crate::error::{DatabaseError, is_unique_violation};
use crate::helpers::{format_datetime, now, parse_datetime};
use crate::service::ClarityService;

fn row_to_user(row: &libsql::Row) -> Result<User, DatabaseError> {
    Ok(User {
        id: row.get::<String>(0)?,
        username: row.get::<String>(1)?,
        created_at: parse_datetime(&row.get::<String>(2)?)?,
    })
}

impl ClarityService {
    /// Register a new username.
    ///
    /// The username is stored as given; callers validate its shape first.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::Conflict` if the username is already taken.
    pub async fn create_user(&self, username: &str) -> Result<User, DatabaseError> {
        if self.find_user_by_username(username).await?.is_some() {
            return Err(DatabaseError::Conflict("Username already taken".into()));
        }

        let created_at = now();
        let id = self.db().generate_id(PREFIX_USER).await?;

        self.db()
            .conn()
            .execute(
                "INSERT INTO users (id, username, created_at) VALUES (?1, ?2, ?3)",
                libsql::params![id.as_str(), username, format_datetime(&created_at)],
            )
            .await
            .map_err(|e| {
                if is_unique_violation(&e) {
                    DatabaseError::Conflict("Username already taken".into())
                } else {
                    DatabaseError::LibSql(e)
                }
            })?;

        tracing::info!(user_id = %id, "user registered");
        Ok(User {
            id,
            username: username.to_string(),
            created_at,
        })
    }

    /// Fetch a user by ID.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError::NoResult` if the user does not exist.
    pub async fn get_user(&self, id: &str) -> Result<User, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query("SELECT id, username, created_at FROM users WHERE id = ?1", [id])
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        row_to_user(&row)
    }

    /// Look a user up by exact username.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails.
    pub async fn find_user_by_username(
        &self,
        username: &str,
    ) -> Result<Option<User>, DatabaseError> {
        let mut rows = self
            .db()
            .conn()
            .query(
                "SELECT id, username, created_at FROM users WHERE username = ?1",
                [username],
            )
            .await?;
        match rows.next().await? {
            Some(row) => Ok(Some(row_to_user(&row)?)),
            None => Ok(None),
        }
    }
}
