//! # clarity-db
//!
//! libSQL persistence for Clarity: registered users, questionnaire history
//! entries with their parsed insight, and bookmarked solution cards.
//!
//! Every read and write on history and cards is scoped to a user ID; rows
//! belonging to another user behave exactly like missing rows.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;

use error::DatabaseError;
use libsql::Builder;

/// Raw database handle: one libSQL database and its connection.
///
/// Repository methods live on [`service::ClarityService`], which wraps this.
pub struct ClarityDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl ClarityDb {
    /// Open a local database file, or `":memory:"` for a throwaway store.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        Self::from_database(db).await
    }

    /// Connect to a remote libSQL server (e.g., Turso).
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection or migrations fail.
    pub async fn open_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_remote(url.to_string(), auth_token.to_string())
            .build()
            .await?;
        Self::from_database(db).await
    }

    async fn from_database(db: libsql::Database) -> Result<Self, DatabaseError> {
        let conn = db.connect()?;

        // Per-connection in SQLite.
        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let clarity_db = Self { db, conn };
        clarity_db.run_migrations().await?;
        Ok(clarity_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Generate a prefixed ID via libSQL. Returns e.g., `"his-3fa85f6457174562"`.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn generate_id(&self, prefix: &str) -> Result<String, DatabaseError> {
        let mut rows = self
            .conn
            .query(
                &format!("SELECT '{prefix}-' || lower(hex(randomblob(8)))"),
                (),
            )
            .await?;
        let row = rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(row.get::<String>(0)?)
    }
}

#[cfg(test)]
mod test_support;
