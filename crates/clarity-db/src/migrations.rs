//! Database migration runner.
//!
//! Embeds the SQL migration at compile time and executes it on open. All
//! statements use `IF NOT EXISTS`, so re-running is a no-op.

use crate::ClarityDb;
use crate::error::DatabaseError;

/// Initial schema: users, history, cards and their indexes.
const MIGRATION_001: &str = include_str!("../migrations/001_initial.sql");

impl ClarityDb {
    pub(crate) async fn run_migrations(&self) -> Result<(), DatabaseError> {
        self.conn
            .execute_batch(MIGRATION_001)
            .await
            .map_err(|e| DatabaseError::Migration(format!("001_initial: {e}")))?;
        tracing::debug!("migrations applied");
        Ok(())
    }
}
