//! Service layer hosting every repository method.
//!
//! `ClarityService` wraps `ClarityDb`. All repo methods are implemented as
//! `impl ClarityService` blocks under `repos/`.

use std::path::Path;

use clarity_config::DatabaseConfig;

use crate::ClarityDb;
use crate::error::DatabaseError;

pub struct ClarityService {
    db: ClarityDb,
}

impl ClarityService {
    /// Create a service over a local database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = ClarityDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create a service backed by a remote libSQL server.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the connection fails.
    pub async fn new_remote(url: &str, auth_token: &str) -> Result<Self, DatabaseError> {
        let db = ClarityDb::open_remote(url, auth_token).await?;
        Ok(Self { db })
    }

    /// Open the store described by the `[database]` config section.
    ///
    /// Remote mode wins when both `url` and `auth_token` are set. For a local
    /// file the parent directory is created if missing.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the directory cannot be created or the
    /// database cannot be opened.
    pub async fn from_config(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        if config.is_remote() {
            tracing::info!(url = %config.url, "opening remote database");
            return Self::new_remote(&config.url, &config.auth_token).await;
        }

        if !config.is_in_memory() {
            if let Some(parent) = Path::new(&config.path).parent() {
                if !parent.as_os_str().is_empty() {
                    tokio::fs::create_dir_all(parent).await.map_err(|e| {
                        DatabaseError::Other(anyhow::anyhow!(
                            "creating database directory {}: {e}",
                            parent.display()
                        ))
                    })?;
                }
            }
        }
        tracing::info!(path = %config.path, "opening local database");
        Self::new_local(&config.path).await
    }

    /// Create from an existing `ClarityDb`.
    #[must_use]
    pub const fn from_db(db: ClarityDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &ClarityDb {
        &self.db
    }
}
