//! libSQL store configuration.

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    String::from(".clarity/clarity.db")
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DatabaseConfig {
    /// Local database file. `:memory:` opens a throwaway in-memory store.
    #[serde(default = "default_path")]
    pub path: String,

    /// Remote database URL (e.g., `libsql://mydb.turso.io`).
    #[serde(default)]
    pub url: String,

    /// Remote database auth token.
    #[serde(default)]
    pub auth_token: String,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            url: String::new(),
            auth_token: String::new(),
        }
    }
}

impl DatabaseConfig {
    /// Whether the store should connect to a remote libSQL server.
    #[must_use]
    pub fn is_remote(&self) -> bool {
        !self.url.is_empty() && !self.auth_token.is_empty()
    }

    #[must_use]
    pub fn is_in_memory(&self) -> bool {
        self.path == ":memory:"
    }
}
