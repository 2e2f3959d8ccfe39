//! # clarity-config
//!
//! Layered configuration loading for Clarity using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`CLARITY_*` prefix, `__` as separator)
//! 2. `GOOGLE_API_KEY`, mapped onto `gemini.api_key`
//! 3. Project-level `.clarity/config.toml`
//! 4. User-level `~/.config/clarity/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `CLARITY_GEMINI__API_KEY` -> `gemini.api_key`,
//! `CLARITY_SERVER__BIND` -> `server.bind`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use clarity_config::ClarityConfig;
//!
//! let config = ClarityConfig::load_with_dotenv().expect("config");
//!
//! if config.gemini.is_configured() {
//!     println!("Model: {}", config.gemini.model);
//! }
//! ```

mod database;
mod error;
mod gemini;
mod general;
mod server;

pub use database::DatabaseConfig;
pub use error::ConfigError;
pub use gemini::GeminiConfig;
pub use general::GeneralConfig;
pub use server::ServerConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for every Clarity setting.
pub const ENV_PREFIX: &str = "CLARITY_";

/// Prefixed variable holding the Gemini API key.
pub const API_KEY_VAR: &str = "CLARITY_GEMINI__API_KEY";

/// Legacy variable holding the Gemini API key.
pub const LEGACY_API_KEY_VAR: &str = "GOOGLE_API_KEY";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ClarityConfig {
    #[serde(default)]
    pub gemini: GeminiConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl ClarityConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`load_with_dotenv`](Self::load_with_dotenv)
    /// for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction fails or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if extraction or validation fails.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect it or layer extra providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".clarity/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment = figment.merge(
            Env::raw()
                .only(&[LEGACY_API_KEY_VAR])
                .map(|_| "gemini.api_key".into()),
        );

        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Check cross-field constraints that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.gemini.validate()?;
        if self.server.max_body_bytes == 0 {
            return Err(ConfigError::invalid("server.max_body_bytes", "must be at least 1"));
        }
        if self.general.default_limit == 0 {
            return Err(ConfigError::invalid("general.default_limit", "must be at least 1"));
        }
        Ok(())
    }

    /// Require a Gemini API key, for commands that call the model.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingApiKey`] when no key is set.
    pub fn require_gemini(&self) -> Result<&GeminiConfig, ConfigError> {
        if self.gemini.is_configured() {
            Ok(&self.gemini)
        } else {
            Err(ConfigError::MissingApiKey)
        }
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("clarity").join("config.toml"))
    }

    /// Load `.env` from the current directory or the nearest ancestor holding one.
    fn load_dotenv() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}
