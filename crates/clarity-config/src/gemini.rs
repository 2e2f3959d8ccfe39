//! Gemini completion provider configuration.

use serde::{Deserialize, Serialize};

use crate::ConfigError;

fn default_model() -> String {
    String::from("gemini-2.0-flash")
}

fn default_base_url() -> String {
    String::from("https://generativelanguage.googleapis.com/v1beta")
}

const fn default_timeout_secs() -> u64 {
    60
}

const fn default_max_attempts() -> u32 {
    3
}

const fn default_base_delay_ms() -> u64 {
    500
}

const fn default_max_delay_ms() -> u64 {
    8_000
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeminiConfig {
    /// API key sent as `x-goog-api-key`. Also read from `GOOGLE_API_KEY`.
    #[serde(default)]
    pub api_key: String,

    /// Model name, e.g. `gemini-2.0-flash`.
    #[serde(default = "default_model")]
    pub model: String,

    /// API root without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Total attempts for a transient failure, including the first.
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// First retry delay in milliseconds; doubles per attempt.
    #[serde(default = "default_base_delay_ms")]
    pub base_delay_ms: u64,

    /// Upper bound on a single retry delay in milliseconds.
    #[serde(default = "default_max_delay_ms")]
    pub max_delay_ms: u64,
}

impl Default for GeminiConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            max_attempts: default_max_attempts(),
            base_delay_ms: default_base_delay_ms(),
            max_delay_ms: default_max_delay_ms(),
        }
    }
}

impl GeminiConfig {
    /// Check if an API key is available.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Reject values that would make the client unusable.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.model.trim().is_empty() {
            return Err(ConfigError::invalid("gemini.model", "must not be empty"));
        }
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::invalid("gemini.base_url", "must be an http(s) URL"));
        }
        if self.timeout_secs == 0 {
            return Err(ConfigError::invalid("gemini.timeout_secs", "must be at least 1"));
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::invalid("gemini.max_attempts", "must be at least 1"));
        }
        if self.base_delay_ms > self.max_delay_ms {
            return Err(ConfigError::invalid(
                "gemini.base_delay_ms",
                "must not exceed gemini.max_delay_ms",
            ));
        }
        Ok(())
    }
}
