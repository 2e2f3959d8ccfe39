//! Errors raised while loading or checking Clarity configuration.

use thiserror::Error;

use crate::{API_KEY_VAR, LEGACY_API_KEY_VAR};

#[derive(Debug, Error)]
pub enum ConfigError {
    /// A TOML file or environment value could not be read into the config.
    #[error("failed to read clarity configuration: {0}")]
    Figment(#[from] figment::Error),

    /// A command that calls the model ran without a Gemini API key.
    #[error("no Gemini API key configured; set {} or {}", API_KEY_VAR, LEGACY_API_KEY_VAR)]
    MissingApiKey,

    /// A value parsed but is outside what Clarity can run with.
    #[error("invalid value for `{field}`: {reason}")]
    InvalidValue {
        field: &'static str,
        reason: &'static str,
    },
}

impl ConfigError {
    pub(crate) const fn invalid(field: &'static str, reason: &'static str) -> Self {
        Self::InvalidValue { field, reason }
    }

    /// Dotted path of the offending setting, when one is known.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::InvalidValue { field, .. } => Some(*field),
            Self::MissingApiKey => Some("gemini.api_key"),
            Self::Figment(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_names_both_variables() {
        let message = ConfigError::MissingApiKey.to_string();
        assert!(message.contains("CLARITY_GEMINI__API_KEY"));
        assert!(message.contains("GOOGLE_API_KEY"));
        assert_eq!(ConfigError::MissingApiKey.field(), Some("gemini.api_key"));
    }

    #[test]
    fn invalid_value_reports_its_field() {
        let err = ConfigError::invalid("server.bind", "must be host:port");
        assert_eq!(err.field(), Some("server.bind"));
        assert_eq!(err.to_string(), "invalid value for `server.bind`: must be host:port");
    }
}
