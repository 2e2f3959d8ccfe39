//! Cross-cutting error types for Clarity.
//!
//! Domain-specific errors (e.g., `DatabaseError`, `CoachError`) are defined in
//! their respective crates. HTTP mapping happens in `clarity-api`, and
//! everything converges on `anyhow` in `clarity-cli`.

use thiserror::Error;

/// Errors that can be raised by any Clarity crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (format, ranges, completeness).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl CoreError {
    /// Shorthand for a [`CoreError::Validation`] with a display message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// The message to show an end user: the bare validation text, or the
    /// display form for other variants.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            other => other.to_string(),
        }
    }
}
