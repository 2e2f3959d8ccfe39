//! Input rules shared by the HTTP API and the CLI.

use crate::errors::CoreError;

pub const USERNAME_MIN_LEN: usize = 3;
pub const USERNAME_MAX_LEN: usize = 20;

/// Longest free-text adjustment accepted for a resubmission.
pub const ADJUSTMENTS_MAX_LEN: usize = 2_000;

/// Check a username: 3-20 ASCII letters, digits, or underscores.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] when the username is empty or breaks the rule.
pub fn validate_username(username: &str) -> Result<(), CoreError> {
    if username.is_empty() {
        return Err(CoreError::validation("Username is required"));
    }
    let len_ok = (USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&username.len());
    let chars_ok = username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_');
    if !len_ok || !chars_ok {
        return Err(CoreError::validation(
            "Invalid username. Username must be 3-20 characters long and contain only letters, numbers, and underscores.",
        ));
    }
    Ok(())
}

/// Normalize an adjustment instruction, rejecting blank or oversized input.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] when the text is blank or too long.
pub fn normalize_adjustments(raw: &str) -> Result<&str, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::validation("Please fill in the adjustments"));
    }
    if trimmed.chars().count() > ADJUSTMENTS_MAX_LEN {
        return Err(CoreError::validation(format!(
            "Adjustments must be at most {ADJUSTMENTS_MAX_LEN} characters"
        )));
    }
    Ok(trimmed)
}

/// Check the two halves of a bookmarked solution.
///
/// # Errors
///
/// Returns [`CoreError::Validation`] when either half is blank.
pub fn validate_card(title: &str, description: &str) -> Result<(), CoreError> {
    if title.trim().is_empty() || description.trim().is_empty() {
        return Err(CoreError::validation(
            "A saved card needs both a title and a description",
        ));
    }
    Ok(())
}
