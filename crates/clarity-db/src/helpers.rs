//! Row-to-entity parsing helpers.
//!
//! Timestamps are written as fixed-width RFC 3339 with microseconds and a `Z`
//! suffix, so lexical order in SQL equals chronological order.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};

use crate::error::DatabaseError;

/// Current time truncated to the precision stored in the database.
#[must_use]
pub fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}

/// Format a timestamp for storage.
#[must_use]
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Parse a required TEXT column as `DateTime<Utc>`.
///
/// Handles both RFC 3339 (`"2026-02-09T14:30:00.000000Z"`) and `SQLite`'s
/// default format (`"2026-02-09 14:30:00"`).
///
/// # Errors
///
/// Returns `DatabaseError::Query` if the string cannot be parsed as either format.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, DatabaseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .map_err(|e| DatabaseError::Query(format!("Failed to parse datetime '{s}': {e}")))
}

/// Read a nullable TEXT column. Returns `None` for both SQL NULL and empty string.
///
/// `row.get::<String>(idx)` on a NULL column returns an error, not `""`.
///
/// # Errors
///
/// Returns `DatabaseError` if the column read fails.
pub fn get_opt_string(row: &libsql::Row, idx: i32) -> Result<Option<String>, DatabaseError> {
    match row.get::<Option<String>>(idx)? {
        Some(s) if s.is_empty() => Ok(None),
        other => Ok(other),
    }
}

/// Read an INTEGER rating column.
///
/// # Errors
///
/// Returns `DatabaseError::InvalidState` if the stored value does not fit a rating.
pub fn get_rating(row: &libsql::Row, idx: i32) -> Result<u8, DatabaseError> {
    let raw = row.get::<i64>(idx)?;
    u8::try_from(raw).map_err(|_| {
        DatabaseError::InvalidState(format!("rating out of range in column {idx}: {raw}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn stored_timestamps_are_fixed_width() {
        let early = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        let formatted = format_datetime(&early);
        assert_eq!(formatted, "2026-01-02T03:04:05.000000Z");
        assert_eq!(formatted.len(), format_datetime(&now()).len());
    }

    #[test]
    fn parse_accepts_both_formats() {
        let a = parse_datetime("2026-01-02T03:04:05.000000Z").unwrap();
        let b = parse_datetime("2026-01-02 03:04:05").unwrap();
        assert_eq!(a, b);
        assert!(parse_datetime("yesterday").is_err());
    }

    #[test]
    fn now_survives_a_storage_roundtrip() {
        let t = now();
        assert_eq!(parse_datetime(&format_datetime(&t)).unwrap(), t);
    }
}
