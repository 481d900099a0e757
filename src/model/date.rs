// ISO calendar dates.
//
// Dates stay plain "YYYY-MM-DD" strings everywhere because lexicographic
// order on that shape is chronological order. chrono only checks that the
// day actually exists.

use crate::error::{Result, TimesheetError};
use chrono::NaiveDate;

const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// True if `value` is exactly `YYYY-MM-DD` and names a real day
pub fn is_calendar_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    let shaped = bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit());

    shaped && NaiveDate::parse_from_str(value, ISO_DATE_FORMAT).is_ok()
}

/// Validate a user-supplied range bound
pub fn parse_date_bound(value: &str) -> Result<String> {
    let trimmed = value.trim();
    if is_calendar_date(trimmed) {
        Ok(trimmed.to_string())
    } else {
        Err(TimesheetError::InvalidDate(value.to_string()))
    }
}

/// Parse an already validated date into chrono's type
pub(crate) fn to_naive(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, ISO_DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calendar_dates() {
        assert!(is_calendar_date("2025-07-01"));
        assert!(is_calendar_date("2024-02-29"));
        assert!(!is_calendar_date("2025-02-29"));
        assert!(!is_calendar_date("2025-13-01"));
        assert!(!is_calendar_date("2025-7-1"));
        assert!(!is_calendar_date("20250701"));
        assert!(!is_calendar_date(""));
    }

    #[test]
    fn test_parse_date_bound() {
        assert_eq!(parse_date_bound(" 2025-07-02 ").unwrap(), "2025-07-02");

        match parse_date_bound("July 2nd") {
            Err(TimesheetError::InvalidDate(value)) => assert_eq!(value, "July 2nd"),
            other => panic!("Expected InvalidDate, got {:?}", other),
        }
    }
}
