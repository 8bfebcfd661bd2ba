//! Fixed-format date-time parsing for seminar schedules.
//!
//! Seminar times are submitted and displayed as `dd/MM/yyyy HH:mm` with no
//! timezone, so they are kept as `NaiveDateTime` throughout.

use chrono::NaiveDateTime;
use thiserror::Error;

use super::constants::{DATE_TIME_FORMAT, DATE_TIME_FORMAT_DISPLAY};

/// Error returned when a submitted date-time string does not match the
/// expected format.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid date! Format must be: {DATE_TIME_FORMAT_DISPLAY}")]
pub struct DateTimeParseError;

/// Parses a seminar date-time string.
///
/// The format is fixed-width (`dd/MM/yyyy HH:mm`, 16 characters), so inputs
/// with unpadded components are rejected even though chrono would accept
/// them.
///
/// # Errors
///
/// Returns `DateTimeParseError` if the string does not match the format
/// exactly.
pub fn parse_date_and_time(input: &str) -> Result<NaiveDateTime, DateTimeParseError> {
    if input.len() != DATE_TIME_FORMAT_DISPLAY.len() {
        return Err(DateTimeParseError);
    }

    NaiveDateTime::parse_from_str(input, DATE_TIME_FORMAT).map_err(|_| DateTimeParseError)
}

/// Formats a seminar date-time back into the submission format.
#[must_use]
pub fn format_date_and_time(date_and_time: NaiveDateTime) -> String {
    date_and_time.format(DATE_TIME_FORMAT).to_string()
}
