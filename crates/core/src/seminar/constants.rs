//! Field length bounds and the seminar date-time format.
//!
//! The bounds here mirror the column widths in the database schema; change
//! them together.

/// Minimum topic length.
pub const TOPIC_MIN_LENGTH: usize = 3;
/// Maximum topic length.
pub const TOPIC_MAX_LENGTH: usize = 100;

/// Minimum lecturer name length.
pub const LECTURER_MIN_LENGTH: usize = 5;
/// Maximum lecturer name length.
pub const LECTURER_MAX_LENGTH: usize = 60;

/// Minimum details length.
pub const DETAILS_MIN_LENGTH: usize = 10;
/// Maximum details length.
pub const DETAILS_MAX_LENGTH: usize = 500;

/// Maximum category name length.
pub const CATEGORY_NAME_MAX_LENGTH: usize = 50;

/// The chrono format string for seminar date-times.
pub const DATE_TIME_FORMAT: &str = "%d/%m/%Y %H:%M";

/// The date-time format as shown to users in error messages and forms.
pub const DATE_TIME_FORMAT_DISPLAY: &str = "dd/MM/yyyy HH:mm";
