//! Core domain logic for SeminarHub.
//!
//! This crate provides:
//! - Seminar form validation with per-field error messages
//! - The fixed-format date-time parser
//! - Field length constants shared with the database schema

pub mod seminar;

pub use seminar::datetime::{DateTimeParseError, format_date_and_time, parse_date_and_time};
pub use seminar::form::{FieldErrors, SeminarForm, ValidatedSeminar};
