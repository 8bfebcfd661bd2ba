//! Seminar form validation.
//!
//! A submitted form is validated as a whole: every field is checked and all
//! failures are collected into [`FieldErrors`] so the caller can redisplay
//! the form with per-field messages.

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::constants::{
    DETAILS_MAX_LENGTH, DETAILS_MIN_LENGTH, LECTURER_MAX_LENGTH, LECTURER_MIN_LENGTH,
    TOPIC_MAX_LENGTH, TOPIC_MIN_LENGTH,
};
use super::datetime::parse_date_and_time;

/// Raw seminar form fields as submitted by the user.
#[derive(Debug, Clone, Deserialize)]
pub struct SeminarForm {
    /// Seminar topic.
    pub topic: String,
    /// Lecturer name.
    pub lecturer: String,
    /// Seminar details.
    pub details: String,
    /// Date-time string in `dd/MM/yyyy HH:mm` format.
    pub date_and_time: String,
    /// Duration (unit unspecified by the schema).
    pub duration: i32,
    /// Category ID.
    pub category_id: i32,
}

/// A seminar form that passed validation, with the date-time parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedSeminar {
    /// Seminar topic.
    pub topic: String,
    /// Lecturer name.
    pub lecturer: String,
    /// Seminar details.
    pub details: String,
    /// Parsed schedule.
    pub date_and_time: NaiveDateTime,
    /// Duration.
    pub duration: i32,
    /// Category ID.
    pub category_id: i32,
}

/// Per-field validation messages, keyed by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors {
    errors: BTreeMap<&'static str, Vec<String>>,
}

impl FieldErrors {
    /// Adds a message for a field.
    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.entry(field).or_default().push(message.into());
    }

    /// Returns true if no field has any message.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Returns the messages recorded for a field, if any.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.errors.get(field).map(Vec::as_slice)
    }
}

/// Checks a required text field against its length bounds.
fn check_text_field(
    errors: &mut FieldErrors,
    field: &'static str,
    label: &str,
    value: &str,
    min: usize,
    max: usize,
) {
    if value.trim().is_empty() {
        errors.add(field, format!("The field {label} is required"));
        return;
    }

    let len = value.chars().count();
    if len < min || len > max {
        errors.add(
            field,
            format!("The field {label} must be between {min} and {max} characters long"),
        );
    }
}

impl SeminarForm {
    /// Validates the form, collecting all field failures.
    ///
    /// # Errors
    ///
    /// Returns `FieldErrors` with one entry per failing field; no field is
    /// skipped on an earlier failure.
    pub fn validate(self) -> Result<ValidatedSeminar, FieldErrors> {
        let mut errors = FieldErrors::default();

        check_text_field(
            &mut errors,
            "topic",
            "Topic",
            &self.topic,
            TOPIC_MIN_LENGTH,
            TOPIC_MAX_LENGTH,
        );
        check_text_field(
            &mut errors,
            "lecturer",
            "Lecturer",
            &self.lecturer,
            LECTURER_MIN_LENGTH,
            LECTURER_MAX_LENGTH,
        );
        check_text_field(
            &mut errors,
            "details",
            "Details",
            &self.details,
            DETAILS_MIN_LENGTH,
            DETAILS_MAX_LENGTH,
        );

        let date_and_time = if self.date_and_time.trim().is_empty() {
            errors.add("date_and_time", "The field DateAndTime is required");
            None
        } else {
            match parse_date_and_time(&self.date_and_time) {
                Ok(parsed) => Some(parsed),
                Err(e) => {
                    errors.add("date_and_time", e.to_string());
                    None
                }
            }
        };

        match (errors.is_empty(), date_and_time) {
            (true, Some(date_and_time)) => Ok(ValidatedSeminar {
                topic: self.topic,
                lecturer: self.lecturer,
                details: self.details,
                date_and_time,
                duration: self.duration,
                category_id: self.category_id,
            }),
            _ => Err(errors),
        }
    }
}
