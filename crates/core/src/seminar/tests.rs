//! Unit tests for seminar form validation and date-time parsing.

use chrono::{NaiveDate, NaiveDateTime};
use rstest::rstest;

use super::datetime::{format_date_and_time, parse_date_and_time};
use super::form::SeminarForm;

fn valid_form() -> SeminarForm {
    SeminarForm {
        topic: "Rust for Backend Engineers".to_string(),
        lecturer: "Grace Hopper".to_string(),
        details: "A deep dive into ownership, borrowing, and async Rust.".to_string(),
        date_and_time: "15/09/2026 14:30".to_string(),
        duration: 90,
        category_id: 1,
    }
}

fn expected_schedule() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 9, 15)
        .unwrap()
        .and_hms_opt(14, 30, 0)
        .unwrap()
}

#[test]
fn valid_form_passes() {
    let validated = valid_form().validate().expect("form should be valid");

    assert_eq!(validated.topic, "Rust for Backend Engineers");
    assert_eq!(validated.lecturer, "Grace Hopper");
    assert_eq!(validated.date_and_time, expected_schedule());
    assert_eq!(validated.duration, 90);
    assert_eq!(validated.category_id, 1);
}

#[rstest]
#[case("ab")] // below minimum of 3
#[case("")]
fn short_topic_rejected(#[case] topic: &str) {
    let form = SeminarForm {
        topic: topic.to_string(),
        ..valid_form()
    };

    let errors = form.validate().expect_err("topic should be rejected");
    assert!(errors.get("topic").is_some());
    assert!(errors.get("lecturer").is_none());
}

#[test]
fn overlong_topic_rejected() {
    let form = SeminarForm {
        topic: "x".repeat(101),
        ..valid_form()
    };

    let errors = form.validate().expect_err("topic should be rejected");
    assert_eq!(
        errors.get("topic").unwrap()[0],
        "The field Topic must be between 3 and 100 characters long"
    );
}

#[rstest]
#[case("Anna", "lecturer")] // 4 chars, minimum is 5
#[case("", "lecturer")]
fn short_lecturer_rejected(#[case] lecturer: &str, #[case] field: &str) {
    let form = SeminarForm {
        lecturer: lecturer.to_string(),
        ..valid_form()
    };

    let errors = form.validate().expect_err("lecturer should be rejected");
    assert!(errors.get(field).is_some());
}

#[test]
fn short_details_rejected() {
    let form = SeminarForm {
        details: "too short".to_string(), // 9 chars, minimum is 10
        ..valid_form()
    };

    let errors = form.validate().expect_err("details should be rejected");
    assert!(errors.get("details").is_some());
}

#[test]
fn boundary_lengths_accepted() {
    let form = SeminarForm {
        topic: "x".repeat(3),
        lecturer: "y".repeat(60),
        details: "z".repeat(500),
        ..valid_form()
    };

    assert!(form.validate().is_ok());
}

#[test]
fn length_counts_chars_not_bytes() {
    // 3 multi-byte characters meet the topic minimum.
    let form = SeminarForm {
        topic: "äöü".to_string(),
        ..valid_form()
    };

    assert!(form.validate().is_ok());
}

#[test]
fn all_failures_collected() {
    let form = SeminarForm {
        topic: "ab".to_string(),
        lecturer: "cd".to_string(),
        details: "ef".to_string(),
        date_and_time: "not a date".to_string(),
        duration: 60,
        category_id: 1,
    };

    let errors = form.validate().expect_err("everything should fail");
    assert!(errors.get("topic").is_some());
    assert!(errors.get("lecturer").is_some());
    assert!(errors.get("details").is_some());
    assert!(errors.get("date_and_time").is_some());
}

#[test]
fn field_errors_serialize_as_map() {
    let form = SeminarForm {
        topic: "ab".to_string(),
        ..valid_form()
    };

    let errors = form.validate().unwrap_err();
    let json = serde_json::to_value(&errors).unwrap();
    assert!(json.get("topic").is_some());
}

#[rstest]
#[case("2024-01-01 10:00")] // ISO shape, wrong separators
#[case("15/09/2026")] // date only
#[case("15/09/2026 14:30:00")] // trailing seconds
#[case("1/9/2026 14:30")] // unpadded components
#[case("32/01/2026 10:00")] // no such day
#[case("15/13/2026 10:00")] // no such month
#[case("15/09/2026 24:00")] // no such hour
#[case("")]
fn malformed_date_rejected(#[case] input: &str) {
    assert!(parse_date_and_time(input).is_err());
}

#[test]
fn date_parse_round_trip() {
    let parsed = parse_date_and_time("15/09/2026 14:30").unwrap();
    assert_eq!(parsed, expected_schedule());
    assert_eq!(format_date_and_time(parsed), "15/09/2026 14:30");
}

#[test]
fn date_error_names_the_format() {
    let err = parse_date_and_time("2024-01-01 10:00").unwrap_err();
    assert_eq!(err.to_string(), "Invalid date! Format must be: dd/MM/yyyy HH:mm");
}
