//! Mock-database tests for the seminar repository.
//!
//! Covers the ownership guard on mutation paths and the listing/details
//! projections.

use std::collections::BTreeMap;

use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};
use uuid::Uuid;

use super::seminar::{CreateSeminarInput, SeminarError, SeminarRepository, UpdateSeminarInput};
use crate::entities::seminars;

fn schedule() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2026, 9, 15)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap()
}

fn seminar_row(id: i32, organizer_id: Uuid) -> seminars::Model {
    seminars::Model {
        id,
        topic: "Intro to Databases".to_string(),
        lecturer: "Edgar Codd".to_string(),
        details: "Relational model fundamentals.".to_string(),
        organizer_id,
        date_and_time: schedule(),
        duration: 60,
        category_id: 1,
        created_at: chrono::Utc::now().into(),
    }
}

#[tokio::test]
async fn update_by_non_organizer_is_rejected() {
    let organizer = Uuid::new_v4();
    let intruder = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![seminar_row(1, organizer)]])
        .into_connection();

    let repo = SeminarRepository::new(db);
    let input = UpdateSeminarInput {
        topic: "Hijacked".to_string(),
        lecturer: "Somebody Else".to_string(),
        details: "Entirely valid payload.".to_string(),
        date_and_time: schedule(),
        duration: 30,
        category_id: 1,
    };

    let result = repo.update(1, intruder, input).await;
    assert!(matches!(result, Err(SeminarError::NotOrganizer)));
}

#[tokio::test]
async fn update_overwrites_all_fields() {
    let organizer = Uuid::new_v4();
    let mut updated = seminar_row(1, organizer);
    updated.topic = "Advanced Databases".to_string();
    updated.lecturer = "Michael Stonebraker".to_string();
    updated.details = "Query optimization and storage engines.".to_string();
    updated.duration = 120;
    updated.category_id = 2;

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![seminar_row(1, organizer)], vec![updated.clone()]])
        .into_connection();

    let repo = SeminarRepository::new(db);
    let input = UpdateSeminarInput {
        topic: updated.topic.clone(),
        lecturer: updated.lecturer.clone(),
        details: updated.details.clone(),
        date_and_time: updated.date_and_time,
        duration: updated.duration,
        category_id: updated.category_id,
    };

    let result = repo.update(1, organizer, input).await.unwrap();
    assert_eq!(result, updated);
}

#[tokio::test]
async fn delete_missing_seminar_is_rejected() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<seminars::Model>::new()])
        .into_connection();

    let repo = SeminarRepository::new(db);
    let result = repo.delete(99, Uuid::new_v4()).await;

    assert!(matches!(result, Err(SeminarError::NotFound(99))));
}

#[tokio::test]
async fn delete_by_non_organizer_is_rejected() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![seminar_row(1, Uuid::new_v4())]])
        .into_connection();

    let repo = SeminarRepository::new(db);
    let result = repo.delete(1, Uuid::new_v4()).await;

    assert!(matches!(result, Err(SeminarError::NotOrganizer)));
}

#[tokio::test]
async fn delete_by_organizer_succeeds() {
    let organizer = Uuid::new_v4();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![seminar_row(1, organizer)]])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    let repo = SeminarRepository::new(db);
    assert!(repo.delete(1, organizer).await.is_ok());
}

#[tokio::test]
async fn create_persists_submitted_fields() {
    let organizer = Uuid::new_v4();
    let mut created = seminar_row(5, organizer);
    created.topic = "Rust for Backend Engineers".to_string();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![created.clone()]])
        .append_exec_results([MockExecResult {
            last_insert_id: 5,
            rows_affected: 1,
        }])
        .into_connection();

    let repo = SeminarRepository::new(db);
    let input = CreateSeminarInput {
        topic: created.topic.clone(),
        lecturer: created.lecturer.clone(),
        details: created.details.clone(),
        organizer_id: organizer,
        date_and_time: created.date_and_time,
        duration: created.duration,
        category_id: created.category_id,
    };

    let result = repo.create(input).await.unwrap();
    assert_eq!(result.id, 5);
    assert_eq!(result.organizer_id, organizer);
    assert_eq!(result.topic, "Rust for Backend Engineers");
}

#[tokio::test]
async fn list_all_projects_category_and_organizer_names() {
    let row = BTreeMap::<&str, Value>::from([
        ("id", 1i32.into()),
        ("topic", "Intro to Databases".into()),
        ("lecturer", "Edgar Codd".into()),
        ("date_and_time", schedule().into()),
        ("category", "Technology".into()),
        ("organizer", "ada".into()),
    ]);

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![row]])
        .into_connection();

    let repo = SeminarRepository::new(db);
    let summaries = repo.list_all().await.unwrap();

    assert_eq!(summaries.len(), 1);
    assert_eq!(summaries[0].category, "Technology");
    assert_eq!(summaries[0].organizer, "ada");
    assert_eq!(summaries[0].date_and_time, schedule());
}

#[tokio::test]
async fn details_of_missing_seminar_is_rejected() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<BTreeMap<&str, Value>>::new()])
        .into_connection();

    let repo = SeminarRepository::new(db);
    let result = repo.get_details(404).await;

    assert!(matches!(result, Err(SeminarError::NotFound(404))));
}
