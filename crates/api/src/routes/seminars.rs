//! Seminar routes: listing, join/leave, and organizer CRUD.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{error, info};

use crate::{AppState, middleware::AuthUser, routes::error_response};
use seminarhub_core::{FieldErrors, SeminarForm, ValidatedSeminar, format_date_and_time};
use seminarhub_db::{
    CategoryRepository, ParticipantRepository, SeminarRepository,
    repositories::participant::ParticipantError,
    repositories::seminar::{CreateSeminarInput, SeminarError, UpdateSeminarInput},
};
use seminarhub_shared::AppError;

use super::categories::CategoryResponse;

/// Creates the seminar routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/seminars", get(list_seminars))
        .route("/seminars", post(create_seminar))
        .route("/seminars/joined", get(joined_seminars))
        .route("/seminars/{id}", get(seminar_details))
        .route("/seminars/{id}", put(update_seminar))
        .route("/seminars/{id}", delete(delete_seminar))
        .route("/seminars/{id}/edit", get(edit_form))
        .route("/seminars/{id}/delete", get(delete_confirmation))
        .route("/seminars/{id}/join", post(join_seminar))
        .route("/seminars/{id}/leave", post(leave_seminar))
}

// ============================================================================
// Request/Response Types
// ============================================================================

/// Request body shared by Create and Edit.
#[derive(Debug, Deserialize)]
pub struct SeminarFormRequest {
    /// Seminar topic.
    pub topic: String,
    /// Lecturer name.
    pub lecturer: String,
    /// Seminar details.
    pub details: String,
    /// Date-time string in `dd/MM/yyyy HH:mm` format.
    pub date_and_time: String,
    /// Duration.
    pub duration: i32,
    /// Category ID.
    pub category_id: i32,
}

impl SeminarFormRequest {
    fn into_form(self) -> SeminarForm {
        SeminarForm {
            topic: self.topic,
            lecturer: self.lecturer,
            details: self.details,
            date_and_time: self.date_and_time,
            duration: self.duration,
            category_id: self.category_id,
        }
    }
}

/// Summary row for the listings.
#[derive(Debug, Serialize)]
pub struct SeminarSummaryResponse {
    /// Seminar ID.
    pub id: i32,
    /// Seminar topic.
    pub topic: String,
    /// Lecturer name.
    pub lecturer: String,
    /// Formatted date-time.
    pub date_and_time: String,
    /// Category name.
    pub category: String,
    /// Organizer display name.
    pub organizer: String,
}

/// Form state returned by the edit-form endpoint, ready for redisplay.
#[derive(Debug, Serialize)]
pub struct SeminarFormResponse {
    /// Seminar topic.
    pub topic: String,
    /// Lecturer name.
    pub lecturer: String,
    /// Seminar details.
    pub details: String,
    /// Formatted date-time.
    pub date_and_time: String,
    /// Duration.
    pub duration: i32,
    /// Category ID.
    pub category_id: i32,
    /// Available categories.
    pub categories: Vec<CategoryResponse>,
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Loads the category list for form (re)display.
async fn category_options(state: &AppState) -> Result<Vec<CategoryResponse>, Response> {
    let repo = CategoryRepository::new((*state.db).clone());

    match repo.list().await {
        Ok(categories) => Ok(categories
            .into_iter()
            .map(|c| CategoryResponse {
                id: c.id,
                name: c.name,
            })
            .collect()),
        Err(e) => {
            error!(error = %e, "Failed to list categories");
            Err(error_response(&AppError::Database(e.to_string())))
        }
    }
}

/// Builds the validation-failure response: per-field messages plus the
/// category list, so the client can redisplay the form. Nothing is
/// persisted.
async fn validation_failure(state: &AppState, errors: FieldErrors) -> Response {
    let categories = match category_options(state).await {
        Ok(categories) => categories,
        Err(response) => return response,
    };

    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "error": "validation_failed",
            "message": "One or more fields are invalid",
            "errors": errors,
            "categories": categories
        })),
    )
        .into_response()
}

/// Maps seminar repository errors to HTTP responses.
fn map_seminar_error(e: &SeminarError) -> Response {
    match e {
        SeminarError::NotFound(id) => {
            error_response(&AppError::NotFound(format!("Seminar not found: {id}")))
        }
        SeminarError::NotOrganizer => error_response(&AppError::Forbidden(
            "You are not the organizer of this seminar".to_string(),
        )),
        SeminarError::Database(_) => {
            error!(error = %e, "Seminar operation failed");
            error_response(&AppError::Database(e.to_string()))
        }
    }
}

/// Maps participant repository errors to HTTP responses.
fn map_participant_error(e: &ParticipantError) -> Response {
    match e {
        ParticipantError::SeminarNotFound(id) => {
            error_response(&AppError::NotFound(format!("Seminar not found: {id}")))
        }
        ParticipantError::NotJoined => error_response(&AppError::NotFound(
            "You have not joined this seminar".to_string(),
        )),
        ParticipantError::Database(_) => {
            error!(error = %e, "Participant operation failed");
            error_response(&AppError::Database(e.to_string()))
        }
    }
}

/// Serializes a stored seminar back into its form shape.
fn seminar_json(seminar: &seminarhub_db::entities::seminars::Model) -> serde_json::Value {
    json!({
        "id": seminar.id,
        "topic": seminar.topic,
        "lecturer": seminar.lecturer,
        "details": seminar.details,
        "date_and_time": format_date_and_time(seminar.date_and_time),
        "duration": seminar.duration,
        "category_id": seminar.category_id,
        "organizer_id": seminar.organizer_id
    })
}

// ============================================================================
// Route Handlers
// ============================================================================

/// GET `/seminars` - List all seminars with category and organizer names.
async fn list_seminars(State(state): State<AppState>, _auth: AuthUser) -> impl IntoResponse {
    let repo = SeminarRepository::new((*state.db).clone());

    match repo.list_all().await {
        Ok(seminars) => {
            let response: Vec<SeminarSummaryResponse> = seminars
                .into_iter()
                .map(|s| SeminarSummaryResponse {
                    id: s.id,
                    topic: s.topic,
                    lecturer: s.lecturer,
                    date_and_time: format_date_and_time(s.date_and_time),
                    category: s.category,
                    organizer: s.organizer,
                })
                .collect();

            (StatusCode::OK, Json(json!({ "seminars": response }))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to list seminars");
            error_response(&AppError::Database(e.to_string()))
        }
    }
}

/// GET `/seminars/joined` - List the seminars the caller has joined.
async fn joined_seminars(State(state): State<AppState>, auth: AuthUser) -> impl IntoResponse {
    let repo = SeminarRepository::new((*state.db).clone());

    match repo.list_joined(auth.user_id()).await {
        Ok(seminars) => {
            let response: Vec<SeminarSummaryResponse> = seminars
                .into_iter()
                .map(|s| SeminarSummaryResponse {
                    id: s.id,
                    topic: s.topic,
                    lecturer: s.lecturer,
                    date_and_time: format_date_and_time(s.date_and_time),
                    category: s.category,
                    organizer: s.organizer,
                })
                .collect();

            (StatusCode::OK, Json(json!({ "seminars": response }))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to list joined seminars");
            error_response(&AppError::Database(e.to_string()))
        }
    }
}

/// POST `/seminars/{id}/join` - Join a seminar. Idempotent: a repeat join is
/// a no-op.
async fn join_seminar(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    let repo = ParticipantRepository::new((*state.db).clone());

    match repo.join(id, auth.user_id()).await {
        Ok(newly_joined) => {
            if newly_joined {
                info!(seminar_id = id, user_id = %auth.user_id(), "User joined seminar");
            }

            (
                StatusCode::OK,
                Json(json!({ "seminar_id": id, "joined": true })),
            )
                .into_response()
        }
        Err(e) => map_participant_error(&e),
    }
}

/// POST `/seminars/{id}/leave` - Leave a seminar. Fails with not-found when
/// no join row exists, including a retry after success.
async fn leave_seminar(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    let repo = ParticipantRepository::new((*state.db).clone());

    match repo.leave(id, auth.user_id()).await {
        Ok(()) => {
            info!(seminar_id = id, user_id = %auth.user_id(), "User left seminar");

            (
                StatusCode::OK,
                Json(json!({ "seminar_id": id, "left": true })),
            )
                .into_response()
        }
        Err(e) => map_participant_error(&e),
    }
}

/// POST `/seminars` - Create a new seminar owned by the caller.
async fn create_seminar(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(payload): Json<SeminarFormRequest>,
) -> impl IntoResponse {
    let validated = match payload.into_form().validate() {
        Ok(validated) => validated,
        Err(errors) => return validation_failure(&state, errors).await,
    };

    let repo = SeminarRepository::new((*state.db).clone());

    let ValidatedSeminar {
        topic,
        lecturer,
        details,
        date_and_time,
        duration,
        category_id,
    } = validated;

    let input = CreateSeminarInput {
        topic,
        lecturer,
        details,
        organizer_id: auth.user_id(),
        date_and_time,
        duration,
        category_id,
    };

    match repo.create(input).await {
        Ok(seminar) => {
            info!(
                seminar_id = seminar.id,
                organizer_id = %seminar.organizer_id,
                topic = %seminar.topic,
                "Seminar created"
            );

            (StatusCode::CREATED, Json(seminar_json(&seminar))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to create seminar");
            error_response(&AppError::Database(e.to_string()))
        }
    }
}

/// GET `/seminars/{id}/edit` - Current form fields for the edit page,
/// organizer only.
async fn edit_form(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    let repo = SeminarRepository::new((*state.db).clone());

    let seminar = match repo.find_owned(id, auth.user_id()).await {
        Ok(seminar) => seminar,
        Err(e) => return map_seminar_error(&e),
    };

    let categories = match category_options(&state).await {
        Ok(categories) => categories,
        Err(response) => return response,
    };

    (
        StatusCode::OK,
        Json(SeminarFormResponse {
            topic: seminar.topic,
            lecturer: seminar.lecturer,
            details: seminar.details,
            date_and_time: format_date_and_time(seminar.date_and_time),
            duration: seminar.duration,
            category_id: seminar.category_id,
            categories,
        }),
    )
        .into_response()
}

/// PUT `/seminars/{id}` - Overwrite all mutable fields, organizer only.
async fn update_seminar(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
    Json(payload): Json<SeminarFormRequest>,
) -> impl IntoResponse {
    let validated = match payload.into_form().validate() {
        Ok(validated) => validated,
        Err(errors) => return validation_failure(&state, errors).await,
    };

    let repo = SeminarRepository::new((*state.db).clone());

    let ValidatedSeminar {
        topic,
        lecturer,
        details,
        date_and_time,
        duration,
        category_id,
    } = validated;

    let input = UpdateSeminarInput {
        topic,
        lecturer,
        details,
        date_and_time,
        duration,
        category_id,
    };

    match repo.update(id, auth.user_id(), input).await {
        Ok(seminar) => {
            info!(seminar_id = id, organizer_id = %auth.user_id(), "Seminar updated");

            (StatusCode::OK, Json(seminar_json(&seminar))).into_response()
        }
        Err(e) => map_seminar_error(&e),
    }
}

/// GET `/seminars/{id}` - Full seminar projection, any authenticated user.
async fn seminar_details(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    let repo = SeminarRepository::new((*state.db).clone());

    match repo.get_details(id).await {
        Ok(details) => (
            StatusCode::OK,
            Json(json!({
                "id": details.id,
                "topic": details.topic,
                "lecturer": details.lecturer,
                "details": details.details,
                "date_and_time": format_date_and_time(details.date_and_time),
                "duration": details.duration,
                "category": details.category,
                "organizer": details.organizer
            })),
        )
            .into_response(),
        Err(e) => map_seminar_error(&e),
    }
}

/// GET `/seminars/{id}/delete` - Confirmation read before deletion,
/// organizer only.
async fn delete_confirmation(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    let repo = SeminarRepository::new((*state.db).clone());

    match repo.find_owned(id, auth.user_id()).await {
        Ok(seminar) => (
            StatusCode::OK,
            Json(json!({
                "id": seminar.id,
                "topic": seminar.topic,
                "date_and_time": format_date_and_time(seminar.date_and_time)
            })),
        )
            .into_response(),
        Err(e) => map_seminar_error(&e),
    }
}

/// DELETE `/seminars/{id}` - Delete a seminar, organizer only. Participant
/// rows are removed by the cascade.
async fn delete_seminar(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i32>,
) -> impl IntoResponse {
    let repo = SeminarRepository::new((*state.db).clone());

    match repo.delete(id, auth.user_id()).await {
        Ok(()) => {
            info!(seminar_id = id, organizer_id = %auth.user_id(), "Seminar deleted");

            (
                StatusCode::OK,
                Json(json!({ "seminar_id": id, "deleted": true })),
            )
                .into_response()
        }
        Err(e) => map_seminar_error(&e),
    }
}
