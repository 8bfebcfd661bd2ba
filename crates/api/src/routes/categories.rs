//! Category routes.

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use serde::Serialize;
use serde_json::json;
use tracing::error;

use crate::{AppState, routes::error_response};
use seminarhub_db::CategoryRepository;
use seminarhub_shared::AppError;

/// Creates the category routes (requires auth middleware to be applied externally).
pub fn routes() -> Router<AppState> {
    Router::new().route("/categories", get(list_categories))
}

/// Response for a category.
#[derive(Debug, Serialize)]
pub struct CategoryResponse {
    /// Category ID.
    pub id: i32,
    /// Category name.
    pub name: String,
}

/// GET `/categories` - List the shared category vocabulary.
async fn list_categories(State(state): State<AppState>) -> impl IntoResponse {
    let repo = CategoryRepository::new((*state.db).clone());

    match repo.list().await {
        Ok(categories) => {
            let response: Vec<CategoryResponse> = categories
                .into_iter()
                .map(|c| CategoryResponse {
                    id: c.id,
                    name: c.name,
                })
                .collect();

            (StatusCode::OK, Json(json!({ "categories": response }))).into_response()
        }
        Err(e) => {
            error!(error = %e, "Failed to list categories");
            error_response(&AppError::Database(e.to_string()))
        }
    }
}
