use axum::Json;
use axum::{Router, extract::State, http::StatusCode, routing::get};
use tracing::error;

use crate::error::AppError;
use crate::models::CourseListing;
use crate::services::fetch_public_courses;
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/courses/public", get(list_public_courses))
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Result<StatusCode, AppError> {
    sqlx::query("select 1").execute(&state.db).await?;
    Ok(StatusCode::OK)
}

async fn list_public_courses(
    State(state): State<AppState>,
) -> Result<Json<Vec<CourseListing>>, AppError> {
    let courses = fetch_public_courses(state.courses.as_ref())
        .await
        .map_err(|err| {
            error!("Error fetching public courses: {}", err);
            AppError::CoursesUnavailable
        })?;
    Ok(Json(courses))
}
