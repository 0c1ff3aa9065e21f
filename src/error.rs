use axum::{Json, http::StatusCode, response::{IntoResponse, Response}};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Course {course_id} has no value for required field `{field}`")]
    MissingField {
        course_id: String,
        field: &'static str,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    /// Public face of any failure while building the course listing.
    #[error("Failed to fetch courses")]
    CoursesUnavailable,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error_message = match &self {
            AppError::CoursesUnavailable => self.to_string(),
            other => {
                error!("request failed: {}", other);
                "Internal server error".to_string()
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
