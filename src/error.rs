//! Error types for the catalog server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::collections::BTreeMap;
use thiserror::Error;
use validator::ValidationErrors;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation failed")]
    Validation(ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Flatten validator output into the field -> messages map the API exposes.
fn validation_body(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    let mut body = BTreeMap::new();
    for (field, field_errors) in errors.field_errors() {
        let messages = field_errors
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect();
        body.insert(field.to_string(), messages);
    }
    body
}

fn error_envelope(status: StatusCode, message: &str) -> Response {
    let body = Json(json!({
        "error": {
            "message": message,
            "status": status.as_u16(),
        }
    }));
    (status, body).into_response()
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::NotFound(detail) => {
                tracing::debug!("Not found: {}", detail);
                error_envelope(StatusCode::NOT_FOUND, "Not Found")
            }
            AppError::Validation(errors) => {
                (StatusCode::UNPROCESSABLE_ENTITY, Json(validation_body(errors))).into_response()
            }
            AppError::BadRequest(msg) => error_envelope(StatusCode::BAD_REQUEST, msg),
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                error_envelope(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                error_envelope(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
            }
        }
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
