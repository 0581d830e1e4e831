use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::json;
use std::fmt;
use thiserror::Error;

/// A rejected order field and the message shown next to it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// One or more order fields failed validation
    #[error("Validation failed: {}", join_fields(.0))]
    Validation(Vec<FieldError>),
    /// The order sink refused or failed to take the order
    #[error("Order intake error: {0}")]
    Intake(String),
}

fn join_fields(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

impl AppError {
    pub fn type_name(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation_error",
            AppError::Intake(_) => "intake_error",
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Intake(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match &self {
            AppError::Validation(fields) => json!({
                "error": {
                    "message": "Please correct the highlighted fields",
                    "type": self.type_name(),
                    "fields": fields,
                }
            }),
            other => json!({
                "error": {
                    "message": other.to_string(),
                    "type": other.type_name(),
                }
            }),
        };

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        (status, Json(body)).into_response()
    }
}
