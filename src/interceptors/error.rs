use std::collections::BTreeMap;
use std::fmt;

use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
};
use serde::Serialize;
use thiserror::Error;
use serde_json::json;

use super::response::ApiError;

/// Per-field validation messages, ordered by field name
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Single-field error set
    pub fn single(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = Self::new();
        errors.add(field, message);
        errors
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn has(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    #[cfg(test)]
    pub fn messages(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined = self
            .0
            .iter()
            .map(|(field, messages)| format!("{}: {}", field, messages.join(", ")))
            .collect::<Vec<_>>()
            .join("; ");
        f.write_str(&joined)
    }
}

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    ValidationError(ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Error codes for API responses
#[derive(Debug)]
pub enum ErrorCode {
    DatabaseError,
    ValidationError,
    NotFound,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::DatabaseError => "DATABASE_ERROR",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::NotFound => "NOT_FOUND",
        }
    }
}

impl AppError {
    pub fn error_code(&self) -> ErrorCode {
        match self {
            AppError::DatabaseError(_) => ErrorCode::DatabaseError,
            AppError::ValidationError(_) => ErrorCode::ValidationError,
            AppError::NotFound(_) => ErrorCode::NotFound,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    pub fn to_api_error(&self) -> ApiError {
        let error_code = self.error_code().as_str();

        match self {
            AppError::ValidationError(errors) => ApiError::with_details(
                "The given data was invalid.",
                error_code,
                json!({ "validation_errors": errors }),
            ),
            // Store failures stay generic on the wire; the cause is logged
            AppError::DatabaseError(_) => {
                ApiError::new("The request could not be completed.", error_code)
            }
            AppError::NotFound(_) => ApiError::new(self.to_string(), error_code),
        }
    }

    pub fn not_found(resource: &str, id: i64) -> Self {
        AppError::NotFound(format!("{} {} not found", resource, id))
    }
}

// Implement IntoResponse for AppError
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::DatabaseError(_) => tracing::error!("Application error: {:?}", self),
            _ => tracing::debug!("Request rejected: {}", self),
        }

        let status = self.status_code();
        (status, self.to_api_error()).into_response()
    }
}

// Result type alias
pub type AppResult<T> = Result<T, AppError>;
