//! Error types for the roster server.
//!
//! `StoreError` and `CsvError` are internal; `ApiError` is what handlers return and maps
//! each failure to an HTTP status with a `{"error": "..."}` body.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::model::csv::RowError;
use serde_json::json;
use thiserror::Error;

/// Failures while flushing the snapshot to disk.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Snapshot replace failed: {0}")]
    Persist(#[from] tempfile::PersistError),
}

#[derive(Debug, Error)]
pub enum CsvError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid row {row}: {source}")]
    Row { row: usize, source: RowError },

    #[error("CSV output is not valid UTF-8")]
    Encoding,
}

/// Errors surfaced to HTTP clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or blank required field (400).
    #[error("{0}")]
    Validation(String),
    /// Duplicate roll number or email (400).
    #[error("{0}")]
    Conflict(String),
    /// Unknown student id (404).
    #[error("{0}")]
    NotFound(String),
    /// Body that cannot be interpreted, e.g. a non-array import (400).
    #[error("{0}")]
    MalformedInput(String),
    /// Unexpected server-side failure (500).
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn required(field: &str) -> Self {
        ApiError::Validation(format!("{} is required", field))
    }

    pub fn already_exists(field: &str) -> Self {
        ApiError::Conflict(format!("{} already exists", field))
    }

    pub fn student_not_found() -> Self {
        ApiError::NotFound("Student not found".to_string())
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        log::error!("store flush failed: {}", e);
        ApiError::Internal(format!("Failed to save students: {}", e))
    }
}

impl From<CsvError> for ApiError {
    fn from(e: CsvError) -> Self {
        ApiError::MalformedInput(e.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::Conflict(_) | ApiError::MalformedInput(_) => {
                StatusCode::BAD_REQUEST
            }
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }
}
