//! # Student Service Module
//!
//! Routes every request under `/students` to its handler. Each sub-module owns one
//! operation: an actix `process` handler plus the plain async function that does the work,
//! so the logic can be called without going through HTTP.
//!
//! ## Registered Routes:
//!
//! *   **`GET /students`** (`list`): filtered, sorted, paginated listing. Query parameters
//!     `q`, `course`, `sort`, `order`, `page`, `limit`; returns
//!     `{data, total, page, limit, totalPages}`.
//! *   **`POST /students`** (`create`): creates a student from a JSON body, `201` with the
//!     record. `400` when a required field is blank or the roll number / email is taken.
//! *   **`GET /students/stats`** (`stats`): totals, average age, active count and per-course
//!     counts over the whole collection.
//! *   **`GET /students/export`** (`export`): the full collection as a CSV attachment.
//! *   **`POST /students/import`** (`import`): bulk import of `{students: [...]}`, returns
//!     `{added, skipped, errors}`.
//! *   **`POST /students/import/csv`** (`import_csv`): bulk import from a raw CSV body.
//! *   **`GET /students/{id}`** (`get`), **`PUT /students/{id}`** (`update`),
//!     **`DELETE /students/{id}`** (`delete`): single-record operations, `404` for an
//!     unknown id.

mod create;
mod delete;
mod export;
mod get;
mod import;
mod import_csv;
mod list;
mod stats;
mod update;

use crate::error::ApiError;
use crate::store::StudentStore;
use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;
use common::model::student::StudentRecord;

/// The base path for all student endpoints.
const API_PATH: &str = "/students";

/// Configures and returns the Actix `Scope` for the student routes.
///
/// Fixed paths are registered before `/{id}` so they are not captured as ids.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
        .route("/stats", get().to(stats::process))
        .route("/export", get().to(export::process))
        .route("/import", post().to(import::process))
        .route("/import/csv", post().to(import_csv::process))
        .route("/{id}", get().to(get::process))
        .route("/{id}", put().to(update::process))
        .route("/{id}", delete().to(delete::process))
}

/// Fails with a conflict if `roll_number` or `email` belongs to a record other than
/// `own_id`. `None` values are not checked.
fn ensure_unique(
    store: &StudentStore,
    own_id: Option<&str>,
    roll_number: Option<&str>,
    email: Option<&str>,
) -> Result<(), ApiError> {
    let taken = |found: Option<&StudentRecord>| {
        found.is_some_and(|s| Some(s.id.as_str()) != own_id)
    };

    if roll_number.is_some_and(|roll| taken(store.find_by_roll_number(roll))) {
        return Err(ApiError::already_exists("rollNumber"));
    }
    if email.is_some_and(|email| taken(store.find_by_email(email))) {
        return Err(ApiError::already_exists("email"));
    }
    Ok(())
}
