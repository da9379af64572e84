use super::ensure_unique;
use crate::error::ApiError;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::model::student::{NewStudent, StudentRecord};
use log::info;

/// Handler for `POST /students`.
///
/// - `201 Created` with the new record.
/// - `400` with `{"error": "<field> is required"}` for a blank required field, or
///   `{"error": "rollNumber already exists"}` / `{"error": "email already exists"}`.
pub(crate) async fn process(
    state: web::Data<AppState>,
    payload: web::Json<NewStudent>,
) -> Result<HttpResponse, ApiError> {
    let student = create_student(&state, payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(student))
}

pub async fn create_student(
    state: &AppState,
    payload: NewStudent,
) -> Result<StudentRecord, ApiError> {
    if let Some(field) = payload.missing_required() {
        return Err(ApiError::required(field));
    }
    let payload = payload.trimmed();

    // Uniqueness check and insert happen under one write lock.
    let mut store = state.store.write().await;
    ensure_unique(
        &store,
        None,
        payload.roll_number.as_deref(),
        payload.email.as_deref(),
    )?;
    let student = store.insert(payload)?;

    info!("created student {} ({})", student.id, student.roll_number);
    Ok(student)
}
