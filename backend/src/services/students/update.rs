use super::ensure_unique;
use crate::error::ApiError;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::model::student::{StudentPatch, StudentRecord};

/// Handler for `PUT /students/{id}`. Only the fields present in the body are changed.
pub(crate) async fn process(
    state: web::Data<AppState>,
    id: web::Path<String>,
    patch: web::Json<StudentPatch>,
) -> Result<HttpResponse, ApiError> {
    let student = update_student(&state, &id, patch.into_inner()).await?;
    Ok(HttpResponse::Ok().json(student))
}

/// Applies `patch` to the student with `id`.
///
/// Required fields may be changed but not blanked. A new roll number or email must not
/// belong to another student; re-casing one's own value is allowed.
pub async fn update_student(
    state: &AppState,
    id: &str,
    patch: StudentPatch,
) -> Result<StudentRecord, ApiError> {
    let mut store = state.store.write().await;
    if store.get(id).is_none() {
        return Err(ApiError::student_not_found());
    }

    if let Some(field) = patch.blanked_required() {
        return Err(ApiError::Validation(format!("{} cannot be empty", field)));
    }
    let patch = patch.trimmed();
    ensure_unique(
        &store,
        Some(id),
        patch.roll_number.as_deref(),
        patch.email.as_deref(),
    )?;

    store
        .update(id, patch)?
        .ok_or_else(ApiError::student_not_found)
}
