use crate::error::ApiError;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::model::student::StudentRecord;

/// Handler for `GET /students/{id}`: `200` with the record, `404` if the id is unknown.
pub(crate) async fn process(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let student = get_student(&state, &id).await?;
    Ok(HttpResponse::Ok().json(student))
}

pub async fn get_student(state: &AppState, id: &str) -> Result<StudentRecord, ApiError> {
    state
        .store
        .read()
        .await
        .get(id)
        .cloned()
        .ok_or_else(ApiError::student_not_found)
}
