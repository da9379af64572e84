use crate::error::ApiError;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use log::info;

/// Handler for `DELETE /students/{id}`: `204` with an empty body, `404` if unknown.
pub(crate) async fn process(
    state: web::Data<AppState>,
    id: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    delete_student(&state, &id).await?;
    Ok(HttpResponse::NoContent().finish())
}

pub async fn delete_student(state: &AppState, id: &str) -> Result<(), ApiError> {
    if state.store.write().await.delete(id)? {
        info!("deleted student {}", id);
        Ok(())
    } else {
        Err(ApiError::student_not_found())
    }
}
