use crate::error::ApiError;
use crate::import::import_values;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::requests::ImportRequest;
use common::responses::ImportReport;
use serde_json::Value;

/// Handler for `POST /students/import`.
///
/// - `200 OK` with `{added, skipped, errors}`.
/// - `400` when `students` is present but not an array.
pub(crate) async fn process(
    state: web::Data<AppState>,
    payload: web::Json<ImportRequest>,
) -> Result<HttpResponse, ApiError> {
    let report = import_students(&state, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(report))
}

pub async fn import_students(
    state: &AppState,
    req: ImportRequest,
) -> Result<ImportReport, ApiError> {
    let items = match req.students {
        None => Vec::new(),
        Some(Value::Array(items)) => items,
        Some(_) => {
            return Err(ApiError::MalformedInput(
                "students must be an array".to_string(),
            ))
        }
    };

    let mut store = state.store.write().await;
    Ok(import_values(&mut store, items))
}
