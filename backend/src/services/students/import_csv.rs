use crate::error::ApiError;
use crate::import::bulk_import;
use crate::query::codec;
use crate::state::AppState;
use actix_web::{web, HttpResponse};
use common::responses::ImportReport;

/// Handler for `POST /students/import/csv`. The body is the CSV text itself, header row
/// first; `400` if it cannot be parsed.
pub(crate) async fn process(
    state: web::Data<AppState>,
    body: String,
) -> Result<HttpResponse, ApiError> {
    let report = import_csv(&state, &body).await?;
    Ok(HttpResponse::Ok().json(report))
}

pub async fn import_csv(state: &AppState, text: &str) -> Result<ImportReport, ApiError> {
    let candidates = codec::decode_candidates(text)?;
    let mut store = state.store.write().await;
    Ok(bulk_import(&mut store, candidates))
}
