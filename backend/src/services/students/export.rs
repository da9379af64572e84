use crate::error::ApiError;
use crate::query::codec::{self, EXPORT_FILENAME};
use crate::state::AppState;
use actix_web::http::header;
use actix_web::{web, HttpResponse};

/// Handler for `GET /students/export`: every student as a `text/csv` attachment, newest
/// first.
pub(crate) async fn process(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let records = state.store.read().await.list();
    let csv = codec::encode(&records)?;

    Ok(HttpResponse::Ok()
        .content_type("text/csv")
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", EXPORT_FILENAME),
        ))
        .body(csv))
}
