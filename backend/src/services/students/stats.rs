use crate::query::compute_stats;
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};

/// Handler for `GET /students/stats`.
pub(crate) async fn process(state: web::Data<AppState>) -> impl Responder {
    let records = state.store.read().await.list();
    HttpResponse::Ok().json(compute_stats(&records))
}
