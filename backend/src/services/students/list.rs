use crate::query::{self, QueryParams};
use crate::state::AppState;
use actix_web::{web, HttpResponse, Responder};
use common::requests::ListQuery;
use common::responses::StudentPage;

pub(crate) async fn process(
    state: web::Data<AppState>,
    list_query: web::Query<ListQuery>,
) -> impl Responder {
    HttpResponse::Ok().json(list_students(&state, &list_query).await)
}

pub async fn list_students(state: &AppState, list_query: &ListQuery) -> StudentPage {
    let params = QueryParams::from(list_query);
    let records = state.store.read().await.list();
    query::query(records, &params)
}
