//! HTTP surface of the roster server.

pub mod students;

use crate::error::ApiError;
use crate::state::AppState;
use actix_web::web;

/// Registers shared state, body limits and every API route.
///
/// Used by `main.rs` and by the integration tests, so both run the exact same app.
pub fn configure(state: AppState, body_limit: usize) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::new(state))
            .app_data(
                web::JsonConfig::default()
                    .limit(body_limit)
                    .error_handler(|err, _req| ApiError::MalformedInput(err.to_string()).into()),
            )
            .app_data(
                web::QueryConfig::default()
                    .error_handler(|err, _req| ApiError::MalformedInput(err.to_string()).into()),
            )
            .app_data(web::PayloadConfig::new(body_limit))
            .service(students::configure_routes());
    }
}
