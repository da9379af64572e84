//! Data model shared between the roster server and its clients.
//!
//! - `model`: the stored student record, create/patch payloads and the CSV row shape.
//! - `requests`: query-string and body types accepted by the HTTP API.
//! - `responses`: paginated listings, aggregate stats and bulk-import reports.

pub mod model;
pub mod requests;
pub mod responses;
