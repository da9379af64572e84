//! Roster server: a small student-records service.
//!
//! - `store`: the authoritative collection, flushed to a JSON snapshot on every change.
//! - `query`: filtering, sorting, pagination, stats and CSV conversion over a snapshot.
//! - `import`: bulk import with per-candidate validation.
//! - `services`: the actix-web HTTP handlers.

pub mod config;
pub mod error;
pub mod import;
pub mod query;
pub mod services;
pub mod state;
pub mod store;

pub use config::Config;
pub use state::AppState;
pub use store::StudentStore;
