//! Shared application state.
//!
//! `AppState` is created in `main.rs` and handed to every worker as `web::Data`. The store
//! sits behind a single `RwLock`: listings take the read side, while every handler that
//! mutates takes the write side for its whole check-then-write sequence, so uniqueness
//! checks and the following insert or update cannot interleave with another request.

use crate::store::StudentStore;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<StudentStore>>,
}

impl AppState {
    pub fn new(store: StudentStore) -> Self {
        AppState {
            store: Arc::new(RwLock::new(store)),
        }
    }
}
