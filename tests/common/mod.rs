// SPDX-License-Identifier: MIT

//! Shared test helpers.

use axum::Router;
use fitzone::{config::Config, db::Database, AppState};
use std::sync::Arc;

/// Build the app router with a mock (offline) database.
pub async fn create_test_app() -> Router {
    let state = Arc::new(AppState {
        config: Config::default(),
        db: Database::new_mock(),
    });
    fitzone::routes::create_router(state)
}
