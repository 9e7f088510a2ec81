// SPDX-License-Identifier: MIT

//! HTTP route handlers.

pub mod api;

use crate::error::Result;
use crate::AppState;
use axum::http::{header, Method};
use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
}

/// Health check response
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

#[derive(Serialize)]
pub struct DbHealthResponse {
    pub success: bool,
    pub version: String,
}

/// Ping the database handle.
///
/// On connection failure the error converts to the bootstrap's wire shape:
/// status 500 with a `success: false` JSON body.
async fn db_health_check(State(state): State<Arc<AppState>>) -> Result<Json<DbHealthResponse>> {
    state.db.ping().await?;
    let version = state.db.server_version().await?;

    Ok(Json(DbHealthResponse {
        success: true,
        version,
    }))
}

/// Build the complete router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(health_check))
        .route("/health/db", get(db_health_check))
        .merge(api::routes())
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
