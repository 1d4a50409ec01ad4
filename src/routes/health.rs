use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub catalog: CatalogHealth,
}

#[derive(Serialize)]
pub struct CatalogHealth {
    pub listings: usize,
    pub pending_submissions: usize,
}

/// Health check endpoint - public
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let listings = state.catalog.len();

    // An empty catalog still serves requests, just with nothing to show
    let status = if listings > 0 { "healthy" } else { "degraded" };

    Json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        catalog: CatalogHealth {
            listings,
            pending_submissions: state.catalog.pending_submissions(),
        },
    })
}
