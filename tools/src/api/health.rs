use axum::{extract::State, response::Json, routing::get, Router};
use client360_core::service::HealthStatus;

use super::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/api/health", get(health_handler))
}

/// GET /api/health
async fn health_handler(State(state): State<AppState>) -> Json<HealthStatus> {
    Json(state.service.health())
}
