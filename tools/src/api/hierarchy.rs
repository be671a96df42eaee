use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use client360_core::hierarchy::{Breadcrumb, BreadcrumbPath, RelationshipManager};

use super::{error::HttpError, run_blocking, AppState};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api/relationship-managers/{rm_id}", get(relationship_manager))
        .route(
            "/api/breadcrumb/{metro_id}/{market_id}/{region_id}/{rm_id}/{relationship_id}",
            get(breadcrumb),
        )
}

async fn relationship_manager(
    State(state): State<AppState>,
    Path(rm_id): Path<String>,
) -> Result<Json<RelationshipManager>, HttpError> {
    run_blocking(&state, move |service| service.relationship_manager(&rm_id))
        .await
        .map(Json)
}

/// Unknown segments come back as placeholders, never as 404.
async fn breadcrumb(
    State(state): State<AppState>,
    Path(path): Path<BreadcrumbPath>,
) -> Result<Json<Breadcrumb>, HttpError> {
    run_blocking(&state, move |service| service.breadcrumb(&path))
        .await
        .map(Json)
}
