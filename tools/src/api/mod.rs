//! Route groups for the Client 360 API.
//!
//! - health: liveness probe
//! - clients: stored client detail plus generated accounts and transactions
//! - hierarchy: relationship managers and navigation breadcrumbs

pub mod clients;
pub mod error;
pub mod health;
pub mod hierarchy;

use axum::{http::HeaderValue, Router};
use client360_core::{error::ApiError, error::ApiResult, service::ClientService};
use log::warn;
use std::sync::Arc;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

use self::error::HttpError;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ClientService>,
}

impl AppState {
    pub fn new(service: ClientService) -> Self {
        Self {
            service: Arc::new(service),
        }
    }
}

/// Merge all route groups and attach the CORS policy from the
/// service config.
pub fn build_router(state: AppState) -> Router {
    let cors = cors_layer(&state.service.config().cors_origins);
    Router::new()
        .merge(health::routes())
        .merge(clients::routes())
        .merge(hierarchy::routes())
        .layer(cors)
        .with_state(state)
}

/// Listed origins only, with credentials. Methods and headers are
/// mirrored from the preflight since wildcards cannot carry credentials.
fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("ignoring invalid CORS origin {origin:?}");
                None
            }
        })
        .collect();
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

/// Run store-backed work on the blocking pool.
async fn run_blocking<T, F>(state: &AppState, work: F) -> Result<T, HttpError>
where
    T: Send + 'static,
    F: FnOnce(&ClientService) -> ApiResult<T> + Send + 'static,
{
    let service = Arc::clone(&state.service);
    tokio::task::spawn_blocking(move || work(&service))
        .await
        .map_err(|e| HttpError(ApiError::Other(anyhow::anyhow!("request worker failed: {e}"))))?
        .map_err(HttpError)
}
