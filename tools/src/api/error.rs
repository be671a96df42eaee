use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use client360_core::error::ApiError;
use log::error;
use serde::Serialize;

/// Error body shared by every endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetail {
    pub detail: String,
}

/// Maps core errors onto HTTP responses.
///
/// Misses surface their message; everything else is logged and
/// reported as a bare 500 so stored content never leaks.
#[derive(Debug)]
pub struct HttpError(pub ApiError);

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        Self(err)
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self.0 {
            ApiError::NotFound { .. } => (StatusCode::NOT_FOUND, self.0.to_string()),
            other => {
                error!("request failed: {other}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        (status, Json(ErrorDetail { detail })).into_response()
    }
}
