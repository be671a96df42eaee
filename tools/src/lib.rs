//! HTTP surface for the Client 360 backend.

pub mod api;

pub use api::{build_router, AppState};
