//! Liveness probe.
//!
//! Reads the registry so a poisoned lock shows up as a failing probe
//! instead of a healthy process that answers every book request with 500.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;

use super::errors::ApiResult;
use crate::registry::BookRegistry;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// Books currently held
    pub books: usize,
}

pub fn health_routes(registry: Arc<BookRegistry>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(registry)
}

async fn health_handler(
    State(registry): State<Arc<BookRegistry>>,
) -> ApiResult<Json<HealthResponse>> {
    Ok(Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        books: registry.len()?,
    }))
}
