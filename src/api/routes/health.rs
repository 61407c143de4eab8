// Health Check Route

use std::sync::Arc;

use axum::{extract::State, Json};

use crate::api::{models::response::HealthResponse, state::AppState};

/// Health check endpoint
///
/// Returns the health status of the reporter
#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        certificate_root: state.config.certs_dir.display().to_string(),
    })
}
