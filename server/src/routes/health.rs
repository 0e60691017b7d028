//! Health check route.

use axum::extract::State;
use axum::response::Json;

use super::api_key::ApiKey;
use crate::services::health::{self, HealthReport};
use crate::state::AppState;

/// `GET /api/health/` — report application and external service status.
pub async fn health_check(_key: ApiKey, State(state): State<AppState>) -> Json<HealthReport> {
    tracing::info!("entering health_check");
    let report = health::check(state.upstream.as_deref()).await;
    tracing::info!(status = ?report.status, "exiting health_check");
    Json(report)
}
