//! System health aggregation.
//!
//! Reports the application itself plus each external service it depends on.
//! A failing dependency degrades the report but never fails the request.

use serde::Serialize;

use super::upstream_auth::UpstreamAuth;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HealthStatus {
    Ok,
    Degraded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceHealth {
    Up,
    Down,
    Unconfigured,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServiceReport {
    pub auth_backend: ServiceHealth,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    pub status: HealthStatus,
    pub services: ServiceReport,
}

impl HealthReport {
    #[must_use]
    pub fn from_services(services: ServiceReport) -> Self {
        let status = if services.auth_backend == ServiceHealth::Down { HealthStatus::Degraded } else { HealthStatus::Ok };
        Self { status, services }
    }
}

/// Probe every external service and build the report.
pub async fn check(upstream: Option<&dyn UpstreamAuth>) -> HealthReport {
    let auth_backend = match upstream {
        None => ServiceHealth::Unconfigured,
        Some(upstream) => match upstream.ping().await {
            Ok(()) => ServiceHealth::Up,
            Err(e) => {
                tracing::warn!(error = %e, "auth backend health probe failed");
                ServiceHealth::Down
            }
        },
    };
    HealthReport::from_services(ServiceReport { auth_backend })
}

#[cfg(test)]
#[path = "health_test.rs"]
mod tests;
