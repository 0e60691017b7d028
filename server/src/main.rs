mod config;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::services::upstream_auth::{AppwriteClient, UpstreamAuth};

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::ServerConfig::from_env().expect("invalid configuration");
    let port = config.port;

    // Session checks are disabled, not fatal, without an upstream.
    let upstream: Option<Arc<dyn UpstreamAuth>> = match config.upstream.clone() {
        Some(upstream_config) => {
            let base_url = upstream_config.base_url.clone();
            match AppwriteClient::new(upstream_config) {
                Ok(client) => {
                    tracing::info!(%base_url, "auth backend client initialized");
                    Some(Arc::new(client))
                }
                Err(e) => {
                    tracing::warn!(error = %e, "auth backend client failed to build; session status disabled");
                    None
                }
            }
        }
        None => {
            tracing::warn!("AUTH_BACKEND_URL not set; session status disabled");
            None
        }
    };

    tracing::info!(policy = %config.gate.failure_policy, "session gate failure policy");
    let state = state::AppState::new(config, upstream);

    let app = routes::leptos_app(state).expect("leptos app init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "portal listening");
    axum::serve(listener, app).await.expect("server failed");
}
