//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed config and, when configured, the upstream auth client.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::upstream_auth::UpstreamAuth;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
    /// `None` when `AUTH_BACKEND_URL` is unset.
    pub upstream: Option<Arc<dyn UpstreamAuth>>,
}

impl AppState {
    #[must_use]
    pub fn new(config: ServerConfig, upstream: Option<Arc<dyn UpstreamAuth>>) -> Self {
        Self { config: Arc::new(config), upstream }
    }
}
