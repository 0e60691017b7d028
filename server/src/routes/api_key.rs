//! `x-api-key` guard for service routes.

use axum::extract::{FromRef, FromRequestParts};
use axum::http::StatusCode;
use axum::http::request::Parts;

use crate::state::AppState;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Proof that the request carried an accepted API key.
/// Use as a handler parameter to guard a route.
pub struct ApiKey;

impl<S> FromRequestParts<S> for ApiKey
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = StatusCode;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let key = parts.headers.get(API_KEY_HEADER).and_then(|v| v.to_str().ok());
        if app_state.config.api_keys.accepts(key) {
            Ok(Self)
        } else {
            tracing::warn!(present = key.is_some(), "rejected request with invalid api key");
            Err(StatusCode::UNAUTHORIZED)
        }
    }
}
