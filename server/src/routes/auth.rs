//! Session status route backing the client's auth check.

use axum::extract::State;
use axum::http::header::COOKIE;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use portal_client::net::types::{ApiError, SessionStatus};

use crate::services::upstream_auth::UpstreamError;
use crate::state::AppState;

pub(crate) fn upstream_error_to_status(err: &UpstreamError) -> StatusCode {
    match err {
        UpstreamError::HttpClientBuild(_) => StatusCode::INTERNAL_SERVER_ERROR,
        UpstreamError::Request(_) | UpstreamError::UnexpectedStatus(_) => StatusCode::BAD_GATEWAY,
    }
}

fn error_response(status: StatusCode, message: String) -> Response {
    (status, Json(ApiError { error: message })).into_response()
}

/// `GET /api/auth/status` — ask the auth backend whether the caller's cookies
/// carry a live session.
pub async fn status(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let Some(upstream) = &state.upstream else {
        return error_response(StatusCode::SERVICE_UNAVAILABLE, "auth backend not configured".to_owned());
    };

    let cookie = headers.get(COOKIE).and_then(|v| v.to_str().ok());
    match upstream.session_status(cookie).await {
        Ok(authenticated) => {
            tracing::debug!(authenticated, "session status resolved");
            Json(SessionStatus { authenticated }).into_response()
        }
        Err(e) => {
            tracing::error!(error = %e, "session status check failed");
            error_response(upstream_error_to_status(&e), e.to_string())
        }
    }
}
