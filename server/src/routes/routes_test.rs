use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use tower::ServiceExt;

use super::*;
use crate::config::{ApiKeyConfig, ServerConfig};
use crate::services::upstream_auth::{UpstreamAuth, UpstreamError};

// =============================================================================
// FIXTURES
// =============================================================================

/// Signs in exactly the cookie `session=valid`.
struct FakeUpstream {
    fail_with: Option<u16>,
    ping_ok: bool,
    calls: AtomicUsize,
}

impl FakeUpstream {
    fn healthy() -> Self {
        Self { fail_with: None, ping_ok: true, calls: AtomicUsize::new(0) }
    }

    fn failing(status: u16) -> Self {
        Self { fail_with: Some(status), ping_ok: false, calls: AtomicUsize::new(0) }
    }
}

#[async_trait::async_trait]
impl UpstreamAuth for FakeUpstream {
    async fn session_status(&self, cookie: Option<&str>) -> Result<bool, UpstreamError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Some(status) = self.fail_with {
            return Err(UpstreamError::UnexpectedStatus(status));
        }
        Ok(cookie == Some("session=valid"))
    }

    async fn ping(&self) -> Result<(), UpstreamError> {
        if self.ping_ok { Ok(()) } else { Err(UpstreamError::Request("connection refused".to_owned())) }
    }
}

fn config() -> ServerConfig {
    ServerConfig::from_lookup(|_| None).unwrap()
}

fn app(config: ServerConfig, upstream: Option<Arc<dyn UpstreamAuth>>) -> Router {
    api_routes(AppState::new(config, upstream))
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let resp = router.oneshot(request).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() { serde_json::Value::Null } else { serde_json::from_slice(&bytes).unwrap() };
    (status, json)
}

fn get_request(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

// =============================================================================
// /api/auth/status
// =============================================================================

#[tokio::test]
async fn status_with_valid_cookie_is_authenticated() {
    let upstream = Arc::new(FakeUpstream::healthy());
    let request = Request::get("/api/auth/status")
        .header("cookie", "session=valid")
        .body(Body::empty())
        .unwrap();

    let shared: Arc<dyn UpstreamAuth> = upstream.clone();
    let (status, body) = send(app(config(), Some(shared)), request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "authenticated": true }));
    assert_eq!(upstream.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn status_without_cookie_is_unauthenticated() {
    let upstream: Arc<dyn UpstreamAuth> = Arc::new(FakeUpstream::healthy());
    let (status, body) = send(app(config(), Some(upstream)), get_request("/api/auth/status")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "authenticated": false }));
}

#[tokio::test]
async fn status_upstream_failure_is_bad_gateway() {
    let upstream: Arc<dyn UpstreamAuth> = Arc::new(FakeUpstream::failing(500));
    let (status, body) = send(app(config(), Some(upstream)), get_request("/api/auth/status")).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert_eq!(body["error"], "auth backend returned status 500");
}

#[tokio::test]
async fn status_without_upstream_is_unavailable() {
    let (status, body) = send(app(config(), None), get_request("/api/auth/status")).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error"], "auth backend not configured");
}

#[test]
fn upstream_error_to_status_mapping() {
    assert_eq!(
        auth::upstream_error_to_status(&UpstreamError::Request("timeout".to_owned())),
        StatusCode::BAD_GATEWAY
    );
    assert_eq!(auth::upstream_error_to_status(&UpstreamError::UnexpectedStatus(404)), StatusCode::BAD_GATEWAY);
    assert_eq!(
        auth::upstream_error_to_status(&UpstreamError::HttpClientBuild("tls".to_owned())),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

// =============================================================================
// /api/health
// =============================================================================

fn keyed_config() -> ServerConfig {
    ServerConfig {
        api_keys: ApiKeyConfig { internal: Some("inner".to_owned()), external: vec!["partner".to_owned()] },
        ..config()
    }
}

#[tokio::test]
async fn health_without_guard_reports_unconfigured_backend() {
    let (status, body) = send(app(config(), None), get_request("/api/health/")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "status": "ok", "services": { "auth_backend": "unconfigured" } }));
}

#[tokio::test]
async fn health_rejects_missing_key() {
    let (status, _) = send(app(keyed_config(), None), get_request("/api/health/")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn health_rejects_unknown_key() {
    let request = Request::get("/api/health").header(api_key::API_KEY_HEADER, "guess").body(Body::empty()).unwrap();
    let (status, _) = send(app(keyed_config(), None), request).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn health_accepts_internal_and_external_keys() {
    for key in ["inner", "partner"] {
        let request = Request::get("/api/health/").header(api_key::API_KEY_HEADER, key).body(Body::empty()).unwrap();
        let (status, _) = send(app(keyed_config(), None), request).await;
        assert_eq!(status, StatusCode::OK, "key {key}");
    }
}

#[tokio::test]
async fn health_reports_degraded_backend() {
    let upstream: Arc<dyn UpstreamAuth> = Arc::new(FakeUpstream::failing(503));
    let (status, body) = send(app(config(), Some(upstream)), get_request("/api/health")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["services"]["auth_backend"], "down");
}

#[tokio::test]
async fn healthz_is_ok() {
    let (status, body) = send(app(config(), None), get_request("/healthz")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::Value::Null);
}
