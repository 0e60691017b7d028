use super::*;

#[test]
fn classify_status_success_range() {
    assert_eq!(classify_status(200), StatusClass::Ok);
    assert_eq!(classify_status(204), StatusClass::Ok);
    assert_eq!(classify_status(299), StatusClass::Ok);
}

#[test]
fn classify_status_auth_rejections() {
    assert_eq!(classify_status(401), StatusClass::Unauthenticated);
    assert_eq!(classify_status(403), StatusClass::Unauthenticated);
}

#[test]
fn classify_status_everything_else_fails() {
    for status in [301, 400, 404, 429, 500, 502, 503] {
        assert_eq!(classify_status(status), StatusClass::Failed, "status {status}");
    }
}

#[test]
fn http_backend_defaults_to_status_endpoint() {
    assert_eq!(HttpAuthBackend::default().status_url, "/api/auth/status");
}

#[test]
fn auth_check_error_messages() {
    assert_eq!(AuthCheckError::Status(502).to_string(), "session status request failed: 502");
    assert_eq!(AuthCheckError::Unavailable.to_string(), "session status not available on server");
    assert_eq!(
        AuthCheckError::Decode("expected bool".to_owned()).to_string(),
        "session status response invalid: expected bool"
    );
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn http_backend_is_unavailable_outside_browser() {
    let backend = HttpAuthBackend::default();
    let result = futures::executor::block_on(backend.is_logged_in());
    assert_eq!(result, Err(AuthCheckError::Unavailable));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn default_handle_uses_http_backend() {
    let handle = AuthBackendHandle::default();
    let result = futures::executor::block_on(handle.backend().is_logged_in());
    assert_eq!(result, Err(AuthCheckError::Unavailable));
}
