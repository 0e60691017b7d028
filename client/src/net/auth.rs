//! Authentication capability consumed by the session gate.
//!
//! Client-side (hydrate): real HTTP call via `gloo-net`.
//! Server-side (SSR): returns [`AuthCheckError::Unavailable`] since the
//! visitor's session only exists in the browser.
//!
//! ERROR HANDLING
//! ==============
//! The check returns a `Result` instead of a bare boolean so the gate can
//! tell "signed out" apart from "could not find out" and apply its
//! configured failure policy to the latter.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::sync::Arc;

/// Default session-status endpoint served by `portal-server`.
pub const DEFAULT_STATUS_URL: &str = "/api/auth/status";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthCheckError {
    /// The request never produced a response.
    #[error("session status request failed: {0}")]
    Transport(String),

    /// The endpoint answered with a status that is neither success nor an auth rejection.
    #[error("session status request failed: {0}")]
    Status(u16),

    /// The response body was not a session status document.
    #[error("session status response invalid: {0}")]
    Decode(String),

    /// No browser session exists in this environment (SSR).
    #[error("session status not available on server")]
    Unavailable,
}

/// "Is the current session authenticated?"
///
/// Browser futures are not `Send`, so the trait is `?Send`; implementors still
/// have to be `Send + Sync` to live in Leptos context.
#[async_trait::async_trait(?Send)]
pub trait AuthBackend: Send + Sync {
    /// Query the authentication backend once.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthCheckError`] when the backend could not be asked or
    /// gave an unusable answer. A definite "not signed in" is `Ok(false)`.
    async fn is_logged_in(&self) -> Result<bool, AuthCheckError>;
}

/// Shared handle to the backend the gate should use.
///
/// Provide one via `provide_context` above the gate to swap the backend.
#[derive(Clone)]
pub struct AuthBackendHandle(pub Arc<dyn AuthBackend>);

impl AuthBackendHandle {
    pub fn new(backend: impl AuthBackend + 'static) -> Self {
        Self(Arc::new(backend))
    }

    #[must_use]
    pub fn backend(&self) -> &dyn AuthBackend {
        self.0.as_ref()
    }
}

impl Default for AuthBackendHandle {
    fn default() -> Self {
        Self::new(HttpAuthBackend::default())
    }
}

/// How a status code from the session endpoint should be read.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusClass {
    /// Body carries a [`SessionStatus`](super::types::SessionStatus).
    Ok,
    /// The endpoint rejected the session outright.
    Unauthenticated,
    /// Anything else; the check failed.
    Failed,
}

#[must_use]
pub fn classify_status(status: u16) -> StatusClass {
    match status {
        200..=299 => StatusClass::Ok,
        401 | 403 => StatusClass::Unauthenticated,
        _ => StatusClass::Failed,
    }
}

/// Session check over HTTP against `portal-server`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpAuthBackend {
    pub status_url: String,
}

impl HttpAuthBackend {
    pub fn new(status_url: impl Into<String>) -> Self {
        Self { status_url: status_url.into() }
    }
}

impl Default for HttpAuthBackend {
    fn default() -> Self {
        Self::new(DEFAULT_STATUS_URL)
    }
}

#[async_trait::async_trait(?Send)]
impl AuthBackend for HttpAuthBackend {
    async fn is_logged_in(&self) -> Result<bool, AuthCheckError> {
        #[cfg(feature = "hydrate")]
        {
            use super::types::SessionStatus;

            let resp = gloo_net::http::Request::get(&self.status_url)
                .send()
                .await
                .map_err(|e| AuthCheckError::Transport(e.to_string()))?;
            match classify_status(resp.status()) {
                StatusClass::Unauthenticated => Ok(false),
                StatusClass::Failed => Err(AuthCheckError::Status(resp.status())),
                StatusClass::Ok => {
                    let body: SessionStatus = resp
                        .json()
                        .await
                        .map_err(|e| AuthCheckError::Decode(e.to_string()))?;
                    Ok(body.authenticated)
                }
            }
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(AuthCheckError::Unavailable)
        }
    }
}
