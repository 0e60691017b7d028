//! Upstream authentication service client.
//!
//! ARCHITECTURE
//! ============
//! The browser never talks to the auth provider directly. `GET
//! /api/auth/status` forwards the visitor's cookies to the provider's
//! account endpoint and reduces the answer to a boolean. The `UpstreamAuth`
//! trait keeps route handlers testable without a live provider.

use std::time::Duration;

use reqwest::header::COOKIE;

use crate::config::UpstreamAuthConfig;

const PROJECT_HEADER: &str = "X-Appwrite-Project";

#[derive(Debug, thiserror::Error)]
pub enum UpstreamError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The request to the auth provider failed.
    #[error("auth backend request failed: {0}")]
    Request(String),

    /// The auth provider answered with a status we cannot interpret.
    #[error("auth backend returned status {0}")]
    UnexpectedStatus(u16),
}

/// Provider-neutral session checks. Enables mocking in tests.
#[async_trait::async_trait]
pub trait UpstreamAuth: Send + Sync {
    /// Ask the provider whether `cookie` carries a live session.
    ///
    /// # Errors
    ///
    /// Returns an [`UpstreamError`] if the provider is unreachable or gives
    /// an answer that is neither "signed in" nor "signed out".
    async fn session_status(&self, cookie: Option<&str>) -> Result<bool, UpstreamError>;

    /// Check that the provider answers at all.
    ///
    /// # Errors
    ///
    /// Returns an [`UpstreamError`] if the provider is unreachable or failing.
    async fn ping(&self) -> Result<(), UpstreamError>;
}

/// Map an account-endpoint status to a session answer.
pub(crate) fn account_status_to_session(status: u16) -> Result<bool, UpstreamError> {
    match status {
        200..=299 => Ok(true),
        401 | 403 => Ok(false),
        other => Err(UpstreamError::UnexpectedStatus(other)),
    }
}

/// Any non-5xx answer means the provider is up.
pub(crate) fn ping_status_ok(status: u16) -> Result<(), UpstreamError> {
    if status >= 500 { Err(UpstreamError::UnexpectedStatus(status)) } else { Ok(()) }
}

/// Appwrite-style account API client.
pub struct AppwriteClient {
    http: reqwest::Client,
    base_url: String,
    project_id: String,
}

impl AppwriteClient {
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: UpstreamAuthConfig) -> Result<Self, UpstreamError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .build()
            .map_err(|e| UpstreamError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: config.base_url, project_id: config.project_id })
    }

    pub(crate) fn account_url(&self) -> String {
        format!("{}/account", self.base_url)
    }

    pub(crate) fn health_url(&self) -> String {
        format!("{}/health/version", self.base_url)
    }
}

#[async_trait::async_trait]
impl UpstreamAuth for AppwriteClient {
    async fn session_status(&self, cookie: Option<&str>) -> Result<bool, UpstreamError> {
        // No cookie means no session; skip the round trip.
        let Some(cookie) = cookie.filter(|c| !c.trim().is_empty()) else {
            return Ok(false);
        };
        let resp = self
            .http
            .get(self.account_url())
            .header(PROJECT_HEADER, &self.project_id)
            .header(COOKIE, cookie)
            .send()
            .await
            .map_err(|e| UpstreamError::Request(e.to_string()))?;
        account_status_to_session(resp.status().as_u16())
    }

    async fn ping(&self) -> Result<(), UpstreamError> {
        let resp = self
            .http
            .get(self.health_url())
            .header(PROJECT_HEADER, &self.project_id)
            .send()
            .await
            .map_err(|e| UpstreamError::Request(e.to_string()))?;
        ping_status_ok(resp.status().as_u16())
    }
}

#[cfg(test)]
#[path = "upstream_auth_test.rs"]
mod tests;
