//! Server configuration parsed from environment variables.
//!
//! `main` loads `.env` via `dotenvy` first, so every variable here may also
//! come from that file.

use portal_client::config::GateConfig;
use portal_client::state::session::FailurePolicy;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_AUTH_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_AUTH_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable was set but could not be parsed.
    #[error("invalid {var}: {reason}")]
    Invalid { var: &'static str, reason: String },

    /// A variable required by another one is not set.
    #[error("missing {var} (required when {required_by} is set)")]
    Missing { var: &'static str, required_by: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpstreamTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

/// Upstream authentication service (Appwrite-style account API).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamAuthConfig {
    /// API root, e.g. `https://auth.example.com/v1`, without trailing slash.
    pub base_url: String,
    pub project_id: String,
    pub timeouts: UpstreamTimeouts,
}

/// Keys accepted in the `x-api-key` header of guarded routes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiKeyConfig {
    pub internal: Option<String>,
    pub external: Vec<String>,
}

impl ApiKeyConfig {
    /// The guard is off when no key of either kind is configured.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.internal.is_some() || !self.external.is_empty()
    }

    #[must_use]
    pub fn accepts(&self, key: Option<&str>) -> bool {
        if !self.is_enabled() {
            return true;
        }
        let Some(key) = key.map(str::trim).filter(|k| !k.is_empty()) else {
            return false;
        };
        self.internal.as_deref() == Some(key) || self.external.iter().any(|k| k == key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub upstream: Option<UpstreamAuthConfig>,
    pub api_keys: ApiKeyConfig,
    /// Handed to the Leptos app as context during SSR.
    pub gate: GateConfig,
}

impl ServerConfig {
    /// Build typed server config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `AUTH_BACKEND_URL`: upstream auth API root; status checks are disabled without it
    /// - `AUTH_PROJECT_ID`: required when `AUTH_BACKEND_URL` is set
    /// - `AUTH_REQUEST_TIMEOUT_SECS`: default 10
    /// - `AUTH_CONNECT_TIMEOUT_SECS`: default 5
    /// - `INTERNAL_API_KEY`: key accepted by guarded routes
    /// - `EXTERNAL_API_KEYS`: comma-separated list of further accepted keys
    /// - `PORTAL_AUTH_FAILURE_POLICY`: `fail_closed` (default), `fail_open` or `hold`
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a value is malformed or `AUTH_PROJECT_ID`
    /// is missing while `AUTH_BACKEND_URL` is set.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`ServerConfig::from_env`], reading values through `lookup`.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match non_empty(&lookup, "PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|e| ConfigError::Invalid { var: "PORT", reason: e.to_string() })?,
            None => DEFAULT_PORT,
        };

        let upstream = match non_empty(&lookup, "AUTH_BACKEND_URL") {
            Some(url) => {
                let project_id = non_empty(&lookup, "AUTH_PROJECT_ID")
                    .ok_or(ConfigError::Missing { var: "AUTH_PROJECT_ID", required_by: "AUTH_BACKEND_URL" })?;
                Some(UpstreamAuthConfig {
                    base_url: url.trim_end_matches('/').to_owned(),
                    project_id,
                    timeouts: UpstreamTimeouts {
                        request_secs: parse_u64(&lookup, "AUTH_REQUEST_TIMEOUT_SECS", DEFAULT_AUTH_REQUEST_TIMEOUT_SECS)?,
                        connect_secs: parse_u64(&lookup, "AUTH_CONNECT_TIMEOUT_SECS", DEFAULT_AUTH_CONNECT_TIMEOUT_SECS)?,
                    },
                })
            }
            None => None,
        };

        let api_keys = ApiKeyConfig {
            internal: non_empty(&lookup, "INTERNAL_API_KEY"),
            external: non_empty(&lookup, "EXTERNAL_API_KEYS")
                .map(|raw| {
                    raw.split(',')
                        .map(str::trim)
                        .filter(|k| !k.is_empty())
                        .map(str::to_owned)
                        .collect()
                })
                .unwrap_or_default(),
        };

        let mut gate = GateConfig::default();
        if let Some(raw) = non_empty(&lookup, "PORTAL_AUTH_FAILURE_POLICY") {
            gate.failure_policy = raw
                .parse::<FailurePolicy>()
                .map_err(|e| ConfigError::Invalid { var: "PORTAL_AUTH_FAILURE_POLICY", reason: e.to_string() })?;
        }

        Ok(Self { port, upstream, api_keys, gate })
    }
}

fn non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty())
}

fn parse_u64<F>(lookup: &F, key: &'static str, default: u64) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match non_empty(lookup, key) {
        Some(raw) => raw
            .parse::<u64>()
            .map_err(|e| ConfigError::Invalid { var: key, reason: e.to_string() }),
        None => Ok(default),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
