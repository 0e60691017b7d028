//! Session gate configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The server builds a `GateConfig` from its environment and provides it as
//! context during SSR. The shell mirrors the failure policy into a `<meta>`
//! tag so the hydrated app applies the same policy instead of the default.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use crate::state::session::FailurePolicy;

pub const FAILURE_POLICY_META: &str = "portal-auth-failure-policy";
pub const DEFAULT_LOGIN_URL: &str = "/login";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GateConfig {
    /// State published when the session check itself fails.
    pub failure_policy: FailurePolicy,
    /// Where signed-out visitors are sent once the check has loaded.
    pub login_url: String,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self { failure_policy: FailurePolicy::default(), login_url: DEFAULT_LOGIN_URL.to_owned() }
    }
}

impl GateConfig {
    /// Apply the raw `<meta>` policy value on top of the defaults.
    ///
    /// An unparseable value is logged and ignored.
    #[must_use]
    pub fn from_meta(failure_policy: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(raw) = failure_policy {
            match raw.parse() {
                Ok(policy) => config.failure_policy = policy,
                Err(e) => log::warn!("{e}; using {}", config.failure_policy),
            }
        }
        config
    }

    /// Read the config the server rendered into the document head.
    pub fn from_document() -> Self {
        Self::from_meta(meta_content(FAILURE_POLICY_META).as_deref())
    }
}

fn meta_content(name: &str) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        let doc = web_sys::window()?.document()?;
        let el = doc.query_selector(&format!("meta[name=\"{name}\"]")).ok()??;
        el.get_attribute("content")
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = name;
        None
    }
}
