//! Session status published by the session gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gate owns one `SessionContext` per mount. Descendant views read it to
//! decide between loading, signed-in, and signed-out rendering, and may use
//! the setters (for example to drop `authorised` after a logout).
//!
//! DESIGN
//! ======
//! `SessionState` is the plain, framework-free value. It moves through a
//! single transition, `{status_loaded: false} -> {status_loaded: true, ..}`,
//! computed by [`SessionState::resolve`]. `SessionContext` wraps the same two
//! fields as signals so they propagate through the Leptos context tree.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::fmt;
use std::str::FromStr;

use leptos::prelude::*;

use crate::net::auth::AuthCheckError;

// =============================================================================
// FAILURE POLICY
// =============================================================================

/// What the gate publishes when the authentication check itself fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Mark the status loaded and the visitor unauthorised.
    #[default]
    FailClosed,
    /// Mark the status loaded and the visitor authorised.
    FailOpen,
    /// Leave the state pending, so descendants keep showing their loading UI.
    Hold,
}

impl FailurePolicy {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FailClosed => "fail_closed",
            Self::FailOpen => "fail_open",
            Self::Hold => "hold",
        }
    }
}

impl fmt::Display for FailurePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown failure policy '{0}' (expected 'fail_closed', 'fail_open' or 'hold')")]
pub struct UnknownFailurePolicy(pub String);

impl FromStr for FailurePolicy {
    type Err = UnknownFailurePolicy;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "fail_closed" => Ok(Self::FailClosed),
            "fail_open" => Ok(Self::FailOpen),
            "hold" => Ok(Self::Hold),
            other => Err(UnknownFailurePolicy(other.to_owned())),
        }
    }
}

// =============================================================================
// SESSION STATE
// =============================================================================

/// Authentication status for the current visitor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub authorised: bool,
    pub status_loaded: bool,
}

impl SessionState {
    /// True until the authentication check has produced a usable result.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        !self.status_loaded
    }

    /// Settle the state from the outcome of the authentication check.
    ///
    /// Once loaded, the state is final: resolving an already-loaded state
    /// returns it unchanged.
    #[must_use]
    pub fn resolve(self, outcome: &Result<bool, AuthCheckError>, policy: FailurePolicy) -> Self {
        if self.status_loaded {
            return self;
        }
        match (outcome, policy) {
            (Ok(authorised), _) => Self { authorised: *authorised, status_loaded: true },
            (Err(_), FailurePolicy::FailClosed) => Self { authorised: false, status_loaded: true },
            (Err(_), FailurePolicy::FailOpen) => Self { authorised: true, status_loaded: true },
            (Err(_), FailurePolicy::Hold) => self,
        }
    }
}

// =============================================================================
// SESSION CONTEXT
// =============================================================================

/// Reactive session status shared with every view under the gate.
///
/// Both fields are read/write signals, so consumers get the value and its
/// setter from the same handle.
#[derive(Clone, Copy, Debug)]
pub struct SessionContext {
    pub authorised: RwSignal<bool>,
    pub status_loaded: RwSignal<bool>,
}

impl SessionContext {
    #[must_use]
    pub fn new(initial: SessionState) -> Self {
        Self { authorised: RwSignal::new(initial.authorised), status_loaded: RwSignal::new(initial.status_loaded) }
    }

    /// Tracked read of both fields.
    pub fn snapshot(&self) -> SessionState {
        SessionState { authorised: self.authorised.get(), status_loaded: self.status_loaded.get() }
    }

    pub fn snapshot_untracked(&self) -> SessionState {
        SessionState { authorised: self.authorised.get_untracked(), status_loaded: self.status_loaded.get_untracked() }
    }

    /// Publish a settled state to all readers.
    pub fn apply(&self, state: SessionState) {
        self.authorised.set(state.authorised);
        self.status_loaded.set(state.status_loaded);
    }

    pub fn set_authorised(&self, authorised: bool) {
        self.authorised.set(authorised);
    }

    pub fn set_status_loaded(&self, loaded: bool) {
        self.status_loaded.set(loaded);
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new(SessionState::default())
    }
}
