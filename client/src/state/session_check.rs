//! One-shot session check driver.
//!
//! ARCHITECTURE
//! ============
//! The gate component only wires this into Leptos: it hands over the backend,
//! the failure policy, a `CheckGuard` cancelled on unmount, and a closure that
//! writes into its `SessionContext`. Keeping the driver free of signals lets
//! it run under a plain executor in tests.

#[cfg(test)]
#[path = "session_check_test.rs"]
mod session_check_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use super::session::{FailurePolicy, SessionState};
use crate::net::auth::AuthBackend;

/// Cancellation flag tied to the lifetime of the view that started a check.
#[derive(Clone, Debug, Default)]
pub struct CheckGuard {
    cancelled: Arc<AtomicBool>,
}

impl CheckGuard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop delivering results. Idempotent.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// What happened to the result of a session check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The settled state was published.
    Applied(SessionState),
    /// The check failed and the policy is `Hold`; nothing was published.
    Held,
    /// The owning view went away before the result arrived.
    Cancelled,
}

/// Ask `backend` once whether the session is authenticated and publish the
/// settled state through `apply`.
///
/// `apply` is called at most once, and never after `guard` is cancelled.
pub async fn run_session_check<B, F>(backend: &B, policy: FailurePolicy, guard: &CheckGuard, apply: F) -> CheckOutcome
where
    B: AuthBackend + ?Sized,
    F: FnOnce(SessionState),
{
    let result = backend.is_logged_in().await;

    if guard.is_cancelled() {
        log::debug!("session check finished after teardown; result dropped");
        return CheckOutcome::Cancelled;
    }

    match &result {
        Ok(authorised) => log::debug!("session check resolved: authorised={authorised}"),
        Err(e) => log::warn!("session check failed ({e}); applying {policy}"),
    }

    if result.is_err() && policy == FailurePolicy::Hold {
        return CheckOutcome::Held;
    }

    let state = SessionState::default().resolve(&result, policy);
    apply(state);
    CheckOutcome::Applied(state)
}
