//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages under the session gate apply identical loading and redirect
//! behavior, driven only by the published `SessionState`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{SessionContext, SessionState};

/// Which branch a session-aware view should render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionView {
    Loading,
    SignedIn,
    SignedOut,
}

#[must_use]
pub fn session_view(state: &SessionState) -> SessionView {
    match (state.status_loaded, state.authorised) {
        (false, _) => SessionView::Loading,
        (true, true) => SessionView::SignedIn,
        (true, false) => SessionView::SignedOut,
    }
}

/// Redirect only once the check has loaded and found no session.
#[must_use]
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    state.status_loaded && !state.authorised
}

/// Navigate to `login_url` whenever the session settles as signed out.
pub fn install_unauth_redirect<F>(session: SessionContext, login_url: String, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&session.snapshot()) {
            navigate(&login_url, NavigateOptions::default());
        }
    });
}
