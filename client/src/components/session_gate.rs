//! Layout wrapper for the authenticated section.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every authenticated route renders under `SessionGate`. The gate provides a
//! fresh [`SessionContext`] for its subtree, starts one session check on
//! mount, and renders its children straight away. Deciding what to show
//! while the check is pending is left to the descendants.
//!
//! TRADE-OFFS
//! ==========
//! The check only runs in the browser. SSR renders the pending state, which
//! is what the hydrated view starts from as well.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::analytics::AnalyticsBeacon;
use crate::config::GateConfig;
use crate::net::auth::AuthBackendHandle;
use crate::state::session::SessionContext;
use crate::state::session_check::CheckGuard;

#[cfg(test)]
#[path = "session_gate_test.rs"]
mod session_gate_test;

/// Session gate: publishes the session status to `children` via context.
///
/// Uses the `AuthBackendHandle` and `GateConfig` from context when present,
/// falling back to the HTTP backend and default config.
#[component]
pub fn SessionGate(children: Children) -> impl IntoView {
    let config = use_context::<GateConfig>().unwrap_or_default();
    let backend = use_context::<AuthBackendHandle>().unwrap_or_default();

    let session = SessionContext::default();
    provide_context(session);

    let guard = CheckGuard::new();
    let teardown = guard.clone();
    on_cleanup(move || teardown.cancel());
    start_session_check(session, backend, &config, guard);

    view! {
        <AnalyticsBeacon/>
        {children()}
    }
}

/// Route layout hosting the gate around nested authenticated routes.
#[component]
pub fn AuthenticatedLayout() -> impl IntoView {
    view! {
        <SessionGate>
            <Outlet/>
        </SessionGate>
    }
}

fn start_session_check(session: SessionContext, backend: AuthBackendHandle, config: &GateConfig, guard: CheckGuard) {
    #[cfg(feature = "hydrate")]
    {
        use crate::state::session_check::run_session_check;

        let policy = config.failure_policy;
        leptos::task::spawn_local(async move {
            run_session_check(backend.backend(), policy, &guard, |state| session.apply(state)).await;
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (session, backend, config, guard);
    }
}
