//! Landing page of the authenticated section.

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::use_navigate;

use crate::config::GateConfig;
use crate::state::session::SessionContext;
use crate::util::auth::{SessionView, install_unauth_redirect, session_view};

/// Home page. Shows a loading indicator until the gate's check settles and
/// redirects to the login page when no session was found.
#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let config = use_context::<GateConfig>().unwrap_or_default();
    install_unauth_redirect(session, config.login_url, use_navigate());

    let on_leave = move |_| session.set_authorised(false);

    move || match session_view(&session.snapshot()) {
        SessionView::Loading => view! {
            <div class="session-loading" aria-busy="true">"Checking your session..."</div>
        }
        .into_any(),
        SessionView::SignedIn => view! {
            <section class="home">
                <h1>"Welcome back"</h1>
                <button class="home__leave" on:click=on_leave>"Leave portal"</button>
            </section>
        }
        .into_any(),
        SessionView::SignedOut => view! {
            <p class="session-signed-out">"Redirecting to sign in..."</p>
        }
        .into_any(),
    }
}
