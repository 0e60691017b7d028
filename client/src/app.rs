//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::session_gate::AuthenticatedLayout;
use crate::config::{FAILURE_POLICY_META, GateConfig};
use crate::pages::{home::HomePage, login::LoginPage};

/// HTML shell rendered on the server for SSR + hydration.
///
/// Mirrors the server-provided failure policy into a `<meta>` tag for the
/// hydrated app to read back.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let config = use_context::<GateConfig>().unwrap_or_default();
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=FAILURE_POLICY_META content=config.failure_policy.as_str()/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the gate configuration and sets up client-side routing. Every
/// route nested under `AuthenticatedLayout` sees the session context.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = use_context::<GateConfig>().unwrap_or_else(GateConfig::from_document);
    provide_context(config);

    view! {
        <Title text="Portal"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <ParentRoute path=StaticSegment("") view=AuthenticatedLayout>
                    <Route path=StaticSegment("") view=HomePage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
