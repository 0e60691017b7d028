//! Speed-insights analytics beacon.
//!
//! Renders a queue shim and a deferred collector script tag. The portal never
//! calls `window.si` itself; the shim only gives the collector a `window.siq`
//! queue to drain once it loads.

#[cfg(test)]
#[path = "analytics_test.rs"]
mod analytics_test;

use leptos::prelude::*;

pub const DEFAULT_ANALYTICS_SRC: &str = "/_vercel/speed-insights/script.js";

pub(crate) const ANALYTICS_BOOTSTRAP: &str =
    "window.si = window.si || function () { (window.siq = window.siq || []).push(arguments); };";

fn resolve_src(src: Option<String>) -> String {
    src.filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_ANALYTICS_SRC.to_owned())
}

/// Analytics widget rendered unconditionally by the session gate.
#[component]
pub fn AnalyticsBeacon(
    /// Collector script path; defaults to the hosted speed-insights script.
    #[prop(optional, into)]
    src: Option<String>,
) -> impl IntoView {
    let src = resolve_src(src);
    view! {
        <script inner_html=ANALYTICS_BOOTSTRAP></script>
        <script defer="defer" src=src data-sdkn="portal"></script>
    }
}
