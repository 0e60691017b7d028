//! Public sign-in notice.
//!
//! Sign-in itself happens on the external auth provider; this page only
//! explains where the visitor landed and offers a way back.

use leptos::prelude::*;

#[component]
pub fn LoginPage() -> impl IntoView {
    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Portal"</h1>
                <p class="login-card__subtitle">"You need to sign in to continue."</p>
                <a class="login-card__retry" href="/">"I have signed in"</a>
            </div>
        </div>
    }
}
