//! Fallback for paths no route matches. Public: no session required.

use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"This page isn't available"</h1>
            <p>"The link you followed may be broken, or the page may have been removed."</p>
            <A href="/" attr:class="auth-button">"Go to News Feed"</A>
        </div>
    }
}
