//! Neutral loading indicator shown while the session check is outstanding.

use leptos::prelude::*;

#[component]
pub fn LoadingIndicator() -> impl IntoView {
    view! {
        <div class="loading-screen" role="status" aria-live="polite">
            <div class="loading-screen__spinner"></div>
            <span class="loading-screen__label">"Loading..."</span>
        </div>
    }
}
