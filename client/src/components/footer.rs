//! Page footer with language and utility links.

use leptos::prelude::*;

use crate::data::fixtures::{LANGUAGE_LINKS, UTILITY_LINKS};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="site-footer__languages">
                {LANGUAGE_LINKS.iter().map(|lang| view! { <a href="#">{*lang}</a> }).collect::<Vec<_>>()}
                <button class="site-footer__more" title="More Languages">"+"</button>
            </div>
            <hr class="site-footer__divider"/>
            <div class="site-footer__links">
                {UTILITY_LINKS.iter().map(|label| view! { <a href="#">{*label}</a> }).collect::<Vec<_>>()}
            </div>
            <p class="site-footer__copyright">"socialfeed © 2024"</p>
        </footer>
    }
}
