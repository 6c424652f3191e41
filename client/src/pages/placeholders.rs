//! Friends, messages and settings views.
//!
//! These routes exist so the sidebar and header links land on a protected
//! page; their content is static.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::avatar::Avatar;
use crate::data::fixtures::CONTACTS;
use crate::routes::AppRoute;
use crate::state::session::Session;

#[component]
pub fn FriendsPage() -> impl IntoView {
    view! {
        <section class="section-page">
            <h2 class="section-page__title">"Friends"</h2>
            <div class="friend-grid">
                {CONTACTS
                    .iter()
                    .map(|contact| {
                        view! {
                            <A href=AppRoute::Profile(contact.id).path() attr:class="friend-card">
                                <Avatar name=contact.name color=contact.color online=contact.online/>
                                <span class="friend-card__name">{contact.name}</span>
                            </A>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
pub fn MessagesPage() -> impl IntoView {
    view! {
        <section class="section-page">
            <h2 class="section-page__title">"Messages"</h2>
            <p class="section-page__empty">"No messages yet. Start a conversation from a friend's profile."</p>
        </section>
    }
}

#[component]
pub fn SettingsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let name = move || session.with(|s| s.identity().map(|u| u.name.clone()).unwrap_or_default());

    view! {
        <section class="section-page">
            <h2 class="section-page__title">"Settings"</h2>
            <dl class="settings-list">
                <dt>"Name"</dt>
                <dd>{name}</dd>
                <dt>"Language"</dt>
                <dd>"English (US)"</dd>
            </dl>
        </section>
    }
}
