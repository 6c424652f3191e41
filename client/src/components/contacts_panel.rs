//! Right-hand column: sponsored card and contacts filtered by the header
//! search box.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::avatar::Avatar;
use crate::data::fixtures::{CONTACTS, SPONSORED};
use crate::routes::AppRoute;
use crate::state::ui::UiState;

#[component]
pub fn ContactsPanel() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let contacts = move || {
        ui.with(|u| {
            CONTACTS
                .iter()
                .filter(|c| u.matches_search(c.name))
                .map(|contact| {
                    view! {
                        <A href=AppRoute::Profile(contact.id).path() attr:class="contacts__item">
                            <Avatar name=contact.name color=contact.color online=contact.online/>
                            <span class="contacts__name">{contact.name}</span>
                        </A>
                    }
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <aside class="contacts">
            <section class="contacts__sponsored">
                <h3 class="contacts__heading">"Sponsored"</h3>
                <div class="sponsored-card">
                    <div class="sponsored-card__banner">{SPONSORED.banner}</div>
                    <p class="sponsored-card__title">{SPONSORED.title}</p>
                    <p class="sponsored-card__domain">{SPONSORED.domain}</p>
                </div>
            </section>
            <section class="contacts__list">
                <div class="contacts__header">
                    <h3 class="contacts__heading">"Contacts"</h3>
                    <span class="icon icon--video"></span>
                    <span class="icon icon--message"></span>
                    <span class="icon icon--more"></span>
                </div>
                {contacts}
                <Show when=move || ui.with(|u| !CONTACTS.iter().any(|c| u.matches_search(c.name)))>
                    <p class="contacts__empty">"No contacts match your search."</p>
                </Show>
            </section>
        </aside>
    }
}
