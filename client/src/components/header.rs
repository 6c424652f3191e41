//! Top navigation bar: logo, search, section links and account actions.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::components::avatar::{Avatar, AvatarSize};
use crate::data::fixtures::HEADER_LINKS;
use crate::net::api::ApiClient;
use crate::routes::{AppRoute, is_active};
use crate::state::session::{ClearReason, Session, SessionEvents};
use crate::state::ui::UiState;

#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let events = expect_context::<SessionEvents>();
    let api = expect_context::<ApiClient>();
    let pathname = use_location().pathname;

    let identity = move || session.with(|s| s.identity().cloned());
    let profile_href = move || identity().map_or_else(|| "/".to_owned(), |u| AppRoute::Profile(u.id).path());
    let display_name = move || identity().map(|u| u.first_name().to_owned()).unwrap_or_default();

    let on_logout = move |_| {
        api.tokens().clear();
        events.clear(ClearReason::Logout);
    };

    view! {
        <header class="top-bar">
            <div class="top-bar__left">
                <A href="/" attr:class="top-bar__logo" attr:aria-label="Home">"f"</A>
                <label class="top-bar__search">
                    <span class="icon icon--search"></span>
                    <input
                        type="search"
                        placeholder="Search socialfeed"
                        prop:value=move || ui.with(|u| u.search_query.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            ui.update(|u| u.search_query = value);
                        }
                    />
                </label>
            </div>

            <nav class="top-bar__nav">
                {HEADER_LINKS
                    .iter()
                    .map(|link| {
                        let path = link.path;
                        let class = move || {
                            if is_active(&pathname.get(), path) {
                                "top-bar__nav-link top-bar__nav-link--active"
                            } else {
                                "top-bar__nav-link"
                            }
                        };
                        view! {
                            <A href=path attr:class=class attr:title=link.label>
                                <span class=format!("icon icon--{}", link.icon)></span>
                            </A>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>

            <div class="top-bar__right">
                <A href=profile_href attr:class="top-bar__profile">
                    <Avatar name=display_name() size=AvatarSize::Small color="blue"/>
                    <span class="top-bar__profile-name">{display_name}</span>
                </A>
                <button class="top-bar__action" title="Create">
                    <span class="icon icon--plus"></span>
                </button>
                <button class="top-bar__action" title="Messenger">
                    <span class="icon icon--message"></span>
                </button>
                <button class="top-bar__action" title="Notifications">
                    <span class="icon icon--bell"></span>
                </button>
                <button class="top-bar__action top-bar__logout" title="Log out" on:click=on_logout>
                    <span class="icon icon--logout"></span>
                </button>
            </div>
        </header>
    }
}
