//! Left navigation sidebar with a See More / See Less toggle.

#[cfg(test)]
#[path = "sidebar_test.rs"]
mod sidebar_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::avatar::{Avatar, AvatarSize};
use crate::data::fixtures::{COPYRIGHT, NavLink, SHORTCUTS, SIDEBAR_FOOTER_LINKS, SIDEBAR_LINKS, SIDEBAR_VISIBLE};
use crate::routes::AppRoute;
use crate::state::session::Session;
use crate::state::ui::UiState;

/// Primary links shown for the given expansion state.
pub fn visible_links(expanded: bool) -> &'static [NavLink] {
    if expanded { &SIDEBAR_LINKS } else { &SIDEBAR_LINKS[..SIDEBAR_VISIBLE.min(SIDEBAR_LINKS.len())] }
}

/// The toggle only exists when some links are hidden.
pub fn has_more_links() -> bool {
    SIDEBAR_LINKS.len() > SIDEBAR_VISIBLE
}

pub fn toggle_label(expanded: bool) -> &'static str {
    if expanded { "See Less" } else { "See More" }
}

#[component]
fn SidebarItem(link: NavLink) -> impl IntoView {
    view! {
        <A href=link.path attr:class="sidebar__item">
            <span class=format!("icon icon--{}", link.icon)></span>
            <span class="sidebar__label">{link.label}</span>
            <Show when=move || { link.badge > 0 }>
                <span class="sidebar__badge">{link.badge}</span>
            </Show>
        </A>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let expanded = move || ui.with(|u| u.sidebar_expanded);

    let user_item = move || {
        session.with(|s| {
            s.identity().map(|user| {
                let href = AppRoute::Profile(user.id).path();
                let name = user.name.clone();
                view! {
                    <A href=href attr:class="sidebar__item sidebar__item--user">
                        <Avatar name=name.clone() size=AvatarSize::Small color="blue"/>
                        <span class="sidebar__label">{name}</span>
                    </A>
                }
            })
        })
    };

    view! {
        <aside class="sidebar">
            <nav>
                {user_item}
                {move || {
                    visible_links(expanded())
                        .iter()
                        .map(|link| view! { <SidebarItem link=*link/> })
                        .collect::<Vec<_>>()
                }}
                <Show when=has_more_links>
                    <button
                        class="sidebar__item sidebar__toggle"
                        on:click=move |_| {
                            ui.update(|u| {
                                u.toggle_sidebar();
                            });
                        }
                    >
                        <span class=move || {
                            if expanded() { "icon icon--chevron-up" } else { "icon icon--chevron-down" }
                        }></span>
                        <span class="sidebar__label">{move || toggle_label(expanded())}</span>
                    </button>
                </Show>

                <hr class="sidebar__divider"/>
                <h3 class="sidebar__heading">"Your Shortcuts"</h3>
                {SHORTCUTS.iter().map(|link| view! { <SidebarItem link=*link/> }).collect::<Vec<_>>()}

                <hr class="sidebar__divider"/>
                {SIDEBAR_FOOTER_LINKS.iter().map(|link| view! { <SidebarItem link=*link/> }).collect::<Vec<_>>()}

                <footer class="sidebar__copyright">
                    <p>{COPYRIGHT}</p>
                </footer>
            </nav>
        </aside>
    }
}
