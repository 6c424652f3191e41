//! Profile page for `/profile/:user_id`.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::avatar::{Avatar, AvatarSize};
use crate::components::post_card::PostCard;
use crate::config::ClientConfig;
use crate::data::fixtures;
use crate::net::api::ApiClient;
use crate::net::types::User;
use crate::state::session::Session;

/// Resolve the route parameter to the user whose profile is shown.
///
/// The signed-in identity wins when the ids match; otherwise the fixture
/// directory supplies a name. A non-numeric parameter has no profile.
pub fn profile_user(param: Option<&str>, identity: Option<&User>) -> Option<User> {
    let user_id: u64 = param?.trim().parse().ok()?;
    match identity {
        Some(user) if user.id == user_id => Some(user.clone()),
        _ => Some(fixtures::user_by_id(user_id)),
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let params = use_params_map();

    let user = Memo::new(move |_| {
        let param = params.with(|p| p.get("user_id"));
        session.with(|s| profile_user(param.as_deref(), s.identity()))
    });

    move || match user.get() {
        Some(user) => view! { <ProfileView user=user/> }.into_any(),
        None => view! {
            <div class="profile-page profile-page--missing">
                <h2>"This profile isn't available"</h2>
                <p>"The link may be broken, or the profile may have been removed."</p>
            </div>
        }
        .into_any(),
    }
}

#[component]
fn ProfileView(user: User) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let config = expect_context::<ClientConfig>();
    let api = expect_context::<ApiClient>();
    let is_self = session.with_untracked(|s| s.identity().is_some_and(|me| me.id == user.id));
    let request_sent = RwSignal::new(false);
    let user_id = user.id;

    let on_add_friend = move |_| {
        if request_sent.get() {
            return;
        }
        request_sent.set(true);
        if config.demo_session {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                let request = crate::net::api::users::send_friend_request(user_id);
                if let Err(e) = api.execute(request).await {
                    log::warn!("profile {user_id}: friend request failed: {e}");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, user_id);
        }
    };

    let posts = fixtures::profile_posts(&user);

    view! {
        <div class="profile-page">
            <div class="profile-page__cover"></div>
            <div class="profile-page__header">
                <Avatar name=user.name.clone() size=AvatarSize::ExtraLarge color="blue"/>
                <div class="profile-page__identity">
                    <h1>{user.name.clone()}</h1>
                    <p class="profile-page__headline">"Building the modern web."</p>
                </div>
                {if is_self {
                    view! { <button class="profile-page__action">"Edit profile"</button> }.into_any()
                } else {
                    view! {
                        <button
                            class="profile-page__action profile-page__action--primary"
                            on:click=on_add_friend
                            disabled=move || request_sent.get()
                        >
                            {move || if request_sent.get() { "Request sent" } else { "Add Friend" }}
                        </button>
                    }
                    .into_any()
                }}
            </div>
            <div class="profile-page__posts">
                {posts.into_iter().map(|post| view! { <PostCard post=post/> }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}
