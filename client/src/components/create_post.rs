//! "What's on your mind" composer at the top of the feed.

use leptos::prelude::*;

use crate::components::avatar::{Avatar, AvatarSize};
use crate::net::types::User;

#[component]
pub fn CreatePost(user: User, on_post: Callback<String>) -> impl IntoView {
    let draft = RwSignal::new(String::new());
    let placeholder = format!("What's on your mind, {}?", user.first_name());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let content = draft.get_untracked();
        if content.trim().is_empty() {
            return;
        }
        on_post.run(content);
        draft.set(String::new());
    };

    view! {
        <form class="composer" on:submit=on_submit>
            <div class="composer__input-row">
                <Avatar name=user.name.clone() size=AvatarSize::Large/>
                <input
                    class="composer__input"
                    type="text"
                    placeholder=placeholder
                    prop:value=move || draft.get()
                    on:input=move |ev| draft.set(event_target_value(&ev))
                />
            </div>
            <div class="composer__actions">
                <button type="button" class="composer__action">
                    <span class="icon icon--video icon--red"></span>
                    <span>"Live Video"</span>
                </button>
                <button type="button" class="composer__action">
                    <span class="icon icon--image icon--green"></span>
                    <span>"Photo/Video"</span>
                </button>
                <button type="button" class="composer__action">
                    <span class="icon icon--smile icon--yellow"></span>
                    <span>"Feeling"</span>
                </button>
                <button type="submit" class="composer__submit" disabled=move || draft.get().trim().is_empty()>
                    "Post"
                </button>
            </div>
        </form>
    }
}
