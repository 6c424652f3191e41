//! Feed post card with a local like toggle.
//!
//! The like toggle is local state: it adds one to the displayed count while
//! active. Outside demo mode the toggle is also sent to the API, best-effort.

#[cfg(test)]
#[path = "post_card_test.rs"]
mod post_card_test;

use leptos::prelude::*;

use crate::components::avatar::{Avatar, AvatarSize};
use crate::config::ClientConfig;
use crate::net::api::{ApiClient, posts};
use crate::net::types::Post;
use crate::util::format::{count_label, format_count};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LikeState {
    pub liked: bool,
    base: u64,
}

impl LikeState {
    pub fn new(base: u64) -> Self {
        Self { liked: false, base }
    }

    /// Flip the like and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.liked = !self.liked;
        self.liked
    }

    pub fn count(&self) -> u64 {
        self.base.saturating_add(u64::from(self.liked))
    }
}

#[component]
pub fn PostCard(post: Post) -> impl IntoView {
    let like = RwSignal::new(LikeState::new(post.likes));
    let config = use_context::<ClientConfig>().unwrap_or_default();
    let api = use_context::<ApiClient>();
    let post_id = post.id;

    let on_like = move |_| {
        let mut liked = false;
        like.update(|l| liked = l.toggle());
        if config.demo_session {
            return;
        }
        let Some(api) = api.clone() else {
            return;
        };
        let request = if liked { posts::like(post_id) } else { posts::unlike(post_id) };
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            if let Err(e) = api.execute(request).await {
                log::debug!("post {post_id}: like sync failed: {e}");
            }
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (api, request);
        }
    };

    let like_class = move || {
        if like.get().liked { "post-card__action post-card__action--liked" } else { "post-card__action" }
    };

    view! {
        <article class="post-card">
            <header class="post-card__header">
                <Avatar name=post.author.name.clone() color=post.author.color.clone() size=AvatarSize::Large/>
                <div class="post-card__meta">
                    <p class="post-card__author">{post.author.name.clone()}</p>
                    <span class="post-card__time">
                        {post.posted.clone()}
                        " · "
                        <span class="icon icon--globe"></span>
                    </span>
                </div>
                <button class="post-card__more" title="More">
                    <span class="icon icon--more"></span>
                </button>
            </header>

            <p class="post-card__content">{post.content.clone()}</p>

            {post.image.clone().map(|src| view! {
                <div class="post-card__image">
                    <img src=src alt="Post attachment" loading="lazy"/>
                </div>
            })}

            <div class="post-card__stats">
                <span class="post-card__likes">
                    <span class="icon icon--thumbs-up"></span>
                    {move || format_count(like.get().count())}
                </span>
                <span class="post-card__counts">
                    <span>{count_label(post.comments, "Comment")}</span>
                    <span>{count_label(post.shares, "Share")}</span>
                </span>
            </div>

            <div class="post-card__actions">
                <button class=like_class on:click=on_like aria-pressed=move || like.get().liked.to_string()>
                    <span class="icon icon--thumbs-up"></span>
                    "Like"
                </button>
                <button class="post-card__action">
                    <span class="icon icon--comment"></span>
                    "Comment"
                </button>
                <button class="post-card__action">
                    <span class="icon icon--share"></span>
                    "Share"
                </button>
            </div>
        </article>
    }
}
