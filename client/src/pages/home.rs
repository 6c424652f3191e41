//! Home page: story strip, composer and the news feed.
//!
//! The feed starts from the fixture posts and is replaced by `GET /posts`
//! once it answers. Any API failure keeps the fixtures on screen. Posts
//! composed on this page are kept apart from the fetched list and always
//! render first, so a late fetch never drops them.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::create_post::CreatePost;
use crate::components::post_card::PostCard;
use crate::components::story_card::{CreateStoryCard, StoryCard};
use crate::config::ClientConfig;
use crate::data::fixtures::{self, STORIES};
use crate::net::api::{ApiClient, ApiError};
use crate::net::types::{Author, Post, User};
use crate::state::session::Session;

/// The fetched feed, or the fixtures when the fetch failed or came back empty.
pub fn feed_or_fixtures(result: Result<Vec<Post>, ApiError>) -> Vec<Post> {
    match result {
        Ok(posts) if !posts.is_empty() => posts,
        Ok(_) => fixtures::posts(),
        Err(e) => {
            log::debug!("home: feed unavailable, showing fixtures: {e}");
            fixtures::posts()
        }
    }
}

/// Build the optimistic post for composer text, or `None` for blank text.
///
/// The id is one past the largest id already in the feed.
pub fn compose_post(author: &User, content: &str, existing: &[Post]) -> Option<Post> {
    let content = content.trim();
    if content.is_empty() {
        return None;
    }
    let id = existing.iter().map(|p| p.id).max().unwrap_or(0).saturating_add(1);
    Some(Post {
        id,
        author: Author { name: author.name.clone(), color: "blue".to_owned() },
        posted: "Just now".to_owned(),
        content: content.to_owned(),
        image: None,
        likes: 0,
        comments: 0,
        shares: 0,
    })
}

/// Locally composed posts (newest first) ahead of the fetched feed.
///
/// Composed posts are renumbered above the largest fetched id so keys stay
/// unique whichever list arrived last.
pub fn merge_feed(composed: &[Post], fetched: &[Post]) -> Vec<Post> {
    let base = fetched.iter().map(|p| p.id).max().unwrap_or(0);
    let mut next = u64::try_from(composed.len()).unwrap_or(u64::MAX);
    let mut merged = Vec::with_capacity(composed.len() + fetched.len());
    for post in composed {
        merged.push(Post { id: base.saturating_add(next), ..post.clone() });
        next -= 1;
    }
    merged.extend(fetched.iter().cloned());
    merged
}

#[component]
pub fn HomePage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let config = expect_context::<ClientConfig>();
    let api = expect_context::<ApiClient>();

    let user = session.with_untracked(|s| s.identity().cloned()).unwrap_or_else(fixtures::current_user);
    let fetched = RwSignal::new(fixtures::posts());
    let composed = RwSignal::new(Vec::<Post>::new());
    let feed = Memo::new(move |_| composed.with(|c| fetched.with(|f| merge_feed(c, f))));

    #[cfg(feature = "hydrate")]
    if !config.demo_session {
        let api = api.clone();
        leptos::task::spawn_local(async move {
            let result = api.fetch::<Vec<Post>>(crate::net::api::posts::list(None)).await;
            let _ = fetched.try_set(feed_or_fixtures(result));
        });
    }

    let author = user.clone();
    let on_post = Callback::new(move |content: String| {
        let Some(post) = feed.with_untracked(|posts| compose_post(&author, &content, posts)) else {
            return;
        };
        let content = post.content.clone();
        composed.update(|posts| posts.insert(0, post));
        if config.demo_session {
            return;
        }
        #[cfg(feature = "hydrate")]
        {
            let api = api.clone();
            leptos::task::spawn_local(async move {
                use crate::net::api::posts;
                use crate::net::types::NewPost;

                let result = match posts::create(&NewPost { content }) {
                    Ok(request) => api.execute(request).await,
                    Err(e) => Err(e),
                };
                if let Err(e) = result {
                    log::warn!("home: publishing post failed: {e}");
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&api, content);
        }
    });

    view! {
        <div class="home-page">
            <div class="stories">
                <CreateStoryCard name=user.name.clone()/>
                {STORIES.iter().map(|story| view! { <StoryCard story=*story/> }).collect::<Vec<_>>()}
            </div>

            <CreatePost user=user on_post=on_post/>

            <div class="feed">
                <For
                    each=move || feed.get()
                    key=|post| post.id
                    children=move |post: Post| view! { <PostCard post=post/> }
                />
            </div>

            <p class="feed__more">"Loading more posts..."</p>
        </div>
    }
}
