//! Story tiles for the home page strip.

use leptos::prelude::*;

use crate::components::avatar::{Avatar, AvatarSize};
use crate::data::fixtures::Story;

#[component]
pub fn StoryCard(story: Story) -> impl IntoView {
    view! {
        <div class=format!("story-card story-card--{}", story.color)>
            <div class="story-card__avatar">
                <Avatar name=story.user color="white" ring=true/>
            </div>
            <p class="story-card__name">{story.user}</p>
        </div>
    }
}

/// The leading "Create Story" tile for the signed-in user.
#[component]
pub fn CreateStoryCard(#[prop(into)] name: String) -> impl IntoView {
    view! {
        <div class="story-card story-card--create">
            <div class="story-card__avatar">
                <Avatar name=name size=AvatarSize::Large color="blue"/>
                <span class="story-card__plus">"+"</span>
            </div>
            <p class="story-card__name">"Create Story"</p>
        </div>
    }
}
