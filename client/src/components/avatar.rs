//! Initials avatar used by posts, stories, contacts and the header.

use leptos::prelude::*;

use crate::net::types::initials;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AvatarSize {
    Small,
    #[default]
    Medium,
    Large,
    ExtraLarge,
}

impl AvatarSize {
    fn modifier(self) -> &'static str {
        match self {
            Self::Small => "sm",
            Self::Medium => "md",
            Self::Large => "lg",
            Self::ExtraLarge => "xl",
        }
    }
}

#[component]
pub fn Avatar(
    #[prop(into)] name: String,
    #[prop(into, default = "gray".to_owned())] color: String,
    #[prop(optional)] size: AvatarSize,
    /// Ring around the avatar, as on story cards.
    #[prop(optional)]
    ring: bool,
    /// Green presence dot.
    #[prop(optional)]
    online: bool,
) -> impl IntoView {
    let class = format!(
        "avatar avatar--{} avatar--{color}{}",
        size.modifier(),
        if ring { " avatar--ring" } else { "" }
    );
    view! {
        <span class=class title=name.clone()>
            {initials(&name)}
            <Show when=move || online>
                <span class="avatar__online"></span>
            </Show>
        </span>
    }
}
