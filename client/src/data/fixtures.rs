//! Inline fixture tables.
//!
//! None of this has a lifecycle: the tables are rebuilt on each call and
//! rendered as-is. The home feed falls back to `posts()` whenever the API is
//! unreachable.

#[cfg(test)]
#[path = "fixtures_test.rs"]
mod fixtures_test;

use crate::net::types::{Author, Post, User};

/// A labelled link in the sidebar, header or shortcuts list.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub path: &'static str,
    /// Icon class suffix (`icon--{icon}`).
    pub icon: &'static str,
    /// Unread badge; zero hides it.
    pub badge: u32,
}

const fn link(label: &'static str, path: &'static str, icon: &'static str) -> NavLink {
    NavLink { label, path, icon, badge: 0 }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Story {
    pub id: u64,
    pub user: &'static str,
    pub color: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Contact {
    pub id: u64,
    pub name: &'static str,
    pub color: &'static str,
    pub online: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sponsored {
    pub banner: &'static str,
    pub title: &'static str,
    pub domain: &'static str,
}

/// The identity used by the demo session source.
pub fn current_user() -> User {
    User { id: 1, name: "Jane Doe".to_owned(), avatar_url: None }
}

/// Header center navigation.
pub static HEADER_LINKS: [NavLink; 5] = [
    link("Home", "/", "home"),
    link("Watch", "/watch", "tv"),
    link("Marketplace", "/marketplace", "store"),
    link("Groups", "/groups", "users"),
    link("Gaming", "/gaming", "gamepad"),
];

/// Left sidebar primary links; the first `SIDEBAR_VISIBLE` show collapsed.
pub static SIDEBAR_LINKS: [NavLink; 7] = [
    NavLink { label: "Friends", path: "/friends", icon: "users", badge: 5 },
    NavLink { label: "Messenger", path: "/messages", icon: "message", badge: 3 },
    link("Groups", "/groups", "group"),
    link("Marketplace", "/marketplace", "store"),
    link("Watch", "/watch", "tv"),
    link("Memories", "/memories", "clock"),
    NavLink { label: "Events", path: "/events", icon: "calendar", badge: 1 },
];

pub const SIDEBAR_VISIBLE: usize = 5;

pub static SHORTCUTS: [NavLink; 3] = [
    link("Jobs", "/jobs", "briefcase"),
    link("Gaming Video", "/gaming", "gamepad"),
    link("Saved", "/saved", "bookmark"),
];

pub static SIDEBAR_FOOTER_LINKS: [NavLink; 2] = [
    link("Help & Support", "/help", "help"),
    link("Settings & Privacy", "/settings", "settings"),
];

pub static LANGUAGE_LINKS: [&str; 10] = [
    "English (US)",
    "Español",
    "Français (France)",
    "العربية",
    "Português (Brasil)",
    "Deutsch",
    "Italiano",
    "한국어",
    "日本語",
    "简体中文",
];

pub static UTILITY_LINKS: [&str; 16] = [
    "Sign Up",
    "Log In",
    "Messenger",
    "Video",
    "Places",
    "Games",
    "Marketplace",
    "Groups",
    "About",
    "Create Ad",
    "Create Page",
    "Developers",
    "Careers",
    "Cookies",
    "Terms",
    "Help",
];

pub const COPYRIGHT: &str = "Privacy · Terms · Advertising · Cookies · socialfeed © 2024";

pub static STORIES: [Story; 4] = [
    Story { id: 1, user: "Maria K.", color: "blue" },
    Story { id: 2, user: "John S.", color: "green" },
    Story { id: 3, user: "Sarah M.", color: "red" },
    Story { id: 4, user: "Tech Hub", color: "purple" },
];

pub static CONTACTS: [Contact; 6] = [
    Contact { id: 2, name: "Bill Gates", color: "red", online: true },
    Contact { id: 3, name: "Elon Musk", color: "purple", online: false },
    Contact { id: 4, name: "Alice Smith", color: "green", online: true },
    Contact { id: 5, name: "Diana Prince", color: "yellow", online: true },
    Contact { id: 6, name: "Ethan Hunt", color: "pink", online: false },
    Contact { id: 7, name: "Leo Messi", color: "cyan", online: true },
];

pub const SPONSORED: Sponsored = Sponsored {
    banner: "Rust Web Mastery",
    title: "Learn reactive UIs in Rust today!",
    domain: "learnleptos.dev",
};

fn post(
    id: u64,
    (name, color): (&str, &str),
    posted: &str,
    content: &str,
    image: bool,
    (likes, comments, shares): (u64, u64, u64),
) -> Post {
    Post {
        id,
        author: Author { name: name.to_owned(), color: color.to_owned() },
        posted: posted.to_owned(),
        content: content.to_owned(),
        image: image.then(|| format!("https://picsum.photos/800/450?random={id}")),
        likes,
        comments,
        shares,
    }
}

/// News feed posts.
pub fn posts() -> Vec<Post> {
    vec![
        post(
            101,
            ("Mark Z.", "indigo"),
            "2h ago",
            "Just finished coding the next big feature! Exciting times ahead. Focusing on community connection and performance improvements.",
            false,
            (1540, 320, 89),
        ),
        post(
            102,
            ("SpaceX Official", "red"),
            "1 day ago",
            "Starship launch successful! Taking humanity one step closer to Mars. 🚀 We are proud of the team's dedication.",
            true,
            (54_000, 12_000, 5100),
        ),
        post(
            103,
            ("Sarah Connor", "pink"),
            "5 hours ago",
            "Just finished a killer workout! Feeling the burn and loving the energy boost. Consistency is key!",
            false,
            (120, 15, 2),
        ),
        post(
            104,
            ("Platform Developers", "gray"),
            "1 day ago",
            "Don't forget to check out the latest API updates. Performance improvements across the board!",
            true,
            (800, 90, 10),
        ),
    ]
}

/// Posts shown on a profile page.
pub fn profile_posts(user: &User) -> Vec<Post> {
    vec![post(
        900 + user.id,
        (user.name.as_str(), "blue"),
        "3 days ago",
        "Setting up the architecture is crucial for a scalable social app.",
        false,
        (42, 4, 1),
    )]
}

/// Fixture identity for a profile route, falling back to a placeholder name.
pub fn user_by_id(user_id: u64) -> User {
    if user_id == current_user().id {
        return current_user();
    }
    CONTACTS
        .iter()
        .find(|c| c.id == user_id)
        .map_or_else(
            || User { id: user_id, name: format!("User {user_id}"), avatar_url: None },
            |c| User { id: c.id, name: c.name.to_owned(), avatar_url: None },
        )
}
