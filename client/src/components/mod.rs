//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the feed chrome and cards while reading shared state
//! from Leptos context providers. `protected_layout` is the only component
//! that decides whether a view renders at all.

pub mod avatar;
pub mod chrome;
pub mod contacts_panel;
pub mod create_post;
pub mod footer;
pub mod header;
pub mod loading;
pub mod post_card;
pub mod protected_layout;
pub mod sidebar;
pub mod story_card;
