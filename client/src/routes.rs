//! Route table shared by the router and the chrome.
//!
//! `app::App` wires these paths into `leptos_router`; the header and sidebar
//! use `AppRoute::from_path` to highlight the active destination.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Register,
    Home,
    Profile(u64),
    Friends,
    Messages,
    Settings,
    NotFound,
}

impl AppRoute {
    /// Match a location path (query and fragment ignored).
    pub fn from_path(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Self::Home,
            ["login"] => Self::Login,
            ["register" | "signup"] => Self::Register,
            ["profile", id] => id.parse().map_or(Self::NotFound, Self::Profile),
            ["friends"] => Self::Friends,
            ["messages"] => Self::Messages,
            ["settings"] => Self::Settings,
            _ => Self::NotFound,
        }
    }

    pub fn path(self) -> String {
        match self {
            Self::Login => "/login".to_owned(),
            Self::Register => "/register".to_owned(),
            Self::Home => "/".to_owned(),
            Self::Profile(id) => format!("/profile/{id}"),
            Self::Friends => "/friends".to_owned(),
            Self::Messages => "/messages".to_owned(),
            Self::Settings => "/settings".to_owned(),
            Self::NotFound => "/404".to_owned(),
        }
    }
}

/// True when a nav link targeting `link_path` should render as active.
pub fn is_active(current_path: &str, link_path: &str) -> bool {
    let current = AppRoute::from_path(current_path);
    current != AppRoute::NotFound && current == AppRoute::from_path(link_path)
}
