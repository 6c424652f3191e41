//! Client configuration baked in at compile time.
//!
//! The WASM bundle has no process environment, so values are read with
//! `option_env!` when the crate is built and provided to the component tree
//! as a context.
//!
//! - `SOCIALFEED_API_BASE_URL`: REST API root (default
//!   `http://localhost:3001/api/v1`).
//! - `SOCIALFEED_DEMO_SESSION`: `1`/`true`/`yes`/`on` resolves the session
//!   from the fixture identity instead of `GET /auth/me`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3001/api/v1";

/// `localStorage` key holding the bearer token.
pub const TOKEN_STORAGE_KEY: &str = "fb_auth_token";

/// `localStorage` key marking that demo mode already issued its token.
pub const DEMO_SEEDED_STORAGE_KEY: &str = "fb_demo_seeded";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_base_url: String,
    pub demo_session: bool,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { api_base_url: DEFAULT_API_BASE_URL.to_owned(), demo_session: false }
    }
}

impl ClientConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(option_env!("SOCIALFEED_API_BASE_URL"), option_env!("SOCIALFEED_DEMO_SESSION"))
    }

    fn from_values(api_base_url: Option<&str>, demo_session: Option<&str>) -> Self {
        let api_base_url = api_base_url
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_BASE_URL)
            .trim_end_matches('/')
            .to_owned();
        let demo_session = demo_session.and_then(parse_flag).unwrap_or(false);
        Self { api_base_url, demo_session }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
