//! Route access control for protected views.
//!
//! SYSTEM CONTEXT
//! ==============
//! `components::protected_layout::ProtectedLayout` calls `enforce` each time
//! the session signal changes. The decision is a pure function of the
//! session status:
//!
//! | status            | decision                          |
//! |-------------------|-----------------------------------|
//! | `Unknown`         | loading indicator, no redirect    |
//! | `Authenticated`   | render the view inside the chrome |
//! | `Unauthenticated` | replace-redirect to `/login`      |
//!
//! No redirect is ever issued while the status is `Unknown`, so a page load
//! never flashes the login screen before the session check settles.

#[cfg(test)]
#[path = "access_test.rs"]
mod access_test;

use crate::routes::AppRoute;
use crate::state::session::{Session, SessionStatus};

pub const LOGIN_PATH: &str = "/login";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessDecision {
    Loading,
    Render,
    Redirect { to: &'static str, replace: bool },
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RedirectOptions {
    /// Overwrite the current history entry instead of pushing one.
    pub replace: bool,
}

/// The URL-transition side of the router.
pub trait Navigator {
    fn current_path(&self) -> String;
    fn redirect(&self, path: &str, options: RedirectOptions);
}

pub fn decide(session: &Session) -> AccessDecision {
    match session.status() {
        SessionStatus::Unknown => AccessDecision::Loading,
        SessionStatus::Authenticated => AccessDecision::Render,
        SessionStatus::Unauthenticated => AccessDecision::Redirect { to: LOGIN_PATH, replace: true },
    }
}

/// Decide and perform the redirect, if any. Never mutates the session.
///
/// The redirect is skipped while the router already sits on the login page,
/// which happens for one render when the guard unmounts after navigating.
/// Every other path that mounts the guard is protected, including ones whose
/// parameters do not parse.
pub fn enforce<N: Navigator + ?Sized>(session: &Session, navigator: &N) -> AccessDecision {
    let decision = decide(session);
    if let AccessDecision::Redirect { to, replace } = decision {
        let from = navigator.current_path();
        if AppRoute::from_path(&from) == AppRoute::Login {
            return decision;
        }
        log::info!("access: signed out on {from}, redirecting to {to}");
        navigator.redirect(to, RedirectOptions { replace });
    }
    decision
}
