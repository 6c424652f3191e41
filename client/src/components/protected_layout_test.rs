use super::*;
use crate::net::types::User;
use crate::state::session::{CheckOutcome, SessionEvent};

fn resolved(outcome: CheckOutcome) -> Session {
    let mut session = Session::new();
    session.apply(SessionEvent::CheckCompleted(outcome));
    session
}

#[test]
fn redirect_renders_nothing() {
    let decision = decide(&resolved(CheckOutcome::Unauthenticated));
    assert_eq!(layout_view(decision), LayoutView::Empty);
}

#[test]
fn unknown_session_renders_loading_only() {
    assert_eq!(layout_view(decide(&Session::new())), LayoutView::Loading);
}

#[test]
fn authenticated_session_renders_content() {
    let user = User { id: 1, name: "Jane Doe".to_owned(), avatar_url: None };
    assert_eq!(layout_view(decide(&resolved(CheckOutcome::Authenticated(user)))), LayoutView::Content);
}

#[test]
fn content_only_for_render_decision() {
    for decision in [AccessDecision::Loading, AccessDecision::Redirect { to: "/login", replace: true }] {
        assert_ne!(layout_view(decision), LayoutView::Content, "{decision:?}");
    }
}

#[test]
fn navigate_options_carry_replace() {
    assert!(navigate_options(RedirectOptions { replace: true }).replace);
    assert!(!navigate_options(RedirectOptions { replace: false }).replace);
}

#[test]
fn navigate_options_keep_router_defaults_otherwise() {
    let opts = navigate_options(RedirectOptions { replace: true });
    let defaults = NavigateOptions::default();
    assert_eq!(opts.resolve, defaults.resolve);
    assert_eq!(opts.scroll, defaults.scroll);
}
