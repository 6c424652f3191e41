use std::sync::Arc;

use futures::executor::block_on;

use super::*;
use crate::state::session::{ClearReason, SessionStatus};
use crate::util::token_store::MemoryTokenStore;

fn api_with(store: MemoryTokenStore) -> ApiClient {
    ApiClient::new("http://localhost:3001/api/v1", Arc::new(store))
}

fn fixture_source(store: MemoryTokenStore) -> SessionSource {
    SessionSource::Fixture { user: fixtures::current_user(), api: api_with(store) }
}

/// Run the pump to completion against a plain `Session`, recording each
/// resulting status.
fn pump(source: SessionSource, queued: Vec<SessionEvent>) -> (Session, Vec<SessionStatus>) {
    let (events, rx) = SessionEvents::channel();
    for event in queued {
        events.send(event);
    }
    drop(events);

    let mut session = Session::new();
    let mut seen = Vec::new();
    block_on(run_session_pump(source, rx, |event| {
        let t = session.apply(event);
        seen.push(t.to);
        Some(t)
    }));
    (session, seen)
}

// =============================================================
// normalize
// =============================================================

#[test]
fn normalize_maps_user_to_authenticated() {
    let user = fixtures::current_user();
    assert_eq!(normalize(Ok(user.clone())), CheckOutcome::Authenticated(user));
}

#[test]
fn normalize_maps_401_to_unauthenticated() {
    assert_eq!(normalize(Err(ApiError::Unauthorized)), CheckOutcome::Unauthenticated);
}

#[test]
fn normalize_maps_other_errors_to_failed() {
    assert_eq!(
        normalize(Err(ApiError::Status { status: 502 })),
        CheckOutcome::Failed("request failed: status 502".to_owned())
    );
}

// =============================================================
// SessionSource
// =============================================================

#[test]
fn api_source_without_token_skips_request() {
    let source = SessionSource::Api(api_with(MemoryTokenStore::default()));
    assert_eq!(block_on(source.check()), CheckOutcome::Unauthenticated);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn api_source_off_browser_reports_failure() {
    let source = SessionSource::Api(api_with(MemoryTokenStore::with_token("t")));
    assert_eq!(block_on(source.check()), CheckOutcome::Failed("not available on server".to_owned()));
}

#[test]
fn fixture_source_follows_token_presence() {
    assert!(matches!(
        block_on(fixture_source(MemoryTokenStore::with_token(DEMO_TOKEN)).check()),
        CheckOutcome::Authenticated(_)
    ));
    assert_eq!(block_on(fixture_source(MemoryTokenStore::default()).check()), CheckOutcome::Unauthenticated);
}

#[test]
fn from_config_picks_fixture_in_demo_mode() {
    let api = api_with(MemoryTokenStore::default());
    let demo = ClientConfig { demo_session: true, ..ClientConfig::default() };
    assert!(matches!(SessionSource::from_config(&demo, &api), SessionSource::Fixture { .. }));
    assert!(matches!(SessionSource::from_config(&ClientConfig::default(), &api), SessionSource::Api(_)));
}

// =============================================================
// run_session_pump
// =============================================================

#[test]
fn pump_resolves_initial_check() {
    let (session, seen) = pump(fixture_source(MemoryTokenStore::with_token(DEMO_TOKEN)), vec![]);
    assert!(session.authenticated());
    assert_eq!(seen, vec![SessionStatus::Authenticated]);
}

#[test]
fn pump_rechecks_after_clear() {
    let (session, seen) = pump(
        fixture_source(MemoryTokenStore::with_token(DEMO_TOKEN)),
        vec![SessionEvent::Cleared(ClearReason::Logout)],
    );
    assert_eq!(
        seen,
        vec![SessionStatus::Authenticated, SessionStatus::Unknown, SessionStatus::Authenticated]
    );
    assert!(session.authenticated());
}

#[test]
fn pump_signed_out_stays_signed_out_after_expiry() {
    let (session, seen) = pump(
        SessionSource::Api(api_with(MemoryTokenStore::default())),
        vec![SessionEvent::Cleared(ClearReason::Expired)],
    );
    assert_eq!(
        seen,
        vec![SessionStatus::Unauthenticated, SessionStatus::Unknown, SessionStatus::Unauthenticated]
    );
    assert_eq!(session.status(), SessionStatus::Unauthenticated);
}

#[test]
fn pump_stops_when_apply_reports_disposed() {
    let (events, rx) = SessionEvents::channel();
    events.clear(ClearReason::Logout);
    let mut calls = 0;
    block_on(run_session_pump(fixture_source(MemoryTokenStore::default()), rx, |_| {
        calls += 1;
        None
    }));
    assert_eq!(calls, 1);
    drop(events);
}

// =============================================================
// sign_in
// =============================================================

#[test]
fn sign_in_stores_token_and_requests_fresh_cycle() {
    use futures::StreamExt;

    let (events, rx) = SessionEvents::channel();
    let api = api_with(MemoryTokenStore::default());
    sign_in(&api, &events, "new-token");
    drop(events);

    assert_eq!(api.tokens().get().as_deref(), Some("new-token"));
    let received: Vec<SessionEvent> = block_on(rx.collect());
    assert_eq!(received, vec![SessionEvent::Cleared(ClearReason::Login)]);
}

// =============================================================
// seed_demo_token
// =============================================================

#[test]
fn first_demo_visit_seeds_token() {
    let tokens = MemoryTokenStore::default();
    let seeded = MemoryTokenStore::default();
    seed_demo_token(&tokens, &seeded);
    assert_eq!(tokens.get().as_deref(), Some(DEMO_TOKEN));
    assert!(seeded.get().is_some());
}

#[test]
fn reload_after_logout_stays_signed_out() {
    let tokens = MemoryTokenStore::default();
    let seeded = MemoryTokenStore::default();
    seed_demo_token(&tokens, &seeded);

    tokens.clear();
    seed_demo_token(&tokens, &seeded);
    assert_eq!(tokens.get(), None);
    assert_eq!(
        block_on(fixture_source(tokens).check()),
        CheckOutcome::Unauthenticated
    );
}

#[test]
fn seeding_keeps_existing_token() {
    let tokens = MemoryTokenStore::with_token("real-token");
    let seeded = MemoryTokenStore::default();
    seed_demo_token(&tokens, &seeded);
    assert_eq!(tokens.get().as_deref(), Some("real-token"));
}
