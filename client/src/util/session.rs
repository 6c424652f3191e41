//! Session State Provider: runs the session check and applies events.
//!
//! SYSTEM CONTEXT
//! ==============
//! `provide_session` is called once by the root component. It builds the
//! token store, API client and event channel, provides them as contexts, and
//! in the browser spawns the pump that is the single writer of the
//! `RwSignal<Session>`. During SSR the pump never runs, so the server always
//! renders protected routes in the loading state.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use futures::StreamExt;
use futures::channel::mpsc::UnboundedReceiver;
use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::config::{ClientConfig, DEMO_SEEDED_STORAGE_KEY, TOKEN_STORAGE_KEY};
use crate::data::fixtures;
use crate::net::api::{ApiClient, ApiError};
use crate::net::types::User;
use crate::state::session::{CheckOutcome, ClearReason, Session, SessionEvent, SessionEvents, Transition};
use crate::util::token_store::{LocalStorageTokenStore, TokenStore};

/// Token stored for the fixture identity in demo mode.
pub const DEMO_TOKEN: &str = "demo-session";

/// Where a session check gets its answer.
#[derive(Clone, Debug)]
pub enum SessionSource {
    /// `GET /auth/me` with the stored bearer token.
    Api(ApiClient),
    /// The fixture identity, signed in while any token is stored.
    Fixture { user: User, api: ApiClient },
}

impl SessionSource {
    pub fn from_config(config: &ClientConfig, api: &ApiClient) -> Self {
        if config.demo_session {
            Self::Fixture { user: fixtures::current_user(), api: api.detached() }
        } else {
            Self::Api(api.detached())
        }
    }

    /// Run one check. Never fails: errors are folded into the outcome.
    pub async fn check(&self) -> CheckOutcome {
        match self {
            Self::Api(api) => {
                if api.tokens().get().is_none() {
                    return CheckOutcome::Unauthenticated;
                }
                normalize(api.current_user().await)
            }
            Self::Fixture { user, api } => {
                if api.tokens().get().is_some() {
                    CheckOutcome::Authenticated(user.clone())
                } else {
                    CheckOutcome::Unauthenticated
                }
            }
        }
    }
}

/// Fold an `/auth/me` result into a check outcome.
pub fn normalize(result: Result<User, ApiError>) -> CheckOutcome {
    match result {
        Ok(user) => CheckOutcome::Authenticated(user),
        Err(ApiError::Unauthorized) => CheckOutcome::Unauthenticated,
        Err(e) => CheckOutcome::Failed(e.to_string()),
    }
}

/// Drive the session state machine until the channel closes or `apply`
/// reports the session is gone.
///
/// Starts with a check. Events queue while a check is outstanding and are
/// applied in order afterwards; any transition that asks for a check gets
/// one before the next event is read.
pub async fn run_session_pump<F>(source: SessionSource, mut rx: UnboundedReceiver<SessionEvent>, mut apply: F)
where
    F: FnMut(SessionEvent) -> Option<Transition>,
{
    let mut needs_check = true;
    loop {
        let event = if needs_check {
            SessionEvent::CheckCompleted(source.check().await)
        } else {
            match rx.next().await {
                Some(event) => event,
                None => break,
            }
        };
        let Some(transition) = apply(event) else {
            break;
        };
        if transition.changed() {
            log::debug!("session: {:?} -> {:?}", transition.from, transition.to);
        }
        needs_check = transition.needs_check;
    }
}

/// Store `DEMO_TOKEN` on the first demo visit only.
///
/// `seeded` records that the token was issued, so a visitor who logged out
/// stays signed out across reloads until they log in again.
pub fn seed_demo_token(tokens: &dyn TokenStore, seeded: &dyn TokenStore) {
    if seeded.get().is_some() {
        return;
    }
    if tokens.get().is_none() {
        tokens.set(DEMO_TOKEN);
    }
    seeded.set("1");
}

/// Everything a component needs to read or end the session.
#[derive(Clone, Debug)]
pub struct SessionHandle {
    pub session: RwSignal<Session>,
    pub events: SessionEvents,
    pub api: ApiClient,
}

/// Build the session and its collaborators and provide them as contexts:
/// `RwSignal<Session>`, `SessionEvents` and `ApiClient`.
pub fn provide_session(config: &ClientConfig) -> SessionHandle {
    let tokens: Arc<dyn TokenStore> = Arc::new(LocalStorageTokenStore::new(TOKEN_STORAGE_KEY));
    if config.demo_session {
        seed_demo_token(tokens.as_ref(), &LocalStorageTokenStore::new(DEMO_SEEDED_STORAGE_KEY));
    }

    let (events, rx) = SessionEvents::channel();
    let api = ApiClient::new(config.api_base_url.clone(), tokens).with_session_events(events.clone());
    let session = RwSignal::new(Session::new());

    #[cfg(feature = "hydrate")]
    {
        let source = SessionSource::from_config(config, &api);
        leptos::task::spawn_local(run_session_pump(source, rx, move |event| {
            session.try_update(|s| s.apply(event))
        }));
    }
    #[cfg(not(feature = "hydrate"))]
    {
        drop(rx);
    }

    provide_context(session);
    provide_context(events.clone());
    provide_context(api.clone());

    SessionHandle { session, events, api }
}

/// Store a freshly issued token and restart the session cycle.
///
/// The session passes through `Unknown` and is re-checked with the new
/// token; pages react to the resulting status, not to this call.
pub fn sign_in(api: &ApiClient, events: &SessionEvents, token: &str) {
    api.tokens().set(token);
    events.clear(ClearReason::Login);
}

/// Navigate away from a public auth page once the session is authenticated.
pub fn install_signed_in_redirect<F>(session: RwSignal<Session>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + 'static,
{
    Effect::new(move || {
        if session.with(Session::authenticated) {
            navigate("/", NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
