//! Session state for the current browser visitor.
//!
//! SYSTEM CONTEXT
//! ==============
//! The root component constructs one `Session` and provides it as an
//! `RwSignal<Session>` context. The provider in `util::session` is its only
//! writer; the access controller and chrome only read it.
//!
//! STATE MACHINE
//! =============
//! `Unknown` is initial. A completed check moves `Unknown` to either
//! `Authenticated` or `Unauthenticated`, once. Logout, token expiry and a
//! fresh login clear the session back to `Unknown`, which requests a new
//! check. There is no direct edge between the two resolved states.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use futures::channel::mpsc;

use crate::net::types::User;

/// Three-valued authentication status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    #[default]
    Unknown,
    Authenticated,
    Unauthenticated,
}

/// Result of one session check, already normalized by the session source.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CheckOutcome {
    Authenticated(User),
    Unauthenticated,
    /// The check itself failed (network, decode, server error).
    Failed(String),
}

/// Why the session was cleared.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClearReason {
    Logout,
    /// An API call came back 401.
    Expired,
    /// A new token was stored by the login or register page.
    Login,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    CheckCompleted(CheckOutcome),
    Cleared(ClearReason),
}

/// Result of applying one event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: SessionStatus,
    pub to: SessionStatus,
    /// The provider must start a new check.
    pub needs_check: bool,
}

impl Transition {
    pub fn changed(&self) -> bool {
        self.from != self.to
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    status: SessionStatus,
    identity: Option<User>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn authenticated(&self) -> bool {
        self.status == SessionStatus::Authenticated
    }

    /// True while no check has resolved.
    pub fn loading(&self) -> bool {
        self.status == SessionStatus::Unknown
    }

    pub fn loading_known(&self) -> bool {
        !self.loading()
    }

    pub fn identity(&self) -> Option<&User> {
        self.identity.as_ref()
    }

    /// Apply one event to the state machine.
    pub fn apply(&mut self, event: SessionEvent) -> Transition {
        let from = self.status;
        let mut needs_check = false;
        match event {
            SessionEvent::CheckCompleted(outcome) => {
                if from != SessionStatus::Unknown {
                    log::debug!("session: ignoring late check result in {from:?}");
                } else {
                    match outcome {
                        CheckOutcome::Authenticated(user) => {
                            self.status = SessionStatus::Authenticated;
                            self.identity = Some(user);
                        }
                        CheckOutcome::Unauthenticated => {
                            self.status = SessionStatus::Unauthenticated;
                        }
                        CheckOutcome::Failed(reason) => {
                            log::warn!("session: check failed, treating as signed out: {reason}");
                            self.status = SessionStatus::Unauthenticated;
                        }
                    }
                }
            }
            SessionEvent::Cleared(reason) => {
                log::info!("session: cleared ({reason:?})");
                self.status = SessionStatus::Unknown;
                self.identity = None;
                needs_check = true;
            }
        }
        Transition { from, to: self.status, needs_check }
    }
}

/// Sending half of the session event channel.
///
/// Cloned into every component that can end a session (logout button, login
/// page, the API client on 401). Sends after the pump is gone are dropped.
#[derive(Clone, Debug)]
pub struct SessionEvents {
    tx: mpsc::UnboundedSender<SessionEvent>,
}

impl SessionEvents {
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<SessionEvent>) {
        let (tx, rx) = mpsc::unbounded();
        (Self { tx }, rx)
    }

    pub fn send(&self, event: SessionEvent) {
        if self.tx.unbounded_send(event).is_err() {
            log::debug!("session: event dropped, pump closed");
        }
    }

    pub fn clear(&self, reason: ClearReason) {
        self.send(SessionEvent::Cleared(reason));
    }
}
