//! Session state and its in-memory store.
//!
//! DESIGN
//! ======
//! The whole session lives in one [`Session`] value behind a
//! `tokio::sync::watch` channel. Every setter goes through
//! `watch::Sender::send_modify`, so each field-group write is atomic with
//! respect to readers and to other writers, and every write notifies
//! subscribed renderers. The store never leaves `token` set while `identity`
//! is `None` (or the reverse) outside the single authentication window.
//!
//! `SignedOut` is terminal: once a session is cleared, a startup or switch
//! write completing late is discarded instead of resurrecting it.

use serde::Serialize;
use tokio::sync::watch;
use uuid::Uuid;

use crate::services::resolver::DataBundle;
use crate::user_type::UserType;

/// Who is signed in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Identity {
    /// Display name from the account profile.
    pub name: String,
    /// Account segment.
    pub user_type: UserType,
    /// Contract classification merged from the segment's data bundle.
    /// `None` until the first successful data load for this identity.
    pub contract_type: Option<String>,
}

/// Controller state machine position, kept in the session so renderers and
/// tests can observe intermediate states deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Phase {
    /// Constructed, startup not yet begun.
    Idle,
    /// Credentials in flight.
    Authenticating,
    /// Signed in, initial bundle in flight.
    LoadingData,
    /// Signed in with a bundle loaded.
    Ready,
    /// Signed out. Terminal for this session instance.
    SignedOut,
    /// A segment switch's bundle is in flight.
    SwitchingUserType,
}

/// The reactive session record driving conditional rendering.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    /// Instance id, carried in tracing events.
    pub id: Uuid,
    pub phase: Phase,
    pub identity: Option<Identity>,
    pub token: Option<String>,
    pub is_loading: bool,
    pub bundle: Option<DataBundle>,
}

impl Session {
    fn empty() -> Self {
        Self {
            id: Uuid::new_v4(),
            phase: Phase::Idle,
            identity: None,
            token: None,
            is_loading: false,
            bundle: None,
        }
    }

    /// `token` and `identity` both present. Derived, never stored.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.identity.is_some()
    }
}

/// Read-only snapshot handed to rendering components. Mutation goes through
/// the controller's `switch_user_type` / `logout` only.
#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub identity: Option<Identity>,
    pub is_loading: bool,
    pub is_authenticated: bool,
    pub bundle: Option<DataBundle>,
}

impl From<&Session> for SessionView {
    fn from(session: &Session) -> Self {
        Self {
            identity: session.identity.clone(),
            is_loading: session.is_loading,
            is_authenticated: session.is_authenticated(),
            bundle: session.bundle.clone(),
        }
    }
}

/// In-memory holder of the [`Session`], exclusively mutated by the
/// controller.
#[derive(Debug)]
pub(crate) struct SessionStore {
    tx: watch::Sender<Session>,
}

impl SessionStore {
    pub(crate) fn new() -> Self {
        let (tx, _) = watch::channel(Session::empty());
        Self { tx }
    }

    pub(crate) fn snapshot(&self) -> Session {
        self.tx.borrow().clone()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<Session> {
        self.tx.subscribe()
    }

    /// Startup begins: `Idle` -> `Authenticating`, loading shown immediately.
    pub(crate) fn begin_authenticating(&self) {
        self.tx.send_modify(|s| {
            if s.phase == Phase::SignedOut {
                return;
            }
            s.phase = Phase::Authenticating;
            s.is_loading = true;
        });
    }

    /// Authentication succeeded; the initial bundle load follows, so
    /// `is_loading` stays set. Discarded if the session was signed out while
    /// the credentials were in flight.
    pub(crate) fn set_authenticated(&self, identity: Identity, token: String) {
        self.tx.send_modify(|s| {
            if s.phase == Phase::SignedOut {
                return;
            }
            s.identity = Some(identity);
            s.token = Some(token);
            s.phase = Phase::LoadingData;
        });
    }

    /// Authentication failed: signed-out end state, loading cleared.
    pub(crate) fn sign_out_failed_auth(&self) {
        self.tx.send_modify(|s| {
            s.identity = None;
            s.token = None;
            s.bundle = None;
            s.is_loading = false;
            s.phase = Phase::SignedOut;
        });
    }

    /// A bundle resolved: store it and merge its contract type into the
    /// identity in the same atomic write. Discarded if the session was
    /// signed out while the bundle was in flight.
    pub(crate) fn apply_bundle(&self, bundle: DataBundle) {
        self.tx.send_modify(|s| {
            if s.phase == Phase::SignedOut {
                return;
            }
            if let Some(identity) = s.identity.as_mut() {
                identity.contract_type = bundle
                    .user_info
                    .as_ref()
                    .and_then(|info| info.contract_type.clone());
            }
            s.bundle = Some(bundle);
            s.is_loading = false;
            s.phase = Phase::Ready;
        });
    }

    /// Segment switch begins: optimistic `user_type` update, loading shown.
    pub(crate) fn begin_switch(&self, user_type: UserType) {
        self.tx.send_modify(|s| {
            if s.phase == Phase::SignedOut {
                return;
            }
            if let Some(identity) = s.identity.as_mut() {
                identity.user_type = user_type;
            }
            s.is_loading = true;
            s.phase = Phase::SwitchingUserType;
        });
    }

    /// Segment switch failed: keep the previous bundle and identity (the
    /// optimistic `user_type` is not rolled back), drop the loading flag.
    pub(crate) fn finish_switch_failed(&self) {
        self.tx.send_modify(|s| {
            s.is_loading = false;
            s.phase = Phase::Ready;
        });
    }

    /// Logout: identity, token and bundle cleared in one atomic update.
    /// `is_loading` is deliberately untouched.
    pub(crate) fn clear(&self) {
        self.tx.send_modify(|s| {
            s.identity = None;
            s.token = None;
            s.bundle = None;
            s.phase = Phase::SignedOut;
        });
    }

    /// Run `apply` on the session atomically. Used by the controller for
    /// merges that must check supersession and write in one step.
    pub(crate) fn with_mut(&self, apply: impl FnOnce(&mut Session)) {
        self.tx.send_modify(apply);
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
