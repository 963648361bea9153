//! Session controller: the one owner and mutator of the session.
//!
//! ARCHITECTURE
//! ============
//! The controller drives the session state machine
//! (`Idle -> Authenticating -> LoadingData -> Ready`, plus
//! `SwitchingUserType` and `SignedOut`) over the store in `session.rs`.
//! Capability failures are logged and converted into state transitions,
//! never surfaced to rendering code; only misuse of the API
//! ([`UsageError`]) fails loudly.
//!
//! TRADE-OFFS
//! ==========
//! Overlapping `switch_user_type` calls resolve by *last-issued-wins*: every
//! switch takes a monotonically increasing epoch and a resolution is applied
//! only while its epoch is still the newest issued. A superseded result is
//! discarded even when it completes after the newer one, so the session only
//! ever reflects the most recently requested segment.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use tokio::sync::watch;
use tokio::task::JoinHandle;
use uuid::Uuid;

use crate::services::auth::{Authenticator, Credentials};
use crate::services::resolver::DataResolver;
use crate::session::{Phase, Session, SessionStore, SessionView};
use crate::user_type::UserType;

/// Misuse of the session API. The one error kind that propagates to the
/// caller instead of being folded into session state.
#[derive(Debug, thiserror::Error)]
pub enum UsageError {
    #[error("session startup already ran; a new cycle needs a fresh controller")]
    AlreadyStarted,
    #[error("no authenticated session")]
    NotAuthenticated,
    #[error("session not ready for a segment switch (phase {0:?})")]
    NotReady(Phase),
}

struct Inner {
    store: SessionStore,
    authenticator: Arc<dyn Authenticator>,
    resolver: Arc<dyn DataResolver>,
    session_id: Uuid,
    started: AtomicBool,
    // Issue counter for segment switches; see the module doc.
    switch_epoch: AtomicU64,
}

/// Handle coordinating authenticator, resolver and session store. `Clone`
/// is cheap; all clones share one session.
#[derive(Clone)]
pub struct SessionController {
    inner: Arc<Inner>,
}

impl SessionController {
    /// Build a controller over injected capabilities. The session starts
    /// `Idle`; call [`start`](Self::start) or
    /// [`spawn_start`](Self::spawn_start) once to begin the sign-in cycle.
    #[must_use]
    pub fn new(authenticator: Arc<dyn Authenticator>, resolver: Arc<dyn DataResolver>) -> Self {
        let store = SessionStore::new();
        let session_id = store.snapshot().id;
        Self {
            inner: Arc::new(Inner {
                store,
                authenticator,
                resolver,
                session_id,
                started: AtomicBool::new(false),
                switch_epoch: AtomicU64::new(0),
            }),
        }
    }

    /// Run the startup sequence: authenticate, then load the segment's
    /// bundle. Authentication failure ends in `SignedOut`; an initial-load
    /// failure is logged and leaves the session loading (known limitation).
    ///
    /// # Errors
    ///
    /// `UsageError::AlreadyStarted` if startup already ran on this session.
    pub async fn start(&self, credentials: Credentials) -> Result<(), UsageError> {
        if self.inner.started.swap(true, Ordering::SeqCst) {
            return Err(UsageError::AlreadyStarted);
        }

        self.inner.store.begin_authenticating();

        let success = match self.inner.authenticator.authenticate(&credentials).await {
            Ok(success) => success,
            Err(err) => {
                tracing::error!(session = %self.inner.session_id, error = %err, "authentication failed");
                self.inner.store.sign_out_failed_auth();
                return Ok(());
            }
        };

        let user_type = success.identity.user_type;
        self.inner.store.set_authenticated(success.identity, success.token);
        tracing::info!(session = %self.inner.session_id, %user_type, "authenticated");

        match self.inner.resolver.resolve(user_type).await {
            Ok(bundle) => self.inner.store.apply_bundle(bundle),
            Err(err) => {
                // Session stays in LoadingData with is_loading set: the user
                // is stuck on the loading view rather than shown a broken
                // dashboard.
                tracing::error!(session = %self.inner.session_id, %user_type, error = %err, "initial data load failed");
            }
        }
        Ok(())
    }

    /// Startup as a background task, so construction needs no external
    /// trigger to begin signing in.
    pub fn spawn_start(&self, credentials: Credentials) -> JoinHandle<()> {
        let controller = self.clone();
        tokio::spawn(async move {
            if let Err(err) = controller.start(credentials).await {
                tracing::error!(session = %controller.inner.session_id, error = %err, "startup skipped");
            }
        })
    }

    /// Switch the session to another segment and load its bundle. The
    /// `user_type` on the identity is updated optimistically before the
    /// resolution settles; on resolver failure the previous bundle stays
    /// visible and the optimistic `user_type` is not rolled back.
    /// Authentication is not re-verified.
    ///
    /// # Errors
    ///
    /// `UsageError` when no session is signed in or startup has not
    /// finished.
    pub async fn switch_user_type(&self, user_type: UserType) -> Result<(), UsageError> {
        let current = self.inner.store.snapshot();
        if !current.is_authenticated() {
            return Err(UsageError::NotAuthenticated);
        }
        if !matches!(current.phase, Phase::Ready | Phase::SwitchingUserType) {
            return Err(UsageError::NotReady(current.phase));
        }

        let epoch = self.inner.switch_epoch.fetch_add(1, Ordering::SeqCst) + 1;
        self.inner.store.begin_switch(user_type);
        tracing::info!(session = %self.inner.session_id, %user_type, epoch, "switching segment");

        match self.inner.resolver.resolve(user_type).await {
            Ok(bundle) => self.inner.store.with_mut(|s| {
                if s.phase != Phase::SwitchingUserType
                    || self.inner.switch_epoch.load(Ordering::SeqCst) != epoch
                {
                    tracing::debug!(session = %self.inner.session_id, %user_type, epoch, "switch superseded, result discarded");
                    return;
                }
                if let Some(identity) = s.identity.as_mut() {
                    identity.contract_type = bundle.contract_type().map(str::to_owned);
                }
                s.bundle = Some(bundle);
                s.is_loading = false;
                s.phase = Phase::Ready;
            }),
            Err(err) => {
                tracing::warn!(session = %self.inner.session_id, %user_type, error = %err, "segment switch failed");
                self.inner.store.with_mut(|s| {
                    if s.phase == Phase::SwitchingUserType
                        && self.inner.switch_epoch.load(Ordering::SeqCst) == epoch
                    {
                        s.is_loading = false;
                        s.phase = Phase::Ready;
                    }
                });
            }
        }
        Ok(())
    }

    /// Switch by wire tag. Unknown tags fall open to the default segment —
    /// no tag may leave the user without a bundle.
    ///
    /// # Errors
    ///
    /// Same as [`switch_user_type`](Self::switch_user_type).
    pub async fn switch_user_type_tag(&self, tag: &str) -> Result<(), UsageError> {
        let user_type = match UserType::from_tag(tag) {
            Some(user_type) => user_type,
            None => {
                tracing::warn!(session = %self.inner.session_id, tag, "unknown segment tag, using default");
                UserType::default()
            }
        };
        self.switch_user_type(user_type).await
    }

    /// Sign out: identity, token and bundle cleared in one atomic update,
    /// synchronously. Terminal for this session instance.
    pub fn logout(&self) {
        self.inner.store.clear();
        tracing::info!(session = %self.inner.session_id, "signed out");
    }

    /// Full session snapshot, including the state-machine phase.
    #[must_use]
    pub fn snapshot(&self) -> Session {
        self.inner.store.snapshot()
    }

    /// Read-only view for rendering components.
    #[must_use]
    pub fn view(&self) -> SessionView {
        SessionView::from(&self.inner.store.snapshot())
    }

    /// Watch the session for changes.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.inner.store.subscribe()
    }
}

#[cfg(test)]
#[path = "controller_test.rs"]
mod tests;
