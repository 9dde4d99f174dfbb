//! Session manager.
//!
//! Owns the in-memory session, mirrors it into the [`SessionStore`] and keeps the HTTP
//! client's bearer token in step with it.

use std::{fmt, sync::Arc};

use jiff::Timestamp;
use parking_lot::RwLock;
use storefront::{
    session::{Session, View},
    users::UserId,
};
use tracing::{info, warn};

use crate::http::BearerToken;

use super::{NotLoggedIn, SessionStore, SessionStoreError};

pub struct SessionManager {
    store: Arc<dyn SessionStore>,
    bearer: BearerToken,
    current: RwLock<Option<Session>>,
}

impl SessionManager {
    #[must_use]
    pub fn new(store: Arc<dyn SessionStore>, bearer: BearerToken) -> Self {
        Self {
            store,
            bearer,
            current: RwLock::new(None),
        }
    }

    /// Pick up the stored session at start-up.
    ///
    /// The token's expiry is read from its own claims and never checked with the server. An
    /// unreadable store or an expired token leaves the client logged out and clears the store.
    pub fn restore(&self, now: Timestamp) -> View {
        let stored = match self.store.load() {
            Ok(stored) => stored,
            Err(source) => {
                warn!(error = %source, "discarding unreadable session");
                self.discard();
                return View::Unauthenticated;
            }
        };

        match stored {
            Some(session) if session.is_expired_at(now) => {
                warn!(user_id = %session.user_id, "stored session has expired");
                self.discard();
            }
            Some(session) => self.hold(session),
            None => {}
        }

        self.view()
    }

    /// Record a freshly issued session.
    ///
    /// # Errors
    ///
    /// Returns an error when the session cannot be persisted; the client stays logged out.
    pub fn begin(&self, session: Session) -> Result<(), SessionStoreError> {
        self.store.save(&session)?;

        info!(user_id = %session.user_id, "session started");

        self.hold(session);

        Ok(())
    }

    /// Drop the session locally. Memory and bearer are cleared even when the store fails.
    ///
    /// # Errors
    ///
    /// Returns an error when the stored session cannot be removed.
    pub fn end(&self) -> Result<(), SessionStoreError> {
        self.forget();

        self.store.clear()
    }

    pub fn current(&self) -> Option<Session> {
        self.current.read().clone()
    }

    /// The logged-in user.
    ///
    /// # Errors
    ///
    /// Returns [`NotLoggedIn`] when no session is held.
    pub fn user_id(&self) -> Result<UserId, NotLoggedIn> {
        self.current
            .read()
            .as_ref()
            .map(|session| session.user_id)
            .ok_or(NotLoggedIn)
    }

    pub fn view(&self) -> View {
        View::for_session(self.current.read().as_ref())
    }

    fn hold(&self, session: Session) {
        self.bearer.set(&session.token);
        *self.current.write() = Some(session);
    }

    fn forget(&self) {
        self.bearer.clear();
        *self.current.write() = None;
    }

    fn discard(&self) {
        self.forget();

        if let Err(source) = self.store.clear() {
            warn!(error = %source, "failed to clear stored session");
        }
    }
}

impl fmt::Debug for SessionManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionManager")
            .field("bearer", &self.bearer)
            .field("current", &*self.current.read())
            .finish_non_exhaustive()
    }
}
