use std::sync::Arc;

use model::{session::Session, user::User};
use tokio::sync::watch;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// A stored token is being validated.
    #[default]
    Restoring,
    Unauthenticated,
    Authenticated(Session),
}

impl SessionState {
    pub fn session(&self) -> Option<&Session> {
        match self {
            SessionState::Authenticated(session) => Some(session),
            SessionState::Restoring | SessionState::Unauthenticated => None,
        }
    }

    pub fn user(&self) -> Option<&User> {
        self.session().map(Session::user)
    }

    pub fn token(&self) -> Option<&str> {
        self.session().map(Session::token)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_some()
    }
}

/// Process wide holder of the current [`SessionState`].
///
/// Handles are cheap to clone and all point at the same state. Every change
/// is broadcast to the receivers handed out by [`SessionStore::subscribe`].
#[derive(Clone)]
pub struct SessionStore {
    tx: Arc<watch::Sender<SessionState>>,
}

impl SessionStore {
    pub fn new() -> Self {
        let (tx, _) = watch::channel(SessionState::Restoring);
        SessionStore { tx: Arc::new(tx) }
    }

    pub fn state(&self) -> SessionState {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.tx.subscribe()
    }

    /// Replaces the state. Subscribers are only woken when it actually changed.
    pub(crate) fn set(&self, state: SessionState) -> bool {
        self.tx.send_if_modified(|current| {
            if *current == state {
                return false;
            }
            *current = state;
            true
        })
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        SessionStore::new()
    }
}
