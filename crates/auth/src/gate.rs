use log::debug;
use model::user::Role;

use crate::{
    navigation::{Navigator, LOGIN_PATH},
    store::{SessionState, SessionStore},
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision {
    /// The session is still being restored.
    Loading,
    Redirect(String),
    Render,
}

/// Access check in front of a protected view.
#[derive(Debug, Clone)]
pub struct RoleGate {
    required_role: Option<Role>,
    redirect_path: String,
}

impl RoleGate {
    pub fn new(required_role: Role) -> Self {
        RoleGate {
            required_role: Some(required_role),
            redirect_path: LOGIN_PATH.to_owned(),
        }
    }

    /// Any authenticated user passes.
    pub fn authenticated() -> Self {
        RoleGate {
            required_role: None,
            redirect_path: LOGIN_PATH.to_owned(),
        }
    }

    pub fn redirect_to(mut self, path: impl Into<String>) -> Self {
        self.redirect_path = path.into();
        self
    }

    pub fn evaluate(&self, state: &SessionState) -> GateDecision {
        match state {
            SessionState::Restoring => GateDecision::Loading,
            SessionState::Unauthenticated => GateDecision::Redirect(self.redirect_path.clone()),
            SessionState::Authenticated(session) => match self.required_role {
                Some(required) if required != session.role() => {
                    GateDecision::Redirect(self.redirect_path.clone())
                }
                Some(_) | None => GateDecision::Render,
            },
        }
    }

    /// Evaluates the gate and performs the redirect. Being already on the
    /// redirect path is not redirected again, so calling this on every state
    /// change is safe.
    pub fn guard(&self, state: &SessionState, navigator: &dyn Navigator) -> GateDecision {
        let decision = self.evaluate(state);
        if let GateDecision::Redirect(path) = &decision {
            if navigator.current().as_deref() != Some(path.as_str()) {
                debug!("Gate redirects to {}", path);
                navigator.push(path);
            }
        }
        decision
    }

    /// Re-runs [`RoleGate::guard`] on every session change until the session
    /// is resolved.
    pub async fn wait(&self, store: &SessionStore, navigator: &dyn Navigator) -> GateDecision {
        let mut rx = store.subscribe();
        loop {
            let state = rx.borrow_and_update().clone();
            let decision = self.guard(&state, navigator);
            if decision != GateDecision::Loading {
                return decision;
            }
            if rx.changed().await.is_err() {
                return decision;
            }
        }
    }
}
