use std::sync::Arc;

use api::{ApiError, AuthApi, Credentials, LoginResponse};
use log::{error, info, warn};
use model::{locale::LOGIN_FAILED, session::Session, user::User};

use crate::{
    navigation::{Navigator, Notifier, LOGIN_PATH},
    store::{SessionState, SessionStore},
    tokens::TokenStore,
};

/// Owns the session life cycle: restoring it from a stored token, logging
/// in and out, and dropping it when a protected view reports that the token
/// stopped working.
#[derive(Clone)]
pub struct AuthManager {
    api: Arc<dyn AuthApi>,
    tokens: Arc<dyn TokenStore>,
    navigator: Arc<dyn Navigator>,
    notifier: Arc<dyn Notifier>,
    store: SessionStore,
}

impl AuthManager {
    pub fn new(
        api: Arc<dyn AuthApi>,
        tokens: Arc<dyn TokenStore>,
        navigator: Arc<dyn Navigator>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        AuthManager {
            api,
            tokens,
            navigator,
            notifier,
            store: SessionStore::new(),
        }
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn state(&self) -> SessionState {
        self.store.state()
    }

    /// Validates the stored token. Failures are logged and leave the session
    /// unauthenticated with the token still stored.
    pub async fn restore_session(&self) {
        self.store.set(SessionState::Restoring);

        let token = match self.tokens.load() {
            Ok(token) => token,
            Err(err) => {
                warn!("Failed to read stored token: {:#}", err);
                None
            }
        };
        let Some(token) = token else {
            info!("No stored token");
            self.store.set(SessionState::Unauthenticated);
            self.navigator.push(LOGIN_PATH);
            return;
        };

        match self.api.current_user(&token).await {
            Ok(user) => {
                info!("Session restored for {}", user.username);
                let path = user.home_path();
                self.store
                    .set(SessionState::Authenticated(Session::new(user, token)));
                self.navigator.push(&path);
            }
            Err(err) => {
                error!("Failed to restore session: {}", err);
                self.store.set(SessionState::Unauthenticated);
            }
        }
    }

    pub async fn login(&self, username: &str, password: &str) -> Result<User, ApiError> {
        let credentials = Credentials::new(username, password);
        match self.api.login(&credentials).await {
            Ok(LoginResponse { token, user }) => {
                if let Err(err) = self.tokens.save(&token) {
                    warn!("Failed to store token: {:#}", err);
                }
                info!("Logged in as {} ({})", user.username, user.role);
                let path = user.home_path();
                self.store.set(SessionState::Authenticated(Session::new(
                    user.clone(),
                    token,
                )));
                self.navigator.push(&path);
                Ok(user)
            }
            Err(err) => {
                error!("Login failed: {}", err);
                self.notifier.error(err.message().unwrap_or(LOGIN_FAILED));
                if !self.store.state().is_authenticated() {
                    self.store.set(SessionState::Unauthenticated);
                }
                Err(err)
            }
        }
    }

    /// Local only: the server is not told about it.
    pub fn logout(&self) {
        if let Err(err) = self.tokens.clear() {
            warn!("Failed to clear stored token: {:#}", err);
        }
        self.store.set(SessionState::Unauthenticated);
        self.navigator.push(LOGIN_PATH);
    }

    /// Called by a protected view whose request was rejected as unauthorized.
    pub fn expire(&self) {
        if self.store.state().is_authenticated() {
            warn!("Session rejected by the server");
            self.store.set(SessionState::Unauthenticated);
        }
    }
}
