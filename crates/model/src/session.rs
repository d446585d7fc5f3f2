use crate::user::{Role, User};

/// Authenticated user together with the bearer token that proves it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    user: User,
    token: String,
}

impl Session {
    pub fn new(user: User, token: String) -> Self {
        Session { user, token }
    }

    pub fn user(&self) -> &User {
        &self.user
    }

    pub fn role(&self) -> Role {
        self.user.role
    }

    pub fn token(&self) -> &str {
        &self.token
    }
}
