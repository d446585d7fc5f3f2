use model::{registration::GroupRecord, user::User};
use serde::{Deserialize, Serialize};
use serde_with::{serde_as, DefaultOnNull};

#[derive(Serialize, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials {
            username: username.into(),
            password: password.into(),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

#[derive(Deserialize, Debug)]
pub(crate) struct CurrentUserResponse {
    pub user: User,
}

#[serde_as]
#[derive(Deserialize, Debug)]
pub(crate) struct RegistrationsResponse {
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default)]
    pub registrations: Vec<GroupRecord>,
}

#[derive(Deserialize, Debug)]
pub(crate) struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
}
