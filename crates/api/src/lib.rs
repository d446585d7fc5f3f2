//! Access to the remote registration API.
//!
//! The two traits are the seams the rest of the workspace depends on;
//! [`HttpApi`] implements both over HTTP.

use async_trait::async_trait;
use model::{registration::GroupRecord, user::User};

mod error;
mod http;
mod protocol;

pub use error::ApiError;
pub use http::HttpApi;
pub use protocol::{Credentials, LoginResponse};

#[async_trait]
pub trait AuthApi: Send + Sync {
    /// `POST /user/login`
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError>;

    /// `GET /user/current-user` with the bearer token.
    async fn current_user(&self, token: &str) -> Result<User, ApiError>;
}

#[async_trait]
pub trait RegistrationSource: Send + Sync {
    /// `GET /register`. The token is attached as a bearer token when present.
    async fn registrations(&self, token: Option<&str>) -> Result<Vec<GroupRecord>, ApiError>;
}
