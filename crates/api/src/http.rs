use async_trait::async_trait;
use log::{debug, info};
use model::{registration::GroupRecord, user::User};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use crate::{
    error::ApiError,
    protocol::{
        CurrentUserResponse, ErrorResponse, LoginResponse, RegistrationsResponse,
    },
    AuthApi, Credentials, RegistrationSource,
};

/// Client of the registration API over HTTP.
#[derive(Clone, Debug)]
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        HttpApi {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_owned(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T, ApiError> {
        let response = request.send().await?;
        let status = response.status();
        debug!("API responded with {} for {}", status, response.url());
        let body = response.text().await?;
        decode(status, &body)
    }
}

#[async_trait]
impl AuthApi for HttpApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        info!("Logging in as {}", credentials.username);
        self.send(self.client.post(self.url("user/login")).json(credentials))
            .await
    }

    async fn current_user(&self, token: &str) -> Result<User, ApiError> {
        let response: CurrentUserResponse = self
            .send(
                self.client
                    .get(self.url("user/current-user"))
                    .bearer_auth(token),
            )
            .await?;
        Ok(response.user)
    }
}

#[async_trait]
impl RegistrationSource for HttpApi {
    async fn registrations(&self, token: Option<&str>) -> Result<Vec<GroupRecord>, ApiError> {
        let mut request = self.client.get(self.url("register"));
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }
        let response: RegistrationsResponse = self.send(request).await?;
        debug!("Decoded {} registrations", response.registrations.len());
        Ok(response.registrations)
    }
}

/// Maps a finished exchange onto the error taxonomy: 401 and 403 are
/// authorization failures, any other non-2xx status is a network failure and
/// an undecodable success body is malformed data.
pub(crate) fn decode<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T, ApiError> {
    if status.is_success() {
        return Ok(serde_json::from_str(body)?);
    }

    let message = serde_json::from_str::<ErrorResponse>(body)
        .ok()
        .and_then(|err| err.message)
        .filter(|message| !message.is_empty());

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        Err(ApiError::Auth { message })
    } else {
        Err(ApiError::Network {
            status: Some(status.as_u16()),
            message: message.unwrap_or_else(|| format!("HTTP error: {}", status)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use model::{registration::Gender, user::Role};

    #[test]
    fn test_decode_login() {
        let body = r#"{"token":"abc","user":{"_id":"u1","username":"admin","role":"admin"}}"#;
        let response: LoginResponse = decode(StatusCode::OK, body).unwrap();
        assert_eq!(response.token, "abc");
        assert_eq!(response.user.role, Role::Admin);
    }

    #[test]
    fn test_decode_registrations_without_list() {
        let response: RegistrationsResponse = decode(StatusCode::OK, "{}").unwrap();
        assert!(response.registrations.is_empty());
    }

    #[test]
    fn test_decode_null_registrations_as_empty() {
        let response: RegistrationsResponse =
            decode(StatusCode::OK, r#"{"registrations":null}"#).unwrap();
        assert!(response.registrations.is_empty());
    }

    #[test]
    fn test_decode_keeps_records_next_to_imperfect_ones() {
        let body = r#"{"registrations":[
            {"_id":"g1","gender":"male","firstNames":["A"]},
            {"_id":"g2","gender":"","firstNames":["B"]},
            {"gender":"unknown","firstNames":["C"]}
        ]}"#;
        let response: RegistrationsResponse = decode(StatusCode::OK, body).unwrap();
        let ids = response
            .registrations
            .iter()
            .map(|g| g.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["g1", "g2", ""]);
        assert_eq!(response.registrations[0].gender, Some(Gender::Male));
        assert_eq!(response.registrations[1].gender, None);
    }

    #[test]
    fn test_decode_unauthorized_with_message() {
        let err = decode::<LoginResponse>(
            StatusCode::UNAUTHORIZED,
            r#"{"message":"Нэвтрэх нэр эсвэл нууц үг буруу"}"#,
        )
        .unwrap_err();
        assert_eq!(
            err,
            ApiError::Auth {
                message: Some("Нэвтрэх нэр эсвэл нууц үг буруу".to_owned())
            }
        );
    }

    #[test]
    fn test_decode_forbidden_without_body() {
        let err = decode::<CurrentUserResponse>(StatusCode::FORBIDDEN, "").unwrap_err();
        assert_eq!(err, ApiError::Auth { message: None });
    }

    #[test]
    fn test_decode_server_error() {
        let err = decode::<RegistrationsResponse>(StatusCode::BAD_GATEWAY, "<html>").unwrap_err();
        assert_eq!(
            err,
            ApiError::Network {
                status: Some(502),
                message: "HTTP error: 502 Bad Gateway".to_owned(),
            }
        );

        let err = decode::<LoginResponse>(StatusCode::BAD_REQUEST, r#"{"message":"username required"}"#)
            .unwrap_err();
        assert_eq!(err.message(), Some("username required"));
    }

    #[test]
    fn test_decode_malformed_success() {
        let err = decode::<RegistrationsResponse>(StatusCode::OK, r#"{"registrations":{}}"#)
            .unwrap_err();
        assert!(matches!(err, ApiError::Malformed(_)));

        let err = decode::<LoginResponse>(StatusCode::OK, "not json").unwrap_err();
        assert!(matches!(err, ApiError::Malformed(_)));
    }

    #[test]
    fn test_url_join() {
        let api = HttpApi::new("http://localhost:8000/api/");
        assert_eq!(api.url("register"), "http://localhost:8000/api/register");
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let credentials = Credentials::new("admin", "secret");
        assert!(!format!("{:?}", credentials).contains("secret"));
    }
}
