use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The API could not be reached or answered with a non-2xx status.
    #[error("Network failure: {message}")]
    Network {
        status: Option<u16>,
        message: String,
    },
    /// Invalid credentials or an expired/invalid token.
    #[error("Authorization failure: {}", .message.as_deref().unwrap_or("no details"))]
    Auth { message: Option<String> },
    /// The API answered with a body of an unexpected shape.
    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl ApiError {
    pub fn is_auth(&self) -> bool {
        matches!(self, ApiError::Auth { .. })
    }

    /// Message worth showing to a person, if the failure carried one.
    pub fn message(&self) -> Option<&str> {
        match self {
            ApiError::Network { message, .. } => Some(message.as_str()),
            ApiError::Auth { message } => message.as_deref(),
            ApiError::Malformed(_) => None,
        }
        .filter(|message| !message.is_empty())
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Malformed(err.to_string())
        } else {
            ApiError::Network {
                status: err.status().map(|status| status.as_u16()),
                message: err.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Malformed(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message() {
        let err = ApiError::Auth {
            message: Some("Нууц үг буруу байна".to_owned()),
        };
        assert!(err.is_auth());
        assert_eq!(err.message(), Some("Нууц үг буруу байна"));

        assert_eq!(ApiError::Auth { message: None }.message(), None);
        assert_eq!(
            ApiError::Auth {
                message: Some(String::new())
            }
            .message(),
            None
        );
        assert_eq!(ApiError::Malformed("eof".to_owned()).message(), None);

        let err = ApiError::Network {
            status: Some(502),
            message: "HTTP error: 502 Bad Gateway".to_owned(),
        };
        assert!(!err.is_auth());
        assert_eq!(err.message(), Some("HTTP error: 502 Bad Gateway"));
    }
}
