//! Error type for GitLab Client

use serde::Deserialize;
use std::{borrow::Cow, fmt, io, str};
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Io error")]
    Io(#[from] io::Error),

    #[error("reqwest error")]
    Reqwest(#[from] reqwest::Error),

    #[error("json error")]
    Json(#[from] serde_json::Error),

    #[error("`{0}`")]
    Message(Cow<'static, str>),

    #[error("invalid ID type {0:?}, the ID must be an int or a non-empty string")]
    InvalidIdentifier(String),

    #[error("{0}: {1}")]
    GitlabClientError(reqwest::StatusCode, GitlabClientError),

    #[error(transparent)]
    UserLifecycle(#[from] UserLifecycleError),

    #[error("RateLimit")]
    RateLimit,

    #[error("GraphqlError: {0:?}")]
    GraphqlError(Vec<GraphqlError>),
}

impl From<&'static str> for Error {
    fn from(error: &'static str) -> Self {
        Error::Message(error.into())
    }
}

impl From<String> for Error {
    fn from(error: String) -> Self {
        Error::Message(error.into())
    }
}

impl From<toml::de::Error> for Error {
    fn from(error: toml::de::Error) -> Self {
        Error::Message(error.to_string().into())
    }
}

// GitLab Error Responses
// https://docs.gitlab.com/ee/api/rest/index.html#data-validation-and-error-reporting
//
// `message` is usually a string, but validation failures send an object keyed by
// field name, e.g. {"message": {"name": ["is too short"]}}.
#[derive(Debug, Default, Deserialize)]
pub struct GitlabClientError {
    pub message: Option<serde_json::Value>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

impl GitlabClientError {
    pub(super) fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice(body) {
            Ok(error) => error,
            Err(_) => GitlabClientError {
                message: Some(serde_json::Value::String(
                    String::from_utf8_lossy(body).into_owned(),
                )),
                ..Default::default()
            },
        }
    }
}

impl fmt::Display for GitlabClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(message) = &self.message {
            return write!(f, "{}", flatten_message(message));
        }

        match (&self.error, &self.error_description) {
            (Some(error), Some(description)) => write!(f, "{}: {}", error, description),
            (Some(error), None) => write!(f, "{}", error),
            (None, Some(description)) => write!(f, "{}", description),
            (None, None) => write!(f, "unknown error"),
        }
    }
}

fn flatten_message(message: &serde_json::Value) -> String {
    use serde_json::Value;

    match message {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .map(flatten_message)
            .collect::<Vec<_>>()
            .join(", "),
        Value::Object(fields) => {
            let mut parts: Vec<String> = fields
                .iter()
                .map(|(field, errors)| format!("{{{}: {}}}", field, flatten_message(errors)))
                .collect();
            parts.sort();
            format!("[{}]", parts.join(", "))
        }
        other => other.to_string(),
    }
}

/// The reason an administrative user state change was refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UserLifecycleErrorKind {
    ActivatePrevented,
    ApprovePrevented,
    BlockPrevented,
    Conflict,
    DeactivatePrevented,
    DisableTwoFactorPrevented,
    NotFound,
    RejectPrevented,
    TwoFactorNotEnabled,
    UnblockPrevented,
    UnexpectedStatus(reqwest::StatusCode),
}

impl fmt::Display for UserLifecycleErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use UserLifecycleErrorKind::*;

        let message = match self {
            ActivatePrevented => {
                "Cannot activate a user that is blocked by admin or by LDAP synchronization"
            }
            ApprovePrevented => {
                "Cannot approve a user that is blocked by admin or by LDAP synchronization"
            }
            BlockPrevented => "Cannot block a user that is already blocked by LDAP synchronization",
            Conflict => "User does not have a pending request",
            DeactivatePrevented => {
                "Cannot deactivate a user that is blocked by admin or by LDAP synchronization"
            }
            DisableTwoFactorPrevented => {
                "Cannot disable two factor authentication if not authenticated as administrator"
            }
            NotFound => "User does not exist",
            RejectPrevented => "Cannot reject a user if not authenticated as administrator",
            TwoFactorNotEnabled => "Cannot disable two factor authentication if not enabled",
            UnblockPrevented => "Cannot unblock a user that is blocked by LDAP synchronization",
            UnexpectedStatus(status) => {
                return write!(f, "Received unexpected result code: {}", status.as_u16())
            }
        };

        f.write_str(message)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} (user {user_id})")]
pub struct UserLifecycleError {
    pub kind: UserLifecycleErrorKind,
    pub user_id: u64,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlErrorLocation {
    pub line: usize,
    pub column: usize,
}

#[derive(Debug, Deserialize)]
pub struct GraphqlError {
    pub message: String,
    pub locations: Option<Vec<GraphqlErrorLocation>>,
}

#[cfg(test)]
mod test {
    use super::{GitlabClientError, UserLifecycleError, UserLifecycleErrorKind};
    use reqwest::StatusCode;

    #[test]
    fn client_error_messages() {
        let e = GitlabClientError::from_body(br#"{"message": "404 Project Not Found"}"#);
        assert_eq!(e.to_string(), "404 Project Not Found");

        let e = GitlabClientError::from_body(
            br#"{"message": {"name": ["has already been taken"], "path": ["is invalid"]}}"#,
        );
        assert_eq!(
            e.to_string(),
            "[{name: has already been taken}, {path: is invalid}]"
        );

        let e = GitlabClientError::from_body(
            br#"{"error": "invalid_token", "error_description": "Token was revoked"}"#,
        );
        assert_eq!(e.to_string(), "invalid_token: Token was revoked");

        let e = GitlabClientError::from_body(b"<html>Bad Gateway</html>");
        assert_eq!(e.to_string(), "<html>Bad Gateway</html>");
    }

    #[test]
    fn lifecycle_messages() {
        let e = UserLifecycleError {
            kind: UserLifecycleErrorKind::UnexpectedStatus(StatusCode::BAD_GATEWAY),
            user_id: 7,
        };
        assert_eq!(e.to_string(), "Received unexpected result code: 502 (user 7)");

        let e = UserLifecycleError {
            kind: UserLifecycleErrorKind::NotFound,
            user_id: 7,
        };
        assert_eq!(e.to_string(), "User does not exist (user 7)");
    }
}
