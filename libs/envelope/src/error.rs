use http::StatusCode;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One human-readable message attached to an error for client display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UserDetail {
    pub message: String,
}

/// Caller-supplied detail messages for an error response.
///
/// A closed sum instead of a dynamically-typed argument: the caller picks
/// the shape explicitly, so an unsupported shape cannot reach the builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserInfo {
    Single(String),
    Multiple(Vec<String>),
}

impl UserInfo {
    /// A single detail message.
    pub fn message(message: impl Into<String>) -> Self {
        Self::Single(message.into())
    }

    /// Several detail messages, in order.
    pub fn messages<I, S>(messages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Multiple(messages.into_iter().map(Into::into).collect())
    }

    /// A single detail taken from an error's display form.
    pub fn from_error(err: &(impl std::fmt::Display + ?Sized)) -> Self {
        Self::Single(err.to_string())
    }

    /// One detail per error, in order.
    pub fn from_errors<I, E>(errs: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: std::fmt::Display,
    {
        Self::Multiple(errs.into_iter().map(|e| e.to_string()).collect())
    }

    pub(crate) fn into_details(self) -> Vec<UserDetail> {
        match self {
            Self::Single(message) => vec![UserDetail { message }],
            Self::Multiple(messages) => messages
                .into_iter()
                .map(|message| UserDetail { message })
                .collect(),
        }
    }
}

impl From<&str> for UserInfo {
    fn from(message: &str) -> Self {
        Self::Single(message.to_owned())
    }
}

impl From<String> for UserInfo {
    fn from(message: String) -> Self {
        Self::Single(message)
    }
}

impl From<Vec<String>> for UserInfo {
    fn from(messages: Vec<String>) -> Self {
        Self::Multiple(messages)
    }
}

/// The error object placed under the payload's reserved `error` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    /// Application error code; falls back to the HTTP status code.
    pub code: u32,
    pub message: String,
    #[serde(
        rename = "userInfo",
        default,
        skip_serializing_if = "Vec::is_empty"
    )]
    pub user_info: Vec<UserDetail>,
}

impl ErrorBody {
    /// Build an error body for `status`, resolving a zero `custom_code` to
    /// the status code and the default message from the status' canonical
    /// reason phrase.
    pub fn new(
        status: StatusCode,
        custom_code: u32,
        message: impl Into<String>,
        user_info: Option<UserInfo>,
    ) -> Self {
        let code = if custom_code == 0 {
            u32::from(status.as_u16())
        } else {
            custom_code
        };
        Self {
            code,
            message: message.into(),
            user_info: user_info.map(UserInfo::into_details).unwrap_or_default(),
        }
    }

    /// Default human message for a status code.
    pub fn default_message(status: StatusCode) -> &'static str {
        status.canonical_reason().unwrap_or("Unknown Error")
    }
}
