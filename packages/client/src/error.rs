//! Client-level error type.
//!
//! Whether a failure is a [`ClientError::Transport`] (no response) or a
//! [`ClientError::RemoteApi`] (a response with a non-success status) is
//! decided once, in [`crate::transport`], where the response is received.
//! Callers match on the variant; they never re-inspect response shapes.

use neynar_api::ErrorResponse;
use neynar_core::{AccountError, PayloadError};

use crate::config::ConfigError;

/// A non-success response from the remote service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error(
    "remote API returned {status}: {}",
    .error.as_ref().map_or(.body.as_str(), |e| e.message.as_str())
)]
pub struct RemoteApiError {
    /// HTTP status code.
    pub status: u16,

    /// The response body, verbatim.
    pub body: String,

    /// `body` parsed as the standard error shape, when it is one.
    pub error: Option<ErrorResponse>,
}

impl RemoteApiError {
    /// Build from a status and raw body, parsing the body opportunistically.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        let body = body.into();
        let error = serde_json::from_str::<ErrorResponse>(&body).ok();
        Self { status, body, error }
    }

    /// The service's machine-readable code, if it sent one.
    pub fn code(&self) -> Option<&str> {
        self.error.as_ref().and_then(|e| e.code.as_deref())
    }
}

/// Everything a client call can fail with.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The mnemonic did not derive an account. Raised before any request.
    #[error(transparent)]
    InvalidMnemonic(#[from] AccountError),

    /// A value did not fit the signed payload's schema.
    #[error("invalid payload: {0}")]
    InvalidPayload(#[from] PayloadError),

    /// The service answered with a non-success status.
    #[error(transparent)]
    RemoteApi(#[from] RemoteApiError),

    /// No response was received (connect failure, timeout, reset).
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// A success response whose body does not have the expected shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl ClientError {
    /// `true` only when repeating the *same* request may succeed.
    ///
    /// Remote rejections are not retryable here: the call may already have
    /// changed remote state.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ClientError::Transport(_))
    }

    /// The remote error, if this is one.
    pub fn as_remote(&self) -> Option<&RemoteApiError> {
        match self {
            ClientError::RemoteApi(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remote_error_parses_standard_body() {
        let e = RemoteApiError::new(400, r#"{"code":"DeadlineExpired","message":"deadline has passed"}"#);
        assert_eq!(e.code(), Some("DeadlineExpired"));
        assert_eq!(e.to_string(), "remote API returned 400: deadline has passed");
    }

    #[test]
    fn remote_error_keeps_non_json_body_verbatim() {
        let e = RemoteApiError::new(502, "<html>bad gateway</html>");
        assert_eq!(e.error, None);
        assert_eq!(e.body, "<html>bad gateway</html>");
        assert_eq!(e.code(), None);
        assert!(e.to_string().contains("bad gateway"));
    }

    #[test]
    fn remote_error_is_a_leaf_error_shown_transparently() {
        let e = RemoteApiError::new(403, r#"{"code":"SignerNotApproved","message":"not approved"}"#);
        assert!(std::error::Error::source(&e).is_none());

        let wrapped = ClientError::from(e.clone());
        assert_eq!(wrapped.to_string(), e.to_string());
        assert_eq!(wrapped.to_string(), "remote API returned 403: not approved");
    }

    #[test]
    fn only_transport_errors_are_retryable() {
        let remote = ClientError::RemoteApi(RemoteApiError::new(500, ""));
        assert!(!remote.is_retryable());
        assert!(remote.as_remote().is_some());

        let local = ClientError::InvalidMnemonic(AccountError::InvalidMnemonic("x".into()));
        assert!(!local.is_retryable());
        assert!(local.as_remote().is_none());
    }
}
