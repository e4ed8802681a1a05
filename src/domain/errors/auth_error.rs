//! Authentication error types.

use thiserror::Error;

/// The closed set of failure kinds surfaced by the auth and profile flows.
/// Transport exceptions never leak past the adapters; they arrive here as
/// `NoInternetConnection` or `Network`.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum AuthError {
    #[error("no internet connection")]
    NoInternetConnection,

    #[error("no authentication token available")]
    NoToken,

    #[error("login or password rejected")]
    AuthFailed,

    #[error("session could not be re-established")]
    ReauthFailed,

    #[error("server error {code}: {message}")]
    ServerError { code: i32, message: String },

    #[error("network error: {message}")]
    Network { message: String },

    #[error("invalid response from server")]
    InvalidResponse,

    #[error("operation cancelled")]
    Cancelled,
}

impl AuthError {
    /// Creates a server error from an envelope code and message.
    #[must_use]
    pub fn server(code: i32, message: impl Into<String>) -> Self {
        Self::ServerError {
            code,
            message: message.into(),
        }
    }

    /// Creates a network error.
    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Returns whether the error is network-class. Callers present these as
    /// a transient "check your connection" notice rather than a modal.
    #[must_use]
    pub const fn is_network_error(&self) -> bool {
        matches!(self, Self::NoInternetConnection | Self::Network { .. })
    }

    /// Returns whether the error means the stored session can no longer be
    /// restored and the user must log in again.
    #[must_use]
    pub const fn requires_login(&self) -> bool {
        matches!(self, Self::NoToken | Self::ReauthFailed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_class_predicate() {
        assert!(AuthError::NoInternetConnection.is_network_error());
        assert!(AuthError::network("timed out").is_network_error());
        assert!(!AuthError::server(5, "oops").is_network_error());
        assert!(!AuthError::Cancelled.is_network_error());
    }

    #[test]
    fn test_requires_login_predicate() {
        assert!(AuthError::NoToken.requires_login());
        assert!(AuthError::ReauthFailed.requires_login());
        assert!(!AuthError::AuthFailed.requires_login());
        assert!(!AuthError::NoInternetConnection.requires_login());
    }

    #[test]
    fn test_server_error_carries_code_and_message() {
        let err = AuthError::server(14, "maintenance window");

        match err {
            AuthError::ServerError { code, message } => {
                assert_eq!(code, 14);
                assert_eq!(message, "maintenance window");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
