//! Error types for the hrops CLI

use thiserror::Error;

/// Result type alias for hrops operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Operation failed: {0}")]
    Other(String),
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(err.to_string())
    }
}

/// Failures classified from remote calls.
///
/// Every response error maps to exactly one variant; the `Display` text is
/// the message shown to the user. No variant is ever retried.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Request timed out. Check that the backend services are running and responsive.")]
    Timeout,

    #[error("Could not reach the server. Check that the backend services are running.")]
    Unreachable,

    #[error("Your session has expired. Sign in again with `hrops login`.")]
    SessionExpired,

    #[error("Access denied. You don't have permission to perform this action.")]
    Forbidden,

    #[error("The server hit an internal problem. Try again later.")]
    Server,

    #[error("Request failed: {0}")]
    Request(String),

    #[error("Invalid response from server: {0}")]
    InvalidResponse(String),

    #[error("Malformed access token")]
    InvalidToken,
}

impl ApiError {
    /// True when the failure must tear down the persisted session.
    ///
    /// 401 tears down unconditionally; connectivity failures tear down
    /// unless the failing call is part of the login flow (the caller
    /// decides that part).
    pub fn is_session_fatal(&self) -> bool {
        matches!(
            self,
            ApiError::SessionExpired | ApiError::Timeout | ApiError::Unreachable
        )
    }

    /// True for connectivity failures where no response arrived at all.
    pub fn is_connectivity(&self) -> bool {
        matches!(self, ApiError::Timeout | ApiError::Unreachable)
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout
        } else {
            ApiError::Unreachable
        }
    }
}

/// Session lifecycle errors
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("Email and password are required")]
    MissingCredentials,

    #[error("Sign-in failed: invalid credentials or server error")]
    Rejected,

    #[error(
        "Signed in, but your employee profile could not be loaded. Check that all backend services are running."
    )]
    ProfileUnavailable,

    #[error("You are not signed in. Run `hrops login` first.")]
    NotSignedIn,

    #[error("That area belongs to {required} accounts. Your home is `{landing}`.")]
    WrongRole {
        required: &'static str,
        landing: &'static str,
    },
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_expired_points_at_login() {
        let err = ApiError::SessionExpired;
        assert!(err.to_string().contains("hrops login"));
        assert!(err.is_session_fatal());
    }

    #[test]
    fn connectivity_variants_are_session_fatal() {
        assert!(ApiError::Timeout.is_session_fatal());
        assert!(ApiError::Unreachable.is_session_fatal());
        assert!(ApiError::Timeout.is_connectivity());
        assert!(ApiError::Unreachable.is_connectivity());
    }

    #[test]
    fn forbidden_and_server_leave_session_alone() {
        assert!(!ApiError::Forbidden.is_session_fatal());
        assert!(!ApiError::Server.is_session_fatal());
        assert!(!ApiError::Request("boom".into()).is_session_fatal());
    }

    #[test]
    fn timeout_and_unreachable_have_distinct_messages() {
        assert_ne!(
            ApiError::Timeout.to_string(),
            ApiError::Unreachable.to_string()
        );
        assert!(ApiError::Timeout.to_string().contains("timed out"));
    }

    #[test]
    fn request_error_carries_server_message() {
        let err = ApiError::Request("Employee not found".to_string());
        assert!(err.to_string().contains("Employee not found"));
    }

    #[test]
    fn missing_credentials_message() {
        let err = SessionError::MissingCredentials;
        assert!(err.to_string().contains("required"));
    }

    #[test]
    fn wrong_role_names_the_landing() {
        let err = SessionError::WrongRole {
            required: "admin",
            landing: "/employee/profile",
        };
        assert!(err.to_string().contains("/employee/profile"));
    }

    #[test]
    fn error_from_api_error() {
        let err: Error = ApiError::Forbidden.into();
        match err {
            Error::Api(ApiError::Forbidden) => (),
            _ => panic!("Expected Error::Api(ApiError::Forbidden)"),
        }
    }

    #[test]
    fn config_error_from_yaml_error() {
        let yaml_err =
            serde_yaml::from_str::<serde_yaml::Value>("invalid: [yaml: content").unwrap_err();
        let config_err: ConfigError = yaml_err.into();
        match config_err {
            ConfigError::ParseError(_) => (),
            _ => panic!("Expected ConfigError::ParseError"),
        }
    }
}
