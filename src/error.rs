//! Error types for token authentication operations.

use reqwest::StatusCode;

/// Errors surfaced by the authentication client.
///
/// The two failure kinds of a token fetch stay distinct: a non-success
/// answer from the token endpoint is a [`AuthError::ServiceError`],
/// while a network-level failure is a [`AuthError::Transport`]. Neither
/// is retried or swallowed; callers decide whether to retry.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    /// The token endpoint answered with a non-success status.
    #[error("Authentication failed, token endpoint returned status code {0}; reason: {1}")]
    ServiceError(StatusCode, String),

    /// Transport-level failure while talking to the token endpoint.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Invalid or missing configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for authentication operations.
pub type AuthResult<T> = Result<T, AuthError>;
