//! Environment-driven client configuration.
//!
//! Reads configuration from environment variables, loading a `.env`
//! file first if one is present. Environment variables:
//!
//! - `SPEECH_SUBSCRIPTION_KEY`: required, the long-lived credential.
//! - `SPEECH_REGION`: optional, defaults to `eastus`. Unknown region
//!   identifiers are passed through as custom regions.
//! - `SPEECH_AUTH_TIMEOUT_SECONDS`: optional, defaults to 5.

use std::env;

use crate::error::{AuthError, AuthResult};
use crate::region::SpeechRegion;

/// Configuration for an [`AuthenticationClient`].
///
/// [`AuthenticationClient`]: crate::AuthenticationClient
#[derive(Debug, Clone)]
pub struct AuthClientConfig {
    /// Subscription key transmitted on every token request.
    pub subscription_key: String,
    /// Region whose token endpoint is targeted.
    pub region: SpeechRegion,
    /// Request timeout applied to the HTTP transport.
    pub timeout_seconds: u64,
}

impl AuthClientConfig {
    /// Load configuration from environment variables.
    ///
    /// Also loads from a `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Config`] if `SPEECH_SUBSCRIPTION_KEY` is
    /// unset or empty.
    pub fn from_env() -> AuthResult<Self> {
        let _ = dotenvy::dotenv();

        let subscription_key = env::var("SPEECH_SUBSCRIPTION_KEY").map_err(|_| {
            AuthError::Config("SPEECH_SUBSCRIPTION_KEY is not configured".to_string())
        })?;
        if subscription_key.trim().is_empty() {
            return Err(AuthError::Config(
                "SPEECH_SUBSCRIPTION_KEY must not be empty".to_string(),
            ));
        }

        let region = env::var("SPEECH_REGION")
            .ok()
            .and_then(|v| v.parse::<SpeechRegion>().ok())
            .unwrap_or_default();

        let timeout_seconds = env::var("SPEECH_AUTH_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(5);

        Ok(Self {
            subscription_key,
            region,
            timeout_seconds,
        })
    }
}
