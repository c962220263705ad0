//! Authentication client for Azure Cognitive Services Speech APIs.
//!
//! Exchanges a long-lived subscription key for a short-lived bearer
//! token at the regional token-issuing endpoint
//! (`https://<region>.api.cognitive.microsoft.com/sts/v1.0/issueToken`)
//! and caches the token until it is cleared or a refresh is forced.
//!
//! # Modules
//!
//! - [`client`]: the token fetch-and-cache client
//! - [`endpoint`]: URI templates for the token service
//! - [`region`]: Azure Speech deployment regions
//! - [`config`]: environment-driven configuration
//! - [`error`]: error types
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use speech_auth::{AuthenticationClient, Endpoint, SpeechRegion};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let endpoint = Arc::new(Endpoint::token_service());
//! let mut client =
//!     AuthenticationClient::new(endpoint, "your-subscription-key", SpeechRegion::EastUS)?;
//!
//! // Fetches a token on first call, reuses the cached one afterwards.
//! client.authenticate(false).await?;
//! let authorization = client.authorization_header_value().expect("authenticated");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod region;

// Re-export commonly used items for convenience
pub use client::{AUTHORIZATION_HEADER, AuthenticationClient, SUBSCRIPTION_KEY_HEADER};
pub use config::AuthClientConfig;
pub use endpoint::{Endpoint, REGION_PLACEHOLDER};
pub use error::{AuthError, AuthResult};
pub use region::SpeechRegion;
