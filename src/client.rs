//! Client that authenticates to the speech token service.
//!
//! [`AuthenticationClient`] exchanges a long-lived subscription key for
//! a short-lived bearer token and caches it until it is cleared or a
//! refresh is forced. One HTTP POST is issued per refresh; there is no
//! retry policy and no expiry tracking, so callers force a refresh on
//! their own schedule.

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use tracing::{debug, error};

use crate::config::AuthClientConfig;
use crate::endpoint::Endpoint;
use crate::error::{AuthError, AuthResult};
use crate::region::SpeechRegion;

/// The HTTP header carrying the subscription key.
pub const SUBSCRIPTION_KEY_HEADER: &str = "Ocp-Apim-Subscription-Key";

/// The HTTP header carrying a bearer token on speech requests.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Client that obtains and caches a bearer token from the speech token
/// service.
///
/// The subscription key is attached as a default header to every
/// request made by the underlying transport, which lives as long as the
/// client. The cached token is either absent or the non-empty body of
/// the last successful fetch, never partially updated.
///
/// `authenticate` takes `&mut self`: the client performs no internal
/// locking and does not deduplicate concurrent fetches, so sharing an
/// instance across tasks requires an external lock.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use speech_auth::{AuthenticationClient, Endpoint, SpeechRegion};
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let endpoint = Arc::new(Endpoint::token_service());
/// let mut client =
///     AuthenticationClient::new(endpoint, "your-subscription-key", SpeechRegion::WestEurope)?;
///
/// client.authenticate(false).await?;
/// let token = client.token().expect("authenticated");
/// # Ok(())
/// # }
/// ```
pub struct AuthenticationClient {
    /// HTTP transport, constructed once with the subscription key as a
    /// default header.
    client: Client,
    /// Descriptor of the token service, owned by the caller.
    endpoint: Arc<Endpoint>,
    /// Region read at fetch time to build the request URI.
    region: SpeechRegion,
    /// Cached bearer token from the last successful fetch.
    token: Option<String>,
}

impl std::fmt::Debug for AuthenticationClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthenticationClient")
            .field("endpoint", &self.endpoint)
            .field("region", &self.region)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl AuthenticationClient {
    /// Create a client targeting `endpoint` in `region`.
    ///
    /// No request is made; the transport is built with the subscription
    /// key attached as a sensitive default header. No request timeout
    /// is set; the transport default governs. Use
    /// [`with_timeout`](Self::with_timeout) to bound requests.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Config`] if the subscription key is not a
    /// valid header value or the transport cannot be built.
    pub fn new(
        endpoint: Arc<Endpoint>,
        subscription_key: impl Into<String>,
        region: SpeechRegion,
    ) -> AuthResult<Self> {
        Self::build(endpoint, subscription_key.into(), region, None)
    }

    /// Create a client with a request timeout on the transport.
    pub fn with_timeout(
        endpoint: Arc<Endpoint>,
        subscription_key: impl Into<String>,
        region: SpeechRegion,
        timeout: Duration,
    ) -> AuthResult<Self> {
        Self::build(endpoint, subscription_key.into(), region, Some(timeout))
    }

    /// Create a client from environment-driven configuration, targeting
    /// the production token service.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use speech_auth::{AuthClientConfig, AuthenticationClient};
    ///
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let config = AuthClientConfig::from_env()?;
    /// let client = AuthenticationClient::from_config(&config)?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_config(config: &AuthClientConfig) -> AuthResult<Self> {
        Self::build(
            Arc::new(Endpoint::token_service()),
            config.subscription_key.clone(),
            config.region.clone(),
            Some(Duration::from_secs(config.timeout_seconds)),
        )
    }

    fn build(
        endpoint: Arc<Endpoint>,
        subscription_key: String,
        region: SpeechRegion,
        timeout: Option<Duration>,
    ) -> AuthResult<Self> {
        let mut key_value = HeaderValue::from_str(&subscription_key).map_err(|_| {
            AuthError::Config("Subscription key is not a valid header value".to_string())
        })?;
        key_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(SUBSCRIPTION_KEY_HEADER, key_value);

        let mut builder = Client::builder().default_headers(headers);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| AuthError::Config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            endpoint,
            region,
            token: None,
        })
    }

    /// Obtain a bearer token, reusing the cached one when present.
    ///
    /// If no token is cached or `force_new_token` is set, the cached
    /// token is cleared and a fresh one is fetched from the token
    /// endpoint; otherwise this is a no-op. Read the result via
    /// [`token`](Self::token).
    ///
    /// The cache is cleared before the fetch is attempted, so a failed
    /// forced refresh leaves the client without a token.
    ///
    /// # Errors
    ///
    /// [`AuthError::ServiceError`] when the endpoint answers with a
    /// non-success status, [`AuthError::Transport`] on network-level
    /// failure. Errors propagate to the caller unchanged; there is no
    /// retry.
    pub async fn authenticate(&mut self, force_new_token: bool) -> AuthResult<()> {
        if self.token.is_none() || force_new_token {
            self.clear_token();
            let token = self.fetch_token().await?;
            // An empty success body stays uncached, so the next call
            // fetches again.
            if !token.is_empty() {
                self.token = Some(token);
            }
        }
        Ok(())
    }

    /// Discard the cached token. Idempotent, no side effects.
    pub fn clear_token(&mut self) {
        self.token = None;
    }

    /// The cached bearer token, if authenticated.
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    /// The cached token formatted as an `Authorization` header value.
    pub fn authorization_header_value(&self) -> Option<String> {
        self.token.as_deref().map(|token| format!("Bearer {token}"))
    }

    /// The region targeted by the next fetch.
    pub fn region(&self) -> &SpeechRegion {
        &self.region
    }

    /// Change the region targeted by future fetches.
    ///
    /// The cached token is left untouched; force a refresh to obtain a
    /// token from the new region.
    pub fn set_region(&mut self, region: SpeechRegion) {
        self.region = region;
    }

    async fn fetch_token(&self) -> AuthResult<String> {
        let uri = self.endpoint.uri_for_region(&self.region)?;
        debug!(%uri, "Requesting authentication token");

        let response = self.client.post(uri).send().await.map_err(|e| {
            error!(error = %e, "Transport error during token request");
            AuthError::from(e)
        })?;

        let status = response.status();
        if status.is_success() {
            debug!("New authentication token retrieved");
            return response.text().await.map_err(|e| {
                error!(error = %e, "Transport error while reading token response");
                AuthError::from(e)
            });
        }

        let reason = status.canonical_reason().unwrap_or("Unknown").to_string();
        Err(AuthError::ServiceError(status, reason))
    }
}
