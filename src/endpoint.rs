//! Authentication endpoint descriptors.
//!
//! An [`Endpoint`] describes where the token-issuing service lives as a
//! URI template. The host and path may contain the literal placeholder
//! `{region}`, which is substituted with a [`SpeechRegion`] identifier
//! when a request URI is built. The client treats the endpoint as an
//! opaque URI builder.

use url::Url;

use crate::error::{AuthError, AuthResult};
use crate::region::SpeechRegion;

/// Placeholder substituted with the region identifier in endpoint
/// templates.
pub const REGION_PLACEHOLDER: &str = "{region}";

/// Immutable descriptor of an authentication service base URI.
///
/// # Example
///
/// ```rust
/// use speech_auth::{Endpoint, SpeechRegion};
///
/// let endpoint = Endpoint::token_service();
/// let uri = endpoint.uri_for_region(&SpeechRegion::EastUS).unwrap();
/// assert_eq!(
///     uri.as_str(),
///     "https://eastus.api.cognitive.microsoft.com/sts/v1.0/issueToken"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    scheme: String,
    host: String,
    port: Option<u16>,
    path: String,
}

impl Endpoint {
    /// Create an endpoint from a URI template.
    ///
    /// `host` and `path` may contain the `{region}` placeholder.
    pub fn new(
        scheme: impl Into<String>,
        host: impl Into<String>,
        port: Option<u16>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            scheme: scheme.into(),
            host: host.into(),
            port,
            path: path.into(),
        }
    }

    /// The production token-issuing endpoint for Azure Speech Services.
    ///
    /// Tokens issued by this endpoint are valid for 10 minutes.
    ///
    /// See: <https://learn.microsoft.com/en-us/azure/ai-services/speech-service/rest-speech-to-text#authentication>
    pub fn token_service() -> Self {
        Self::new(
            "https",
            "{region}.api.cognitive.microsoft.com",
            None,
            "/sts/v1.0/issueToken",
        )
    }

    /// Build the fully qualified request URI for a region.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::Config`] if the substituted template is not
    /// a valid URI.
    pub fn uri_for_region(&self, region: &SpeechRegion) -> AuthResult<Url> {
        let host = self.host.replace(REGION_PLACEHOLDER, region.as_str());
        let path = self.path.replace(REGION_PLACEHOLDER, region.as_str());

        let mut uri = format!("{}://{}", self.scheme, host);
        if let Some(port) = self.port {
            uri.push_str(&format!(":{port}"));
        }
        uri.push_str(&path);

        Url::parse(&uri)
            .map_err(|e| AuthError::Config(format!("Invalid auth endpoint URI '{uri}': {e}")))
    }
}

impl Default for Endpoint {
    fn default() -> Self {
        Self::token_service()
    }
}
