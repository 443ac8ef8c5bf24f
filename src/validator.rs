//! Bearer token validation orchestrator
//!
//! [`TokenValidator`] is the single entry point the transport layer consumes.
//! Depending on configuration it either delegates to the remote introspection
//! endpoint or drives the local decode/validate pair.

use chrono::Utc;
use tracing::debug;

use crate::claims::{decode_jwt_payload, validate_token_claims};
use crate::config::OAuthConfig;
use crate::discovery;
use crate::error::AuthError;
use crate::introspection;
use crate::models::{OAuthMetadata, TokenInfo};

/// Validates client-presented bearer tokens against an immutable
/// [`OAuthConfig`]
///
/// Holds one shared HTTP client for the remote paths; all methods are
/// request-scoped and safe to call concurrently.
pub struct TokenValidator {
    config: OAuthConfig,
    http: reqwest::Client,
}

impl TokenValidator {
    /// Create a validator with a default HTTP client.
    ///
    /// Callers that need a timeout or proxy policy on the remote paths
    /// should use [`TokenValidator::with_client`] instead.
    pub fn new(config: OAuthConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    /// Create a validator with a caller-supplied HTTP client.
    ///
    /// The client's timeout policy bounds introspection and discovery calls;
    /// this crate performs no retries of its own.
    pub fn with_client(config: OAuthConfig, http: reqwest::Client) -> Self {
        Self { config, http }
    }

    /// The configuration this validator was built with
    pub fn config(&self) -> &OAuthConfig {
        &self.config
    }

    /// Validate a bearer token, returning its claims on success.
    ///
    /// With a configured `token_validation_endpoint` the token is sent to
    /// remote introspection and that result is returned verbatim. Otherwise
    /// the token must have the three-segment compact shape; its payload is
    /// decoded and the time-bound claims checked against the current time.
    ///
    /// On the local path `active == true` means "well-formed and unexpired":
    /// no signature is verified.
    pub async fn validate_bearer_token(&self, token: &str) -> Result<TokenInfo, AuthError> {
        if token.is_empty() {
            return Err(AuthError::EmptyToken);
        }

        if let Some(endpoint) = &self.config.token_validation_endpoint {
            debug!(endpoint = %endpoint, "delegating token validation to introspection");
            return introspection::introspect_token(&self.http, endpoint, token).await;
        }

        let segments: Vec<&str> = token.split('.').collect();
        if segments.len() != 3 {
            return Err(AuthError::InvalidJwtStructure);
        }

        let mut info = decode_jwt_payload(segments[1])?;
        validate_token_claims(&info, Utc::now())?;

        info.active = true;
        Ok(info)
    }

    /// Discover a provider's metadata document, using this validator's
    /// HTTP client
    pub async fn discover_oauth_metadata(
        &self,
        issuer_url: &str,
    ) -> Result<OAuthMetadata, AuthError> {
        discovery::discover_oauth_metadata(&self.http, issuer_url).await
    }
}
