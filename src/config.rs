//! OAuth configuration
//!
//! [`OAuthConfig`] is loaded once at process start and shared immutably by
//! every in-flight validation; nothing in this crate mutates it afterwards.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when checking a loaded [`OAuthConfig`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("OAuth is enabled but no provider is configured")]
    NoProviders,

    #[error("OAuth is enabled but no provider requires PKCE")]
    PkceNotEnforced,

    #[error("endpoint `{0}` must use https")]
    InsecureEndpoint(String),
}

/// One upstream identity provider, constructed from static configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OAuthProvider {
    /// Provider name as shown to clients (e.g. "github")
    pub name: String,

    /// OAuth client identifier registered with the provider
    pub client_id: String,

    /// Client secret; absent means a public client
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_secret: Option<String>,

    /// Authorization endpoint URL (RFC 6749 section 3.1)
    pub authorization_endpoint: String,

    /// Token endpoint URL (RFC 6749 section 3.2)
    pub token_endpoint: String,

    /// User-info endpoint URL
    pub userinfo_endpoint: String,

    /// Scopes this provider supports
    pub scopes: Vec<String>,

    /// Grant types this provider supports
    pub grant_types: Vec<String>,

    /// Whether this provider requires PKCE (mandatory for every client
    /// under OAuth 2.1)
    pub requires_pkce: bool,

    /// Optional discovery document URL overriding well-known construction
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_endpoint: Option<String>,
}

impl Default for OAuthProvider {
    fn default() -> Self {
        Self {
            name: String::new(),
            client_id: String::new(),
            client_secret: None,
            authorization_endpoint: String::new(),
            token_endpoint: String::new(),
            userinfo_endpoint: String::new(),
            scopes: Vec::new(),
            grant_types: vec!["authorization_code".to_string()],
            requires_pkce: true,
            metadata_endpoint: None,
        }
    }
}

impl OAuthProvider {
    /// A provider without a client secret cannot authenticate itself and is
    /// treated as a public client.
    pub fn is_public_client(&self) -> bool {
        self.client_secret.is_none()
    }
}

/// Process-wide OAuth configuration
///
/// Every field carries a serde default so partial configuration documents
/// load; the advertised-values lists default to what the server's metadata
/// endpoint publishes for MCP clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OAuthConfig {
    /// Master switch; when false, the transport layer skips token checks
    pub enabled: bool,

    /// Configured upstream identity providers
    pub providers: Vec<OAuthProvider>,

    /// Remote introspection endpoint; when set, all bearer validation is
    /// delegated to it instead of local claim decoding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_validation_endpoint: Option<String>,

    /// Require https on every configured endpoint
    pub require_https: bool,

    /// Authorization code lifetime in seconds
    pub auth_code_expiry_secs: u64,

    /// Access token lifetime in seconds
    pub access_token_expiry_secs: u64,

    /// Scopes advertised to clients
    pub scopes_supported: Vec<String>,

    /// `response_type` values advertised to clients
    pub response_types_supported: Vec<String>,

    /// `grant_type` values advertised to clients
    pub grant_types_supported: Vec<String>,

    /// Client authentication methods advertised for the token endpoint
    pub token_endpoint_auth_methods_supported: Vec<String>,

    /// PKCE challenge methods advertised to clients
    pub code_challenge_methods_supported: Vec<String>,

    /// Demo mode: approve authorization requests without a consent screen
    pub auto_approve: bool,

    /// Demo mode: template for generated user ids, `{client_id}` expands to
    /// the requesting client
    pub demo_user_id_template: String,

    /// Demo mode: domain used for generated user email addresses
    pub demo_email_domain: String,

    /// Demo mode: display name attached to generated users
    pub demo_display_name: String,

    /// Demo mode: shared secret handed to public clients
    #[serde(skip_serializing_if = "Option::is_none")]
    pub public_client_secret: Option<String>,

    /// Prefix prepended to issued authorization codes
    pub authorization_code_prefix: String,

    /// Prefix prepended to issued access tokens
    pub access_token_prefix: String,

    /// Message template rendered after a successful authorization
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authorization_success_template: Option<String>,
}

impl Default for OAuthConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            providers: Vec::new(),
            token_validation_endpoint: None,
            require_https: true,
            auth_code_expiry_secs: 600,
            access_token_expiry_secs: 3600,
            scopes_supported: vec![
                "mcp:read".to_string(),
                "mcp:write".to_string(),
                "mcp:tools".to_string(),
            ],
            response_types_supported: vec!["code".to_string()],
            grant_types_supported: vec![
                "authorization_code".to_string(),
                "refresh_token".to_string(),
            ],
            token_endpoint_auth_methods_supported: vec![
                "client_secret_post".to_string(),
                "none".to_string(),
            ],
            code_challenge_methods_supported: vec!["S256".to_string()],
            auto_approve: false,
            demo_user_id_template: "demo-user-{client_id}".to_string(),
            demo_email_domain: "example.com".to_string(),
            demo_display_name: "Demo User".to_string(),
            public_client_secret: None,
            authorization_code_prefix: "mcp_code_".to_string(),
            access_token_prefix: "mcp_token_".to_string(),
            authorization_success_template: None,
        }
    }
}

impl OAuthConfig {
    /// Create a disabled configuration
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// Check configuration invariants after loading.
    ///
    /// When OAuth is enabled at least one provider must require PKCE, and
    /// when `require_https` is set every configured endpoint must be https.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.enabled {
            if self.providers.is_empty() {
                return Err(ConfigError::NoProviders);
            }
            if !self.providers.iter().any(|p| p.requires_pkce) {
                return Err(ConfigError::PkceNotEnforced);
            }
        }

        if self.require_https {
            let provider_endpoints = self.providers.iter().flat_map(|p| {
                [
                    Some(p.authorization_endpoint.as_str()),
                    Some(p.token_endpoint.as_str()),
                    Some(p.userinfo_endpoint.as_str()),
                    p.metadata_endpoint.as_deref(),
                ]
            });
            for endpoint in provider_endpoints
                .chain([self.token_validation_endpoint.as_deref()])
                .flatten()
            {
                if !endpoint.is_empty() && !endpoint.starts_with("https://") {
                    return Err(ConfigError::InsecureEndpoint(endpoint.to_string()));
                }
            }
        }

        Ok(())
    }
}
