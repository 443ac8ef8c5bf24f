//! Shared wire-facing data types
//!
//! These mirror the JSON shapes exchanged with introspection endpoints and
//! discovery documents. Absent optional fields are omitted on serialization
//! rather than emitted as nulls.

use serde::{Deserialize, Serialize};

/// Outcome of validating a bearer token
///
/// Produced either by a remote introspection response (RFC 7662) or by
/// locally decoding a compact token's payload segment. A `TokenInfo` is only
/// trusted when `active` is true and the `exp`/`nbf` claims hold against the
/// current time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TokenInfo {
    /// Whether the token is currently usable. On the local decode path this
    /// means "well-formed and unexpired" only; no signature is checked.
    #[serde(default)]
    pub active: bool,

    /// Space-separated scopes granted to the token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scope: Option<String>,

    /// Client the token was issued to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,

    /// Resource-owner username, when the issuer shares it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    /// Token type, usually `Bearer`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,

    /// Expiration time as a Unix timestamp in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub exp: Option<i64>,

    /// Issued-at time as a Unix timestamp in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iat: Option<i64>,

    /// Not-before time as a Unix timestamp in seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nbf: Option<i64>,

    /// Subject the token represents
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub: Option<String>,

    /// Intended audiences
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aud: Option<Vec<String>>,

    /// Issuer identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iss: Option<String>,
}

/// Parsed provider discovery document
///
/// Only the fields needed for client bootstrapping are modelled; a provider
/// may publish many more. Constructed fresh on each discovery call, never
/// cached here.
///
/// # References
///
/// - RFC 8414 <https://www.rfc-editor.org/rfc/rfc8414>
/// - OpenID Connect Discovery 1.0
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuthMetadata {
    /// The issuer identifier URI for this authorization server
    pub issuer: String,

    /// The URL of the authorization endpoint
    pub authorization_endpoint: String,

    /// The URL of the token endpoint
    pub token_endpoint: String,

    /// `response_type` values the server supports (e.g. `["code"]`)
    pub response_types_supported: Vec<String>,

    /// Optional URL of the Dynamic Client Registration endpoint (RFC 7591)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_endpoint: Option<String>,

    /// Optional URL of the user-info endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub userinfo_endpoint: Option<String>,

    /// Optional URL of the provider's JSON Web Key Set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub jwks_uri: Option<String>,

    /// Scopes the server supports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scopes_supported: Option<Vec<String>>,

    /// Grant types the server supports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grant_types_supported: Option<Vec<String>>,

    /// Client authentication methods the token endpoint supports
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_endpoint_auth_methods_supported: Option<Vec<String>>,

    /// PKCE challenge methods the server supports (e.g. `["S256"]`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code_challenge_methods_supported: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_info_omits_absent_fields() {
        let info = TokenInfo {
            active: true,
            sub: Some("u1".to_string()),
            ..Default::default()
        };
        let value = serde_json::to_value(&info).unwrap();
        assert_eq!(value, serde_json::json!({"active": true, "sub": "u1"}));
    }

    #[test]
    fn test_token_info_tolerates_unknown_and_missing_fields() {
        let info: TokenInfo = serde_json::from_str(
            r#"{"active": true, "sub": "u1", "aud": ["mcp"], "custom_claim": 42}"#,
        )
        .unwrap();
        assert!(info.active);
        assert_eq!(info.sub.as_deref(), Some("u1"));
        assert_eq!(info.aud, Some(vec!["mcp".to_string()]));
        assert!(info.exp.is_none());
    }

    #[test]
    fn test_active_defaults_to_false() {
        let info: TokenInfo = serde_json::from_str(r#"{"sub": "u1"}"#).unwrap();
        assert!(!info.active);
    }

    #[test]
    fn test_metadata_requires_token_endpoint() {
        let result: Result<OAuthMetadata, _> = serde_json::from_str(
            r#"{
                "issuer": "https://issuer.example",
                "authorization_endpoint": "https://issuer.example/authorize",
                "response_types_supported": ["code"]
            }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_metadata_roundtrip_omits_absent_optionals() {
        let metadata: OAuthMetadata = serde_json::from_str(
            r#"{
                "issuer": "https://issuer.example",
                "authorization_endpoint": "https://issuer.example/authorize",
                "token_endpoint": "https://issuer.example/token",
                "response_types_supported": ["code"],
                "code_challenge_methods_supported": ["S256"]
            }"#,
        )
        .unwrap();

        let value = serde_json::to_value(&metadata).unwrap();
        assert!(value.get("jwks_uri").is_none());
        assert!(value.get("registration_endpoint").is_none());
        assert_eq!(value["code_challenge_methods_supported"][0], "S256");
    }
}
