//! # Relay MCP Authentication Core
//!
//! OAuth 2.1 bearer token validation, PKCE, and provider metadata discovery
//! for MCP-style protocol servers.
//!
//! The crate covers the pieces of an authorization-code deployment that must
//! get cryptographic and protocol details exactly right:
//!
//! - **Token validation**: [`TokenValidator`] dispatches between remote
//!   introspection and local claim decoding based on [`OAuthConfig`]
//! - **PKCE**: verifier generation and S256 challenge derivation/verification
//!   per RFC 7636, mandatory under OAuth 2.1
//! - **Discovery**: fetching a provider's well-known configuration document
//!
//! Request dispatch, HTTP routing, token issuance, and logging setup are the
//! calling server's concern; this crate exposes typed results and emits
//! `tracing` events only.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use relay_mcp_auth::{OAuthConfig, TokenValidator, extract_bearer_token};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config: OAuthConfig = serde_json::from_str(&std::fs::read_to_string("oauth.json")?)?;
//!     config.validate()?;
//!
//!     let validator = TokenValidator::new(config);
//!     let token = extract_bearer_token("Bearer eyJhbGciOi...").ok_or("no bearer credential")?;
//!     let info = validator.validate_bearer_token(token).await?;
//!     println!("authenticated subject: {:?}", info.sub);
//!     Ok(())
//! }
//! ```

pub mod bearer;
pub mod claims;
pub mod config;
pub mod discovery;
pub mod error;
pub mod introspection;
pub mod models;
pub mod pkce;
pub mod validator;

// Re-export main types
pub use bearer::extract_bearer_token;
pub use claims::{decode_jwt_payload, validate_token_claims};
pub use config::{ConfigError, OAuthConfig, OAuthProvider};
pub use discovery::{OPENID_CONFIGURATION_PATH, discover_oauth_metadata};
pub use error::AuthError;
pub use introspection::introspect_token;
pub use models::{OAuthMetadata, TokenInfo};
pub use pkce::{
    PkceChallenge, generate_code_challenge, generate_code_verifier, generate_code_verifier_from,
    validate_code_verifier, verify_code_verifier,
};
pub use validator::TokenValidator;
