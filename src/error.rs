//! Validation error taxonomy
//!
//! Every fallible step in token validation returns one of these kinds, so the
//! validator's control flow stays auditable. The detailed kind is meant for
//! internal diagnostics and telemetry; [`AuthError::error_code`] collapses all
//! of them onto the public OAuth wire codes so an unauthorized response never
//! reveals which specific claim failed.

use thiserror::Error;

/// Authentication and discovery errors
#[derive(Debug, Error)]
pub enum AuthError {
    /// An empty string was presented as a bearer token
    #[error("empty bearer token")]
    EmptyToken,

    /// The token does not have the `header.payload.signature` compact shape
    #[error("token does not have the expected header.payload.signature structure")]
    InvalidJwtStructure,

    /// The payload segment is not valid unpadded base64url
    #[error("token payload is not valid base64url: {0}")]
    InvalidBase64(#[from] base64::DecodeError),

    /// The decoded payload bytes did not parse as a claims object
    #[error("token payload did not parse as a claims object: {0}")]
    PayloadParse(#[from] serde_json::Error),

    /// The `exp` claim is in the past
    #[error("token has expired")]
    TokenExpired,

    /// The `nbf` claim is in the future
    #[error("token is not valid yet")]
    TokenNotYetValid,

    /// The introspection endpoint reported the token as inactive
    #[error("introspection endpoint reports the token as inactive")]
    TokenInactive,

    /// The introspection call itself failed (transport, status, or parse)
    #[error("token introspection failed: {0}")]
    Introspection(String),

    /// The discovery document could not be fetched
    #[error("metadata fetch failed: {0}")]
    MetadataFetch(String),

    /// The discovery document is missing required fields or is not JSON
    #[error("metadata document invalid: {0}")]
    MetadataParse(String),
}

impl AuthError {
    /// Map onto the RFC 6750 / RFC 6749 error codes safe to put on the wire.
    ///
    /// Transport collaborators answer failed validations with a generic
    /// `401 Unauthorized` carrying one of these codes; the variant itself
    /// stays server-side.
    pub fn error_code(&self) -> &'static str {
        match self {
            AuthError::EmptyToken => "invalid_request",
            AuthError::InvalidJwtStructure
            | AuthError::InvalidBase64(_)
            | AuthError::PayloadParse(_)
            | AuthError::TokenExpired
            | AuthError::TokenNotYetValid
            | AuthError::TokenInactive => "invalid_token",
            AuthError::Introspection(_)
            | AuthError::MetadataFetch(_)
            | AuthError::MetadataParse(_) => "server_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes_never_name_the_failed_claim() {
        assert_eq!(AuthError::EmptyToken.error_code(), "invalid_request");
        assert_eq!(AuthError::TokenExpired.error_code(), "invalid_token");
        assert_eq!(AuthError::TokenNotYetValid.error_code(), "invalid_token");
        assert_eq!(AuthError::TokenInactive.error_code(), "invalid_token");
        assert_eq!(AuthError::InvalidJwtStructure.error_code(), "invalid_token");
        assert_eq!(
            AuthError::Introspection("upstream timed out".into()).error_code(),
            "server_error"
        );
        assert_eq!(
            AuthError::MetadataFetch("connection refused".into()).error_code(),
            "server_error"
        );
    }
}
