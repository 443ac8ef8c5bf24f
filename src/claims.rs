//! Local claims decoding and time-bound validation
//!
//! The decode path reads the payload segment of a compact token without
//! verifying its signature: `active == true` on the result means
//! "well-formed", never "cryptographically verified". Signature checking
//! against a provider key set is a known gap, tracked as a TODO on
//! [`decode_jwt_payload`].

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};

use crate::error::AuthError;
use crate::models::TokenInfo;

/// Decode the unverified payload segment of a compact token into claims.
///
/// The segment is base64url-decoded (unpadded variant) and parsed as a JSON
/// object; absent optional claims are tolerated. `active` is set
/// unconditionally on success.
// TODO: optional JWKS-based signature verification before trusting claims.
pub fn decode_jwt_payload(payload_segment: &str) -> Result<TokenInfo, AuthError> {
    let bytes = URL_SAFE_NO_PAD.decode(payload_segment)?;
    let mut info: TokenInfo = serde_json::from_slice(&bytes)?;
    info.active = true;
    Ok(info)
}

/// Check the time-bound claims of a token against `now`.
///
/// `exp` and `nbf` are independent guards and each fails with its own error
/// kind; a passing `exp` check never skips the `nbf` check.
pub fn validate_token_claims(info: &TokenInfo, now: DateTime<Utc>) -> Result<(), AuthError> {
    let now_ts = now.timestamp();

    if let Some(exp) = info.exp {
        if now_ts > exp {
            return Err(AuthError::TokenExpired);
        }
    }

    if let Some(nbf) = info.nbf {
        if now_ts < nbf {
            return Err(AuthError::TokenNotYetValid);
        }
    }

    Ok(())
}
