//! Remote token introspection (RFC 7662 style)

use serde_json::json;
use tracing::{debug, warn};

use crate::error::AuthError;
use crate::models::TokenInfo;

/// Ask a validation endpoint whether a token is currently active.
///
/// Issues `POST endpoint` with the JSON body `{"token": "<token>"}` and
/// parses the response as a [`TokenInfo`]. A response with `active == false`
/// fails with [`AuthError::TokenInactive`]; transport, status, and parse
/// problems surface as [`AuthError::Introspection`].
///
/// The call inherits whatever timeout policy the supplied client carries;
/// no retries are attempted here.
pub async fn introspect_token(
    http: &reqwest::Client,
    endpoint: &str,
    token: &str,
) -> Result<TokenInfo, AuthError> {
    debug!(endpoint, "introspecting bearer token");

    let response = http
        .post(endpoint)
        .json(&json!({ "token": token }))
        .send()
        .await
        .map_err(|e| AuthError::Introspection(format!("request to {endpoint} failed: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        warn!(%status, endpoint, "introspection endpoint returned an error status");
        return Err(AuthError::Introspection(format!(
            "{endpoint} returned {status}"
        )));
    }

    let info: TokenInfo = response
        .json()
        .await
        .map_err(|e| AuthError::Introspection(format!("invalid introspection response: {e}")))?;

    if !info.active {
        debug!("introspection endpoint reports token as inactive");
        return Err(AuthError::TokenInactive);
    }

    Ok(info)
}
