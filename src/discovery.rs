//! OAuth provider metadata discovery
//!
//! Fetches a provider's well-known configuration document and parses the
//! fields needed for client bootstrapping. Nothing is cached here; callers
//! own any caching policy.
//!
//! # References
//!
//! - RFC 8414 <https://www.rfc-editor.org/rfc/rfc8414>
//! - OpenID Connect Discovery 1.0

use tracing::debug;
use url::Url;

use crate::error::AuthError;
use crate::models::OAuthMetadata;

/// Well-known path appended to the issuer URL
pub const OPENID_CONFIGURATION_PATH: &str = "/.well-known/openid-configuration";

/// Fetch and parse `<issuer>/.well-known/openid-configuration`.
///
/// Transport problems (bad issuer URL, connection failure, non-2xx status)
/// fail with [`AuthError::MetadataFetch`]; a response body that is not JSON
/// or lacks a required field fails with [`AuthError::MetadataParse`].
pub async fn discover_oauth_metadata(
    http: &reqwest::Client,
    issuer_url: &str,
) -> Result<OAuthMetadata, AuthError> {
    let issuer = Url::parse(issuer_url)
        .map_err(|e| AuthError::MetadataFetch(format!("invalid issuer URL {issuer_url}: {e}")))?;
    let url = format!(
        "{}{}",
        issuer.as_str().trim_end_matches('/'),
        OPENID_CONFIGURATION_PATH
    );

    debug!(%url, "fetching provider discovery document");

    let response = http
        .get(&url)
        .send()
        .await
        .map_err(|e| AuthError::MetadataFetch(format!("request to {url} failed: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        return Err(AuthError::MetadataFetch(format!("{url} returned {status}")));
    }

    let body = response
        .text()
        .await
        .map_err(|e| AuthError::MetadataFetch(format!("failed reading {url}: {e}")))?;

    serde_json::from_str(&body).map_err(|e| AuthError::MetadataParse(e.to_string()))
}
