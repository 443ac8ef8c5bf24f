//! Bearer token extraction (RFC 6750 section 2.1)

/// Parse an `Authorization` header value into the raw token.
///
/// Accepts exactly two whitespace-separated words where the first is the
/// literal scheme `Bearer`; anything else yields `None`. The scheme match is
/// case-sensitive, so `bearer` and `BEARER` are rejected.
pub fn extract_bearer_token(header_value: &str) -> Option<&str> {
    let mut words = header_value.split_whitespace();
    let scheme = words.next()?;
    let token = words.next()?;
    if scheme != "Bearer" || words.next().is_some() {
        return None;
    }
    Some(token)
}
