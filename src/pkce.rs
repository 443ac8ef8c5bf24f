//! PKCE (Proof Key for Code Exchange)
//!
//! RFC 7636: Proof Key for Code Exchange by OAuth Public Clients.
//! OAuth 2.1 mandates PKCE with the S256 code challenge method.

use base64::{Engine as _, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::Rng;
use sha2::{Digest, Sha256};

/// The 66 unreserved characters a code verifier may contain
/// (RFC 7636 section 4.1)
const VERIFIER_CHARS: &[u8] =
    b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-._~";

/// Generated verifier length; the maximum RFC 7636 allows
const VERIFIER_LEN: usize = 128;

/// A verifier/challenge pair created once per authorization attempt
///
/// The verifier stays with the client and is only transmitted at token
/// exchange; the challenge travels in the authorization request and is
/// stored server-side until verification.
#[derive(Debug, Clone)]
pub struct PkceChallenge {
    pub code_verifier: String,
    pub code_challenge: String,
    pub challenge_method: String,
}

impl PkceChallenge {
    /// Generate a fresh verifier and its S256 challenge
    pub fn generate() -> Self {
        let code_verifier = generate_code_verifier();
        let code_challenge = generate_code_challenge(&code_verifier);
        Self {
            code_verifier,
            code_challenge,
            challenge_method: "S256".to_string(),
        }
    }
}

/// Generate a random 128-character code verifier using the thread-local
/// cryptographic RNG
pub fn generate_code_verifier() -> String {
    generate_code_verifier_from(&mut rand::thread_rng())
}

/// Generate a code verifier from a caller-supplied random source
///
/// Each character is sampled uniformly (with replacement) from the
/// 66-character unreserved alphabet. The source must be cryptographically
/// adequate for the verifier to be unpredictable.
pub fn generate_code_verifier_from<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..VERIFIER_LEN)
        .map(|_| VERIFIER_CHARS[rng.gen_range(0..VERIFIER_CHARS.len())] as char)
        .collect()
}

/// Derive the S256 code challenge for a verifier:
/// `BASE64URL(SHA256(ASCII(code_verifier)))`, unpadded
pub fn generate_code_challenge(code_verifier: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(code_verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hasher.finalize())
}

/// Verify a presented code verifier against a previously issued challenge
///
/// Recomputes the S256 challenge and compares for exact equality.
pub fn verify_code_verifier(code_verifier: &str, code_challenge: &str) -> bool {
    generate_code_challenge(code_verifier) == code_challenge
}

/// Validate code verifier format per RFC 7636 section 4.1:
/// 43-128 characters, all from the unreserved alphabet
pub fn validate_code_verifier(code_verifier: &str) -> bool {
    let len = code_verifier.len();
    if !(43..=128).contains(&len) {
        return false;
    }

    code_verifier
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_generated_verifier_length_and_alphabet() {
        let verifier = generate_code_verifier();
        assert_eq!(verifier.len(), 128);
        assert!(verifier.bytes().all(|b| VERIFIER_CHARS.contains(&b)));
    }

    #[test]
    fn test_generated_verifiers_are_distinct() {
        let a = generate_code_verifier();
        let b = generate_code_verifier();
        assert_ne!(a, b);
    }

    #[test]
    fn test_injected_rng_is_deterministic() {
        let a = generate_code_verifier_from(&mut StdRng::seed_from_u64(7));
        let b = generate_code_verifier_from(&mut StdRng::seed_from_u64(7));
        assert_eq!(a, b);
        assert_eq!(a.len(), 128);
    }

    #[test]
    fn test_challenge_matches_rfc_7636_appendix_b_vector() {
        let code_verifier = "dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk";
        assert_eq!(
            generate_code_challenge(code_verifier),
            "E9Melhoa2OwvFrEMTJguCHaoeK1t8URWbuGJSstw-cM"
        );
    }

    #[test]
    fn test_verifier_roundtrip() {
        let verifier = generate_code_verifier();
        let challenge = generate_code_challenge(&verifier);
        assert!(verify_code_verifier(&verifier, &challenge));
    }

    #[test]
    fn test_wrong_challenge_is_rejected() {
        let verifier = generate_code_verifier();
        let other = generate_code_challenge("not-the-same-verifier-padded-to-valid-length");
        assert!(!verify_code_verifier(&verifier, &other));
    }

    #[test]
    fn test_challenge_is_deterministic() {
        let verifier = generate_code_verifier();
        assert_eq!(
            generate_code_challenge(&verifier),
            generate_code_challenge(&verifier)
        );
    }

    #[test]
    fn test_code_verifier_format_validation() {
        assert!(validate_code_verifier(
            "dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk"
        ));

        // Too short (42 chars)
        assert!(!validate_code_verifier(
            "dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjX"
        ));

        // Too long (129 chars)
        assert!(!validate_code_verifier(&"a".repeat(129)));

        // '=' is not in the unreserved alphabet
        assert!(!validate_code_verifier(
            "dBjftJeZ4CVP-mB92K27uhbUJU1p1r_wW1gFWFOEjXk="
        ));
    }

    #[test]
    fn test_pkce_challenge_generate() {
        let pkce = PkceChallenge::generate();
        assert_eq!(pkce.challenge_method, "S256");
        assert!(validate_code_verifier(&pkce.code_verifier));
        assert!(verify_code_verifier(&pkce.code_verifier, &pkce.code_challenge));
    }
}
