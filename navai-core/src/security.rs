//! Request signing primitives.
//!
//! A shared secret key, known to the calling application's backend and the
//! Navigable AI service, authenticates that a per-user identifier or message
//! originated from a trusted caller. The signature is the hex-encoded
//! HMAC-SHA256 of the payload under that key.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Compute the hex-encoded HMAC-SHA256 signature of `payload` under `secret`.
///
/// This is the backend-side counterpart of [`verify_signature`]: an
/// application holding the shared secret key signs the user identifier (or
/// the outgoing message) and hands the signature to the client call.
pub fn sign_payload(secret: &str, payload: &str) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(payload.as_bytes());
    hex::encode(mac.finalize().into_bytes())
}

/// Verify a hex-encoded HMAC-SHA256 signature over `payload`.
///
/// When `secret` is `None` the client is not configured for signing and
/// verification trivially succeeds; signing is opt-in per client instance.
/// When a secret is present the comparison runs in constant time.
pub fn verify_signature(payload: &str, signature: &str, secret: Option<&str>) -> bool {
    let Some(secret) = secret else {
        return true;
    };

    let Ok(expected) = hex::decode(signature) else {
        return false;
    };

    let mut mac = match HmacSha256::new_from_slice(secret.as_bytes()) {
        Ok(mac) => mac,
        Err(_) => return false,
    };
    mac.update(payload.as_bytes());
    mac.verify_slice(&expected).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_is_deterministic_hex() {
        let sig = sign_payload("secret", "user-42");
        assert_eq!(sig, sign_payload("secret", "user-42"));
        assert_eq!(sig.len(), 64);
        assert!(sig.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn verify_accepts_correct_signature() {
        let sig = sign_payload("secret", "hello world");
        assert!(verify_signature("hello world", &sig, Some("secret")));
    }

    #[test]
    fn verify_rejects_wrong_payload_or_key() {
        let sig = sign_payload("secret", "hello world");
        assert!(!verify_signature("hello mars", &sig, Some("secret")));
        assert!(!verify_signature("hello world", &sig, Some("other")));
    }

    #[test]
    fn verify_rejects_garbage_signature() {
        assert!(!verify_signature("payload", "not-hex", Some("secret")));
        assert!(!verify_signature("payload", "", Some("secret")));
        assert!(!verify_signature("payload", "deadbeef", Some("secret")));
    }

    #[test]
    fn verify_passes_without_secret() {
        assert!(verify_signature("payload", "anything", None));
        assert!(verify_signature("payload", "", None));
    }

    #[test]
    fn known_vector() {
        // RFC 4231 test case 2: key "Jefe", data "what do ya want for nothing?"
        let sig = sign_payload("Jefe", "what do ya want for nothing?");
        assert_eq!(
            sig,
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }
}
