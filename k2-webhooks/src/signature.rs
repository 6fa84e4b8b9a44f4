//! Webhook signature generation and verification

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA256 signer/verifier keyed by a shared webhook secret.
///
/// The digest is always computed over the raw request bytes exactly as
/// received. Re-serializing a parsed body would change whitespace or key
/// order and break verification.
#[derive(Clone)]
pub struct WebhookSignature {
    secret: Vec<u8>,
}

impl WebhookSignature {
    /// Create a new signature utility with the given secret
    pub fn new(secret: impl AsRef<[u8]>) -> Self {
        Self {
            secret: secret.as_ref().to_vec(),
        }
    }

    /// Lowercase hex HMAC-SHA256 digest of `payload`
    pub fn sign(&self, payload: &[u8]) -> String {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .expect("HMAC can take key of any size");
        mac.update(payload);
        hex::encode(mac.finalize().into_bytes())
    }

    /// Check `signature` against the digest of `payload`.
    ///
    /// Returns `false` for an empty payload or signature.
    pub fn verify(&self, payload: &[u8], signature: &str) -> bool {
        if payload.is_empty() || signature.is_empty() {
            return false;
        }

        let expected = self.sign(payload);
        constant_time_compare(signature.as_bytes(), expected.as_bytes())
    }
}

impl std::fmt::Debug for WebhookSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WebhookSignature")
            .field("secret", &"[REDACTED]")
            .finish()
    }
}

/// Verify a raw webhook body against its signature header using `secret`.
pub fn verify(raw_body: &[u8], signature_header: &str, secret: &str) -> bool {
    WebhookSignature::new(secret).verify(raw_body, signature_header)
}

/// Constant-time byte comparison to prevent timing attacks.
///
/// Lengths are compared first; equal-length inputs are scanned in full.
fn constant_time_compare(a: &[u8], b: &[u8]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut result = 0u8;
    for (x, y) in a.iter().zip(b.iter()) {
        result |= x ^ y;
    }
    result == 0
}

/// Header names used by the provider
pub mod headers {
    /// The signature header name
    pub const SIGNATURE: &str = "X-KopoKopo-Signature";
}
