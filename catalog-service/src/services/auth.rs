use sha2::{Digest, Sha256};

/// Header carrying the shared secret on every protected request.
pub const API_KEY_HEADER: &str = "x-api-key";

pub trait CredentialVerifier {
    fn authorize(&self, presented_key: &str) -> bool;
}

/// Single static secret for the whole process lifetime.
///
/// Only the SHA-256 digest of the secret is kept. Both sides are hashed to
/// the same length before comparing, so the comparison does the same amount
/// of work whatever the presented key looks like.
pub struct SharedSecret {
    digest: [u8; 32],
}

impl SharedSecret {
    pub fn new(secret: &str) -> Self {
        Self {
            digest: Sha256::digest(secret.as_bytes()).into(),
        }
    }
}

impl CredentialVerifier for SharedSecret {
    fn authorize(&self, presented_key: &str) -> bool {
        if presented_key.is_empty() {
            return false;
        }
        let presented: [u8; 32] = Sha256::digest(presented_key.as_bytes()).into();
        self.digest
            .iter()
            .zip(presented.iter())
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}
