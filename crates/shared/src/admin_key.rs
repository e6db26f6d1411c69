//! Admin key hashing and verification.
//!
//! The admin API key is configured out-of-band and compared by SHA-256
//! digest so the comparison does not short-circuit on the raw key bytes.

use sha2::{Digest, Sha256};

/// Returns the lowercase hex SHA-256 digest of a key.
pub fn hash_key(key: &str) -> String {
    let digest = Sha256::digest(key.as_bytes());
    hex::encode(digest)
}

/// Verifies a presented key against a configured key.
///
/// Both sides are digested before comparison, and the comparison itself
/// accumulates over every byte.
pub fn verify_key(presented: &str, configured: &str) -> bool {
    let a = Sha256::digest(presented.as_bytes());
    let b = Sha256::digest(configured.as_bytes());

    a.iter().zip(b.iter()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
