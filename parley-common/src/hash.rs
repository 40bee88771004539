//! Salted password hashing
//!
//! Accounts store a per-account random salt (hex-encoded) alongside a
//! SHA-256 digest of the salt string concatenated with the password. The
//! salt string is prepended to the password before hashing, both as UTF-8
//! bytes, and the digest is stored as lowercase hex.
//!
//! The salt exists to defeat precomputed lookup tables; it is not secret
//! and is persisted next to the hash.

use rand::RngExt;
use sha2::{Digest, Sha256};

/// Salt length in random bytes (rendered as twice as many hex characters)
pub const SALT_LENGTH: usize = 16;

/// Generate a random hex-encoded salt
///
/// Draws [`SALT_LENGTH`] bytes from a cryptographically secure RNG and
/// renders them as lowercase hex.
pub fn generate_salt() -> String {
    let bytes: [u8; SALT_LENGTH] = rand::rng().random();
    hex::encode(bytes)
}

/// Compute the salted password hash
///
/// Returns `hex(SHA-256(salt || password))` where `salt` is the hex-encoded
/// salt string as stored in the account record.
pub fn hash_password(salt: &str, password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

/// Verify a password against a stored salt and hash
///
/// Recomputes the salted hash and compares it byte-for-byte to the stored
/// value.
pub fn verify_password(salt: &str, password_hash: &str, password: &str) -> bool {
    hash_password(salt, password) == password_hash
}
