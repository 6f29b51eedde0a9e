//! Password hashing
//!
//! Salted one-way hashing for account passwords. Argon2id is the only
//! implementation; the trait lets tests swap in something cheaper.

use argon2::{
    password_hash::{PasswordHasher as _, SaltString},
    Argon2, PasswordHash, PasswordVerifier,
};
use rand::RngCore;

use crate::utils::errors::{Result, TurnoutError};

/// Hashes and verifies account passwords
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password into a self-describing PHC string
    fn hash(&self, password: &str) -> Result<String>;

    /// Check a plaintext password against a stored hash.
    ///
    /// `Ok(false)` means a mismatch; errors are reserved for malformed hashes.
    fn verify(&self, password: &str, hash: &str) -> Result<bool>;
}

/// Argon2id password hasher with a random 16-byte salt per hash
#[derive(Debug, Clone, Default)]
pub struct Argon2Hasher;

impl Argon2Hasher {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, password: &str) -> Result<String> {
        let mut salt_bytes = [0u8; 16];
        rand::thread_rng().fill_bytes(&mut salt_bytes);

        let salt = SaltString::encode_b64(&salt_bytes)
            .map_err(|e| TurnoutError::PasswordHash(e.to_string()))?;

        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| TurnoutError::PasswordHash(e.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool> {
        let parsed = PasswordHash::new(hash)
            .map_err(|e| TurnoutError::PasswordHash(e.to_string()))?;

        Ok(Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok())
    }
}
