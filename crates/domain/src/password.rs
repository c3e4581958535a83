//! Password value object - domain layer credential handling.
//!
//! DDD: Encapsulates password strength policy, hashing and verification as a
//! single value object. The plaintext is consumed at construction and never
//! retained; only the salted Argon2 hash is stored.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use serde::{Deserialize, Serialize};

use crate::constants::MIN_PASSWORD_LENGTH;
use crate::error::{DomainError, DomainResult};

/// A hashed password credential.
///
/// DDD: Value object - immutable, compared by value (the hash string).
/// The serialized form is the hash, suitable for storage; the plaintext
/// never leaves [`Password::new`].
#[derive(Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Password {
    hash: String,
}

// Don't expose hash in debug output (security)
impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Password")
            .field("hash", &"[REDACTED]")
            .finish()
    }
}

impl Password {
    /// Create a new password by validating and hashing the plain text.
    ///
    /// The plaintext must be at least [`MIN_PASSWORD_LENGTH`] characters and
    /// contain at least one uppercase letter, one lowercase letter and one
    /// digit. Other characters (symbols, punctuation) are permitted but do
    /// not count toward the required classes.
    ///
    /// # Errors
    /// Returns [`DomainError::WeakPassword`] if the plaintext fails the
    /// strength policy, or [`DomainError::Hashing`] if the hashing primitive
    /// itself fails.
    pub fn new(plain_text: &str) -> DomainResult<Self> {
        validate_strength(plain_text)?;

        let hash = Self::hash(plain_text)?;
        Ok(Self { hash })
    }

    /// Create a Password from an existing hash (from storage).
    ///
    /// The hash is opaque; no validation is performed.
    pub fn from_hash(hash: String) -> Self {
        Self { hash }
    }

    /// Get the hash string for storage.
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Consume and return the hash string.
    pub fn into_string(self) -> String {
        self.hash
    }

    /// Verify a plain text password against this hash.
    ///
    /// Uses the hashing library's constant-time comparison. Any failure to
    /// parse or verify the stored hash reads as a mismatch.
    pub fn verify(&self, plain_text: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(&self.hash) else {
            return false;
        };
        Self::argon2()
            .verify_password(plain_text.as_bytes(), &parsed)
            .is_ok()
    }

    /// Hash a password using Argon2 with a fresh random salt.
    fn hash(plain_text: &str) -> DomainResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Self::argon2()
            .hash_password(plain_text.as_bytes(), &salt)
            .map_err(|e| {
                tracing::error!("password hashing failed: {e}");
                DomainError::Hashing(e.to_string())
            })?;
        Ok(hash.to_string())
    }

    /// Get Argon2 instance with default config.
    #[inline]
    fn argon2() -> Argon2<'static> {
        Argon2::default()
    }
}

impl From<Password> for String {
    fn from(password: Password) -> Self {
        password.hash
    }
}

impl PartialEq for Password {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
    }
}

impl Eq for Password {}

/// Check the plaintext against the strength policy in a single scan.
fn validate_strength(plain_text: &str) -> DomainResult<()> {
    if plain_text.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(DomainError::WeakPassword);
    }

    let mut has_upper = false;
    let mut has_lower = false;
    let mut has_digit = false;

    for ch in plain_text.chars() {
        if ch.is_uppercase() {
            has_upper = true;
        } else if ch.is_lowercase() {
            has_lower = true;
        } else if ch.is_numeric() {
            has_digit = true;
        }
    }

    if !has_upper || !has_lower || !has_digit {
        return Err(DomainError::WeakPassword);
    }

    Ok(())
}
