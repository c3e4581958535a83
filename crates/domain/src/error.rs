//! Domain-level errors.
//!
//! These errors represent business rule violations and domain logic failures.
//! They are independent of infrastructure concerns (HTTP, database, sessions)
//! and are surfaced synchronously by the failing constructor - nothing here
//! is retried or recovered internally.

use thiserror::Error;

/// Domain-specific errors for business rule violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Email failed the syntactic validation pattern
    #[error("invalid email address")]
    InvalidEmail,

    /// Username length or character-set violation
    #[error(
        "invalid username: must be {}-{} characters of letters, digits and underscores",
        crate::constants::USERNAME_MIN_LENGTH,
        crate::constants::USERNAME_MAX_LENGTH
    )]
    InvalidUsername,

    /// Deck name length violation
    #[error(
        "invalid deck name: must be {}-{} characters",
        crate::constants::DECK_NAME_MIN_LENGTH,
        crate::constants::DECK_NAME_MAX_LENGTH
    )]
    InvalidDeckName,

    /// Plaintext failed the password strength policy
    #[error("weak password: must be at least {} characters, including uppercase, lowercase and digits",
        crate::constants::MIN_PASSWORD_LENGTH)]
    WeakPassword,

    /// Absent or expired token. Never constructed by this crate; reserved
    /// for collaborators validating sessions against [`crate::Token`].
    #[error("invalid or expired token")]
    InvalidToken,

    /// Underlying hashing primitive failed (non-recoverable)
    #[error("password hashing failed: {0}")]
    Hashing(String),
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
