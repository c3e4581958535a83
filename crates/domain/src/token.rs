//! Session token value object.
//!
//! Wraps an already-issued opaque token string and its expiry instant. This
//! crate neither generates nor signs tokens - issuance belongs to an external
//! collaborator; this type only answers "has it expired yet?".

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An opaque session token with a fixed expiry instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    value: String,
    expires_at: DateTime<Utc>,
}

impl Token {
    /// Wrap an externally issued token string and its expiry instant.
    pub fn new(value: impl Into<String>, expires_at: DateTime<Utc>) -> Self {
        Self {
            value: value.into(),
            expires_at,
        }
    }

    /// Get the opaque token value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Get the expiry instant.
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// Whether the token has expired, evaluated against the clock at call
    /// time (never cached). False strictly before the expiry instant, true
    /// at and after it - there is no grace period.
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}
