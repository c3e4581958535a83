//! Email value object.
//!
//! DDD: Encapsulates the primitive string so an invalid address is
//! unrepresentable - the only way to obtain an [`Email`] is through its
//! validating constructor.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::EMAIL_PATTERN;
use crate::error::{DomainError, DomainResult};

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("EMAIL_PATTERN is a valid regex"));

/// A syntactically valid email address.
///
/// Validation is purely syntactic (no MX/DNS lookup, no Unicode/IDN
/// addresses). The stored value is trimmed of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email {
    value: String,
}

impl Email {
    /// Create a new email address after validation.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidEmail`] if the trimmed input does not
    /// match the email pattern (the empty string never matches).
    pub fn new(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();

        if !EMAIL_REGEX.is_match(trimmed) {
            return Err(DomainError::InvalidEmail);
        }

        Ok(Self {
            value: trimmed.to_string(),
        })
    }

    /// Get the normalized address.
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for Email {
    type Error = DomainError;

    fn try_from(raw: String) -> DomainResult<Self> {
        Email::new(&raw)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email() {
        let email = Email::new("player@example.com").unwrap();
        assert_eq!(email.as_str(), "player@example.com");
    }

    #[test]
    fn test_email_is_trimmed() {
        let email = Email::new("  player@example.com  ").unwrap();
        assert_eq!(email.as_str(), "player@example.com");
    }

    #[test]
    fn test_email_allows_local_part_symbols() {
        assert!(Email::new("first.last+tag%x_y-z@mail-host.example.org").is_ok());
    }

    #[test]
    fn test_empty_email_rejected() {
        assert_eq!(Email::new(""), Err(DomainError::InvalidEmail));
        assert_eq!(Email::new("   "), Err(DomainError::InvalidEmail));
    }

    #[test]
    fn test_malformed_emails_rejected() {
        for raw in [
            "plainaddress",
            "@example.com",
            "player@",
            "player@example",
            "player@example.c",
            "player example@example.com",
        ] {
            assert_eq!(Email::new(raw), Err(DomainError::InvalidEmail), "{raw}");
        }
    }

    #[test]
    fn test_deserialization_revalidates() {
        let ok: Result<Email, _> = serde_json::from_str("\"player@example.com\"");
        assert!(ok.is_ok());

        let bad: Result<Email, _> = serde_json::from_str("\"not-an-email\"");
        assert!(bad.is_err());
    }
}
