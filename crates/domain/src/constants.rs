//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Players
// =============================================================================

/// Minimum username length requirement
pub const USERNAME_MIN_LENGTH: usize = 3;

/// Maximum username length requirement
pub const USERNAME_MAX_LENGTH: usize = 30;

/// Minimum password length requirement
pub const MIN_PASSWORD_LENGTH: usize = 8;

// =============================================================================
// Decks
// =============================================================================

/// Minimum deck name length requirement
pub const DECK_NAME_MIN_LENGTH: usize = 2;

/// Maximum deck name length requirement
pub const DECK_NAME_MAX_LENGTH: usize = 150;

// =============================================================================
// Validation
// =============================================================================

/// Syntactic email pattern (ASCII local part and domain, TLD of 2+ letters).
/// No MX/DNS verification and no Unicode/IDN support.
pub const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";
