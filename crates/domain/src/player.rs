//! Player aggregate and its identity value objects.
//!
//! DDD: [`Player`] is assembled only from already-validated parts, so an
//! invalid player is unrepresentable at the type boundary. There are no
//! setters - a field "change" (e.g. password rotation) produces a new
//! instance, and persisting the replacement is the caller's job.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{USERNAME_MAX_LENGTH, USERNAME_MIN_LENGTH};
use crate::email::Email;
use crate::error::{DomainError, DomainResult};
use crate::password::Password;

/// A valid player handle.
///
/// 3-30 characters, restricted to ASCII letters, digits and underscores.
/// The stored value is trimmed of surrounding whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Username {
    value: String,
}

impl Username {
    /// Create a new username after validation.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidUsername`] on a length or character-set
    /// violation; the first invalid character short-circuits the scan.
    pub fn new(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();

        let length = trimmed.chars().count();
        if !(USERNAME_MIN_LENGTH..=USERNAME_MAX_LENGTH).contains(&length) {
            return Err(DomainError::InvalidUsername);
        }

        if !trimmed.chars().all(is_valid_username_char) {
            return Err(DomainError::InvalidUsername);
        }

        Ok(Self {
            value: trimmed.to_string(),
        })
    }

    /// Get the normalized username.
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for Username {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for Username {
    type Error = DomainError;

    fn try_from(raw: String) -> DomainResult<Self> {
        Username::new(&raw)
    }
}

impl From<Username> for String {
    fn from(username: Username) -> Self {
        username.value
    }
}

fn is_valid_username_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Unique player identifier.
///
/// Zero is a legal value; whether it means "unassigned" is up to the
/// collaborator that allocates identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(u64);

impl PlayerId {
    /// Wrap a numeric identifier assigned by an external collaborator.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the numeric value.
    pub fn value(self) -> u64 {
        self.0
    }
}

/// A registered player.
///
/// Read-only after construction; every field is exposed through an accessor
/// and none through a setter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    id: PlayerId,
    username: Username,
    email: Email,
    #[serde(skip_serializing)]
    password: Password,
    created_at: DateTime<Utc>,
}

impl Player {
    /// Create a new player from already-validated parts, stamping the
    /// current time as the creation timestamp.
    pub fn new(id: PlayerId, username: Username, email: Email, password: Password) -> Self {
        Self::from_parts(id, username, email, password, Utc::now())
    }

    /// Reassemble a player with an explicit creation timestamp, e.g. when
    /// hydrating from storage.
    pub fn from_parts(
        id: PlayerId,
        username: Username,
        email: Email,
        password: Password,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            username,
            email,
            password,
            created_at,
        }
    }

    /// Get the player identifier.
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Get the username.
    pub fn username(&self) -> &Username {
        &self.username
    }

    /// Get the email address.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Get the password credential.
    pub fn password(&self) -> &Password {
        &self.password
    }

    /// Get the account creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Verify a plain text password against the stored credential.
    pub fn verify_password(&self, plain_text: &str) -> bool {
        self.password.verify(plain_text)
    }

    /// Rotate the password, producing a new player with the same identity
    /// and creation timestamp.
    pub fn with_password(self, password: Password) -> Self {
        Self { password, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_username() {
        let username = Username::new("valid_user1").unwrap();
        assert_eq!(username.as_str(), "valid_user1");
    }

    #[test]
    fn test_username_is_trimmed() {
        let username = Username::new("  player_one  ").unwrap();
        assert_eq!(username.as_str(), "player_one");
    }

    #[test]
    fn test_username_length_bounds() {
        assert_eq!(Username::new("ab"), Err(DomainError::InvalidUsername));
        assert!(Username::new("abc").is_ok());
        assert!(Username::new(&"a".repeat(30)).is_ok());
        assert_eq!(
            Username::new(&"a".repeat(31)),
            Err(DomainError::InvalidUsername)
        );
    }

    #[test]
    fn test_username_character_whitelist() {
        for raw in ["player one", "player-one", "player!", "jogador@1"] {
            assert_eq!(Username::new(raw), Err(DomainError::InvalidUsername), "{raw}");
        }
    }

    #[test]
    fn test_player_id_value() {
        assert_eq!(PlayerId::new(42).value(), 42);
        // Zero is legal at this layer
        assert_eq!(PlayerId::new(0).value(), 0);
    }

    fn test_player() -> Player {
        Player::new(
            PlayerId::new(1),
            Username::new("player_one").unwrap(),
            Email::new("player@example.com").unwrap(),
            Password::new("Password1").unwrap(),
        )
    }

    #[test]
    fn test_player_accessors() {
        let player = test_player();

        assert_eq!(player.id(), PlayerId::new(1));
        assert_eq!(player.username().as_str(), "player_one");
        assert_eq!(player.email().as_str(), "player@example.com");
        assert!(player.created_at() <= Utc::now());
    }

    #[test]
    fn test_player_verify_password() {
        let player = test_player();

        assert!(player.verify_password("Password1"));
        assert!(!player.verify_password("Password2"));
    }

    #[test]
    fn test_player_from_parts_keeps_timestamp() {
        let created_at = Utc::now() - chrono::Duration::days(7);
        let player = Player::from_parts(
            PlayerId::new(9),
            Username::new("veteran").unwrap(),
            Email::new("veteran@example.com").unwrap(),
            Password::from_hash("stored-hash".to_string()),
            created_at,
        );

        assert_eq!(player.created_at(), created_at);
    }

    #[test]
    fn test_password_rotation_preserves_identity() {
        let player = test_player();
        let id = player.id();
        let created_at = player.created_at();

        let rotated = player.with_password(Password::new("Rotated2").unwrap());

        assert_eq!(rotated.id(), id);
        assert_eq!(rotated.created_at(), created_at);
        assert!(rotated.verify_password("Rotated2"));
        assert!(!rotated.verify_password("Password1"));
    }
}
