//! Deck entity and its value objects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{DECK_NAME_MAX_LENGTH, DECK_NAME_MIN_LENGTH};
use crate::error::{DomainError, DomainResult};

/// Unique deck identifier.
///
/// Zero is a legal value; whether it means "unassigned" is up to the
/// collaborator that allocates identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeckId(u64);

impl DeckId {
    /// Wrap a numeric identifier assigned by an external collaborator.
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the numeric value.
    pub fn value(self) -> u64 {
        self.0
    }
}

/// A valid deck name, 2-150 characters after trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DeckName {
    value: String,
}

impl DeckName {
    /// Create a new deck name after validation.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidDeckName`] on a length violation.
    pub fn new(raw: &str) -> DomainResult<Self> {
        let trimmed = raw.trim();

        let length = trimmed.chars().count();
        if !(DECK_NAME_MIN_LENGTH..=DECK_NAME_MAX_LENGTH).contains(&length) {
            return Err(DomainError::InvalidDeckName);
        }

        Ok(Self {
            value: trimmed.to_string(),
        })
    }

    /// Get the normalized name.
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for DeckName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl TryFrom<String> for DeckName {
    type Error = DomainError;

    fn try_from(raw: String) -> DomainResult<Self> {
        DeckName::new(&raw)
    }
}

impl From<DeckName> for String {
    fn from(name: DeckName) -> Self {
        name.value
    }
}

/// A deck description. Trimmed, but otherwise unconstrained - the empty
/// string is a valid description.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct DeckDescription {
    value: String,
}

impl DeckDescription {
    /// Create a new deck description, trimming surrounding whitespace.
    pub fn new(raw: &str) -> Self {
        Self {
            value: raw.trim().to_string(),
        }
    }

    /// Get the normalized description.
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for DeckDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<String> for DeckDescription {
    fn from(raw: String) -> Self {
        DeckDescription::new(&raw)
    }
}

impl From<DeckDescription> for String {
    fn from(description: DeckDescription) -> Self {
        description.value
    }
}

/// A deck of cards registered in the system.
///
/// Mirrors the player aggregate's immutable-construction pattern: assembled
/// from already-validated parts, read-only thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deck {
    id: DeckId,
    name: DeckName,
    description: DeckDescription,
    created_at: DateTime<Utc>,
}

impl Deck {
    /// Create a new deck, stamping the current time as the creation
    /// timestamp.
    pub fn new(id: DeckId, name: DeckName, description: DeckDescription) -> Self {
        Self::from_parts(id, name, description, Utc::now())
    }

    /// Reassemble a deck with an explicit creation timestamp, e.g. when
    /// hydrating from storage.
    pub fn from_parts(
        id: DeckId,
        name: DeckName,
        description: DeckDescription,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            description,
            created_at,
        }
    }

    /// Get the deck identifier.
    pub fn id(&self) -> DeckId {
        self.id
    }

    /// Get the deck name.
    pub fn name(&self) -> &DeckName {
        &self.name
    }

    /// Get the deck description.
    pub fn description(&self) -> &DeckDescription {
        &self.description
    }

    /// Get the creation timestamp.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// A read-only, ordered collection of decks.
///
/// Holds a caller-supplied sequence as-is: insertion order is preserved and
/// duplicate identifiers are not rejected at this layer. Lookup is a linear
/// scan; the collaborator that manages large collections is responsible for
/// efficient querying at scale.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckList {
    items: Vec<Deck>,
}

impl DeckList {
    /// Wrap an externally supplied ordered sequence of decks.
    pub fn new(decks: Vec<Deck>) -> Self {
        Self { items: decks }
    }

    /// Get the full ordered sequence.
    pub fn items(&self) -> &[Deck] {
        &self.items
    }

    /// Get the number of decks in the list.
    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// Find the first deck with the given identifier, in insertion order.
    /// Returns `None` when no deck matches.
    pub fn find_by_id(&self, id: DeckId) -> Option<&Deck> {
        self.items.iter().find(|deck| deck.id == id)
    }
}
