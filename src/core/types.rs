//! Core type definitions used throughout the codebase

use serde::{Deserialize, Serialize};

/// Unique identifier for a deck (stable string slug, e.g. "food-drink")
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DeckId(pub String);

impl DeckId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DeckId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DeckId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Unique identifier for a card: owning deck plus position within it.
///
/// The composite key is collision-free for any deck size, unlike a
/// flat `deck_index * 1000 + card_index` integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId {
    pub deck: DeckId,
    pub index: u32,
}

impl CardId {
    pub fn new(deck: DeckId, index: u32) -> Self {
        Self { deck, index }
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.deck, self.index)
    }
}

/// One guessable prompt belonging to exactly one deck
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub prompt: String,
    pub deck_id: DeckId,
}

/// A named collection of prompt cards for one theme.
///
/// Immutable for the session once hydrated from the content provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    pub id: DeckId,
    pub name: String,
    pub cards: Vec<Card>,
    /// Sort order in deck listings (lower first)
    pub priority: u32,
    /// Locked behind a purchase according to remote metadata
    pub for_sale: bool,
    /// Optional artwork asset name
    pub image: Option<String>,
}
