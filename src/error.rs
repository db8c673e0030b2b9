//! Error types for card and deck operations.

use thiserror::Error;

/// Errors that can occur while constructing a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Rank is not valid for the card variant being built.
    #[error("invalid rank for this card")]
    InvalidRank,
    /// Suit is not one of S, D, H or C.
    #[error("invalid suit")]
    InvalidSuit,
}

/// Errors that can occur while building or drawing from a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// No cards left in the deck.
    #[error("no cards left in the deck")]
    EmptyDeck,
    /// A deck needs at least one sub-deck.
    #[error("a deck needs at least one sub-deck")]
    NoDecks,
    /// The requested number of sub-decks does not fit in memory.
    #[error("too many sub-decks")]
    TooManyDecks,
}
