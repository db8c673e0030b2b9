//! Playing cards, standard decks and multi-deck dealing shoes with optional
//! `no_std` support.
//!
//! The crate provides a [`Card`] type covering the 52 cards of a standard
//! deck, and a [`Deck`] type that builds one or more of those decks, shuffles
//! them and deals from the top. Game logic such as betting or hand scoring
//! lives with the caller.
//!
//! # Example
//!
//! ```
//! use shoedeck::{Deck, DeckError};
//!
//! let mut deck = Deck::standard(42);
//! assert_eq!(deck.len(), 52);
//!
//! while deck.remove_top().is_ok() {}
//! assert_eq!(deck.remove_top(), Err(DeckError::EmptyDeck));
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;
pub mod shared;
mod sync;

// Re-export main types
pub use card::{Ace, Card, CardKind, DECK_SIZE, FaceCard, NumberCard, Rank, Suit};
pub use deck::{Deck, Remaining, new_card_shoe, new_std_deck};
pub use error::{CardError, DeckError};
pub use options::{DEFAULT_SHOE_DECKS, DeckOptions};
pub use shared::SharedDeck;
