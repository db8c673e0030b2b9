//! A deck shared between several callers.

use crate::card::Card;
use crate::deck::{Deck, Remaining};
use crate::error::DeckError;
use crate::sync::Mutex;

/// A [`Deck`] behind a mutex, so concurrent sessions can draw from one shoe.
///
/// Each operation takes the lock for its own duration; draws are serialized
/// and every card is handed out exactly once.
///
/// ```
/// use shoedeck::{Deck, SharedDeck};
///
/// let shoe = SharedDeck::new(Deck::shoe(11));
/// let card = shoe.remove_top().unwrap();
/// assert_eq!(shoe.len(), 311);
/// let _ = card;
/// ```
pub struct SharedDeck {
    deck: Mutex<Deck>,
}

impl SharedDeck {
    /// Wraps a deck for shared use.
    #[must_use]
    pub const fn new(deck: Deck) -> Self {
        Self {
            deck: Mutex::new(deck),
        }
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if no cards remain.
    pub fn remove_top(&self) -> Result<Card, DeckError> {
        self.deck.lock().remove_top()
    }

    /// Returns how many cards remain out of the original size.
    pub fn remaining_cards(&self) -> Remaining {
        self.deck.lock().remaining_cards()
    }

    /// Returns the number of cards left.
    pub fn len(&self) -> usize {
        self.deck.lock().len()
    }

    /// Returns whether the deck has run out of cards.
    pub fn is_empty(&self) -> bool {
        self.deck.lock().is_empty()
    }

    /// Runs `f` with the deck locked.
    pub fn with_deck<T>(&self, f: impl FnOnce(&Deck) -> T) -> T {
        f(&self.deck.lock())
    }

    /// Returns the wrapped deck.
    #[must_use]
    pub fn into_inner(self) -> Deck {
        self.deck.into_inner()
    }
}

impl From<Deck> for SharedDeck {
    fn from(deck: Deck) -> Self {
        Self::new(deck)
    }
}
