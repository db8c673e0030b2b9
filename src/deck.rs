//! Standard decks and multi-deck card shoes.

use alloc::collections::VecDeque;
use alloc::collections::vec_deque;
use core::fmt;
use core::ops::Index;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "std")]
use std::collections::HashMap;
use tracing::{debug, trace};

use crate::card::{Card, DECK_SIZE, Rank, Suit};
use crate::error::DeckError;
use crate::options::{DEFAULT_SHOE_DECKS, DeckOptions};

/// An ordered pile of cards dealt from the top.
///
/// A deck is built from one or more 52-card sub-decks and shuffled once on
/// construction, plus a random number of extra passes. The shuffle is not
/// cryptographically secure and must not be used for real-money gambling.
#[derive(Debug, Clone)]
pub struct Deck {
    /// Cards in the deck, top card first.
    cards: VecDeque<Card>,
    /// Number of cards the deck was built with.
    size: usize,
    /// Number of sub-decks.
    decks: usize,
    /// Full shuffle passes run on construction.
    shuffle_passes: usize,
}

impl Deck {
    /// Creates a shuffled deck with the given seed.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::NoDecks`] if `options.decks` is zero and
    /// [`DeckError::TooManyDecks`] if the cards cannot be allocated.
    ///
    /// # Example
    ///
    /// ```
    /// use shoedeck::{Deck, DeckOptions};
    ///
    /// let deck = Deck::new(DeckOptions::default().with_decks(2), 42).unwrap();
    /// assert_eq!(deck.len(), 104);
    /// ```
    pub fn new(options: DeckOptions, seed: u64) -> Result<Self, DeckError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::from_rng(options, &mut rng)
    }

    /// Creates a shuffled deck using the given random number generator.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::NoDecks`] if `options.decks` is zero and
    /// [`DeckError::TooManyDecks`] if the cards cannot be allocated.
    pub fn from_rng<R: Rng + ?Sized>(options: DeckOptions, rng: &mut R) -> Result<Self, DeckError> {
        if options.decks == 0 {
            debug!("rejected deck with no sub-decks");
            return Err(DeckError::NoDecks);
        }
        let Some(size) = options
            .decks
            .checked_mul(DECK_SIZE)
            .filter(|&size| fits_in_memory(size))
        else {
            debug!(decks = options.decks, "rejected oversized deck");
            return Err(DeckError::TooManyDecks);
        };
        Ok(Self::build(options.decks, size, options.extra_entropy, rng))
    }

    /// Creates a single shuffled 52-card deck with the given seed.
    #[must_use]
    pub fn standard(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::standard_from_rng(DeckOptions::standard(), &mut rng)
    }

    /// Creates a single shuffled 52-card deck.
    ///
    /// `options.decks` is ignored: a standard deck always holds exactly one
    /// sub-deck.
    pub fn standard_from_rng<R: Rng + ?Sized>(options: DeckOptions, rng: &mut R) -> Self {
        Self::build(1, DECK_SIZE, options.extra_entropy, rng)
    }

    /// Creates a shuffled card shoe of [`DEFAULT_SHOE_DECKS`] sub-decks with
    /// the given seed.
    #[must_use]
    pub fn shoe(seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        Self::build(
            DEFAULT_SHOE_DECKS,
            DEFAULT_SHOE_DECKS * DECK_SIZE,
            true,
            &mut rng,
        )
    }

    fn build<R: Rng + ?Sized>(decks: usize, size: usize, extra_entropy: bool, rng: &mut R) -> Self {
        let mut cards = unshuffled(decks);
        let slice = cards.make_contiguous();
        slice.shuffle(rng);

        let extra = if extra_entropy {
            rng.random_range(0..=size)
        } else {
            0
        };
        for _ in 0..extra {
            slice.shuffle(rng);
        }

        debug!(decks, size, passes = extra + 1, "built deck");

        Self {
            cards,
            size,
            decks,
            shuffle_passes: extra + 1,
        }
    }

    /// Removes and returns the top card.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::EmptyDeck`] if no cards remain.
    pub fn remove_top(&mut self) -> Result<Card, DeckError> {
        let Some(card) = self.cards.pop_front() else {
            debug!(size = self.size, "draw from empty deck");
            return Err(DeckError::EmptyDeck);
        };
        trace!(%card, remaining = self.cards.len(), "drew card");
        Ok(card)
    }

    /// Returns the top card without removing it.
    #[must_use]
    pub fn peek_top(&self) -> Option<&Card> {
        self.cards.front()
    }

    /// Returns how many cards remain out of the original size.
    ///
    /// # Example
    ///
    /// ```
    /// use shoedeck::Deck;
    ///
    /// let mut deck = Deck::standard(7);
    /// deck.remove_top().unwrap();
    /// assert_eq!(deck.remaining_cards().to_string(), "51 of 52 cards remain");
    /// ```
    #[must_use]
    pub fn remaining_cards(&self) -> Remaining {
        Remaining {
            count: self.cards.len(),
            size: self.size,
        }
    }

    /// Returns the number of cards left.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the deck has run out of cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the number of cards the deck was built with.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of sub-decks.
    #[must_use]
    pub const fn decks(&self) -> usize {
        self.decks
    }

    /// Returns the number of full shuffle passes run on construction.
    ///
    /// Always between 1 and `size + 1`.
    #[must_use]
    pub const fn shuffle_passes(&self) -> usize {
        self.shuffle_passes
    }

    /// Returns the number of cards dealt so far.
    #[must_use]
    pub fn dealt(&self) -> usize {
        self.size - self.cards.len()
    }

    /// Returns the fraction of the deck dealt so far, from 0.0 to 1.0.
    #[must_use]
    #[expect(
        clippy::cast_precision_loss,
        reason = "f64 has sufficient precision for card counts"
    )]
    pub fn penetration(&self) -> f64 {
        self.dealt() as f64 / self.size as f64
    }

    /// Returns the card at `index`, counting from the top.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Iterates over the cards from the top.
    pub fn iter(&self) -> vec_deque::Iter<'_, Card> {
        self.cards.iter()
    }

    /// Counts the copies of each distinct card left in the deck.
    #[must_use]
    pub fn tally(&self) -> HashMap<Card, usize> {
        let mut counts = HashMap::new();
        for card in &self.cards {
            *counts.entry(*card).or_insert(0) += 1;
        }
        counts
    }
}

impl Index<usize> for Deck {
    type Output = Card;

    fn index(&self, index: usize) -> &Self::Output {
        &self.cards[index]
    }
}

impl<'a> IntoIterator for &'a Deck {
    type Item = &'a Card;
    type IntoIter = vec_deque::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.iter()
    }
}

/// Remaining card count of a deck, displayed as `"N of SIZE cards remain"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Remaining {
    /// Cards still in the deck.
    pub count: usize,
    /// Cards the deck was built with.
    pub size: usize,
}

impl fmt::Display for Remaining {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {} cards remain", self.count, self.size)
    }
}

/// Creates a single shuffled 52-card deck with the given seed.
#[must_use]
pub fn new_std_deck(seed: u64) -> Deck {
    Deck::standard(seed)
}

/// Creates a shuffled card shoe with the given seed.
///
/// `decks` defaults to [`DEFAULT_SHOE_DECKS`] when `None`.
///
/// # Errors
///
/// Returns [`DeckError::NoDecks`] if `decks` is `Some(0)` and
/// [`DeckError::TooManyDecks`] if the card count overflows.
pub fn new_card_shoe(decks: Option<usize>, seed: u64) -> Result<Deck, DeckError> {
    let options = DeckOptions::shoe().with_decks(decks.unwrap_or(DEFAULT_SHOE_DECKS));
    Deck::new(options, seed)
}

/// Whether `size` cards stay within the allocation limit of `isize::MAX` bytes.
fn fits_in_memory(size: usize) -> bool {
    size.checked_mul(size_of::<Card>()).is_some_and(|bytes| bytes <= isize::MAX as usize)
}

/// Lays out `decks` copies of the 52 cards, suit by suit, ranks A to K.
fn unshuffled(decks: usize) -> VecDeque<Card> {
    let mut cards = VecDeque::with_capacity(decks * DECK_SIZE);
    for _ in 0..decks {
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push_back(Card::new(rank, suit));
            }
        }
    }
    cards
}
