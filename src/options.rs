//! Deck configuration options.

/// Number of sub-decks in a card shoe when none is given.
pub const DEFAULT_SHOE_DECKS: usize = 6;

/// Configuration options for building a deck.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use shoedeck::DeckOptions;
///
/// let options = DeckOptions::default()
///     .with_decks(8)
///     .with_extra_entropy(false);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DeckOptions {
    /// Number of 52-card sub-decks.
    pub decks: usize,
    /// Whether to run between 0 and `size` extra shuffle passes after the
    /// first one.
    pub extra_entropy: bool,
}

impl Default for DeckOptions {
    fn default() -> Self {
        Self::standard()
    }
}

impl DeckOptions {
    /// Options for a single standard deck.
    ///
    /// # Example
    ///
    /// ```
    /// use shoedeck::DeckOptions;
    ///
    /// assert_eq!(DeckOptions::standard().decks, 1);
    /// ```
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            decks: 1,
            extra_entropy: true,
        }
    }

    /// Options for a card shoe with the default number of sub-decks.
    ///
    /// # Example
    ///
    /// ```
    /// use shoedeck::{DEFAULT_SHOE_DECKS, DeckOptions};
    ///
    /// assert_eq!(DeckOptions::shoe().decks, DEFAULT_SHOE_DECKS);
    /// ```
    #[must_use]
    pub const fn shoe() -> Self {
        Self {
            decks: DEFAULT_SHOE_DECKS,
            extra_entropy: true,
        }
    }

    /// Sets the number of sub-decks.
    ///
    /// # Example
    ///
    /// ```
    /// use shoedeck::DeckOptions;
    ///
    /// let options = DeckOptions::shoe().with_decks(2);
    /// assert_eq!(options.decks, 2);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: usize) -> Self {
        self.decks = decks;
        self
    }

    /// Sets whether extra shuffle passes run after the first shuffle.
    ///
    /// # Example
    ///
    /// ```
    /// use shoedeck::DeckOptions;
    ///
    /// let options = DeckOptions::default().with_extra_entropy(false);
    /// assert!(!options.extra_entropy);
    /// ```
    #[must_use]
    pub const fn with_extra_entropy(mut self, enabled: bool) -> Self {
        self.extra_entropy = enabled;
        self
    }
}
