//! Card types: ranks, suits and the three card variants.
//!
//! A [`Card`] is one of [`Ace`], [`NumberCard`] or [`FaceCard`]. Every
//! variant is identified by its rank and suit only; the blackjack value is
//! derived from the rank.

use core::cmp::Ordering;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::str::FromStr;

use crate::error::CardError;

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;

/// Card rank, in canonical order from Ace to King.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Rank {
    /// Ace.
    Ace,
    /// Two.
    Two,
    /// Three.
    Three,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Jack.
    Jack,
    /// Queen.
    Queen,
    /// King.
    King,
}

impl Rank {
    /// All ranks in canonical order (A, 2, ..., 10, J, Q, K).
    pub const ALL: [Self; 13] = [
        Self::Ace,
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Jack,
        Self::Queen,
        Self::King,
    ];

    /// Position of the rank in [`Rank::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Printed symbol of the rank (`"A"`, `"2"`, ..., `"10"`, `"J"`, `"Q"`, `"K"`).
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Ace => "A",
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Jack => "J",
            Self::Queen => "Q",
            Self::King => "K",
        }
    }

    /// Parses a rank from its printed symbol.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] if the symbol is not one of the 13 ranks.
    pub fn from_symbol(symbol: &str) -> Result<Self, CardError> {
        Self::ALL
            .into_iter()
            .find(|rank| rank.symbol() == symbol)
            .ok_or(CardError::InvalidRank)
    }

    /// Whether this is a number rank (2 through 10).
    #[must_use]
    pub const fn is_number(self) -> bool {
        matches!(
            self,
            Self::Two
                | Self::Three
                | Self::Four
                | Self::Five
                | Self::Six
                | Self::Seven
                | Self::Eight
                | Self::Nine
                | Self::Ten
        )
    }

    /// Whether this is a face rank (J, Q or K).
    #[must_use]
    pub const fn is_face(self) -> bool {
        matches!(self, Self::Jack | Self::Queen | Self::King)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Rank {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s)
    }
}

/// Card suit.
///
/// Suits order in reverse of their canonical order: Spades is the highest
/// suit and Clubs the lowest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Suit {
    /// Spades.
    Spades,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Clubs.
    Clubs,
}

impl Suit {
    /// All suits in canonical order (S, D, H, C).
    pub const ALL: [Self; 4] = [Self::Spades, Self::Diamonds, Self::Hearts, Self::Clubs];

    /// Position of the suit in [`Suit::ALL`].
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Single-character code of the suit.
    #[must_use]
    pub const fn code(self) -> char {
        match self {
            Self::Spades => 'S',
            Self::Diamonds => 'D',
            Self::Hearts => 'H',
            Self::Clubs => 'C',
        }
    }

    /// Parses a suit from its single-character code.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidSuit`] unless the code is `S`, `D`, `H` or `C`.
    pub const fn from_code(code: char) -> Result<Self, CardError> {
        match code {
            'S' => Ok(Self::Spades),
            'D' => Ok(Self::Diamonds),
            'H' => Ok(Self::Hearts),
            'C' => Ok(Self::Clubs),
            _ => Err(CardError::InvalidSuit),
        }
    }
}

impl Ord for Suit {
    fn cmp(&self, other: &Self) -> Ordering {
        other.index().cmp(&self.index())
    }
}

impl PartialOrd for Suit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Suit {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(code), None) => Self::from_code(code),
            _ => Err(CardError::InvalidSuit),
        }
    }
}

/// Variant of a [`Card`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardKind {
    /// An ace.
    Ace,
    /// A number card (2 through 10).
    Number,
    /// A face card (J, Q or K).
    Face,
}

/// An ace. Counts as 1, or 11 as its high value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ace {
    suit: Suit,
}

impl Ace {
    /// Low value of an ace.
    pub const VALUE: u8 = 1;
    /// High value of an ace.
    pub const HIGH_VALUE: u8 = 11;

    /// Creates an ace of the given suit.
    #[must_use]
    pub const fn new(suit: Suit) -> Self {
        Self { suit }
    }

    /// Creates an ace from a suit code.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidSuit`] if the code is not a valid suit.
    pub const fn from_code(suit: char) -> Result<Self, CardError> {
        match Suit::from_code(suit) {
            Ok(suit) => Ok(Self::new(suit)),
            Err(err) => Err(err),
        }
    }

    /// The suit of the ace.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }
}

impl fmt::Display for Ace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", Rank::Ace, self.suit)
    }
}

/// A card showing 2 through 10. Its value is the number on the face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NumberCard {
    rank: Rank,
    suit: Suit,
}

impl NumberCard {
    /// Creates a number card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] unless the rank is 2 through 10.
    pub const fn new(rank: Rank, suit: Suit) -> Result<Self, CardError> {
        if rank.is_number() {
            Ok(Self { rank, suit })
        } else {
            Err(CardError::InvalidRank)
        }
    }

    /// Creates a number card from a rank symbol and a suit code.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] or [`CardError::InvalidSuit`] when
    /// either part does not name a number card.
    pub fn from_symbols(rank: &str, suit: &str) -> Result<Self, CardError> {
        let rank: Rank = rank.parse()?;
        if !rank.is_number() {
            return Err(CardError::InvalidRank);
        }
        Self::new(rank, suit.parse()?)
    }

    /// The rank of the card.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// The suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// The value of the card, equal to its number.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.rank.index() as u8 + 1
    }
}

impl fmt::Display for NumberCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.rank, self.suit)
    }
}

/// A jack, queen or king. Always worth 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FaceCard {
    rank: Rank,
    suit: Suit,
}

impl FaceCard {
    /// Value of every face card.
    pub const VALUE: u8 = 10;

    /// Creates a face card.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] unless the rank is J, Q or K.
    pub const fn new(rank: Rank, suit: Suit) -> Result<Self, CardError> {
        if rank.is_face() {
            Ok(Self { rank, suit })
        } else {
            Err(CardError::InvalidRank)
        }
    }

    /// Creates a face card from a rank symbol and a suit code.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] or [`CardError::InvalidSuit`] when
    /// either part does not name a face card.
    pub fn from_symbols(rank: &str, suit: &str) -> Result<Self, CardError> {
        let rank: Rank = rank.parse()?;
        if !rank.is_face() {
            return Err(CardError::InvalidRank);
        }
        Self::new(rank, suit.parse()?)
    }

    /// The rank of the card.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// The suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        self.suit
    }
}

impl fmt::Display for FaceCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.rank, self.suit)
    }
}

/// A playing card.
///
/// Two cards are equal when their rank and suit match. Cards order by rank
/// first (Ace lowest, King highest), then by suit with Spades highest.
///
/// ```
/// use shoedeck::{Card, Rank, Suit};
///
/// let king_spades = Card::new(Rank::King, Suit::Spades);
/// let king_diamonds = Card::new(Rank::King, Suit::Diamonds);
/// assert!(king_diamonds < king_spades);
/// assert_eq!(king_spades.to_string(), "K-S");
/// ```
#[derive(Debug, Clone, Copy)]
pub enum Card {
    /// An ace.
    Ace(Ace),
    /// A number card.
    Number(NumberCard),
    /// A face card.
    Face(FaceCard),
}

impl Card {
    /// Creates the card of the given rank and suit, picking its variant
    /// from the rank.
    #[must_use]
    pub const fn new(rank: Rank, suit: Suit) -> Self {
        match rank {
            Rank::Ace => Self::Ace(Ace::new(suit)),
            Rank::Jack | Rank::Queen | Rank::King => Self::Face(FaceCard { rank, suit }),
            _ => Self::Number(NumberCard { rank, suit }),
        }
    }

    /// Creates a card from a rank symbol and a suit code, e.g. `("10", "H")`.
    ///
    /// # Errors
    ///
    /// Returns [`CardError::InvalidRank`] for an unknown rank symbol and
    /// [`CardError::InvalidSuit`] for an unknown suit code.
    pub fn parse(rank: &str, suit: &str) -> Result<Self, CardError> {
        Ok(Self::new(rank.parse()?, suit.parse()?))
    }

    /// The rank of the card.
    #[must_use]
    pub const fn rank(&self) -> Rank {
        match self {
            Self::Ace(_) => Rank::Ace,
            Self::Number(card) => card.rank,
            Self::Face(card) => card.rank,
        }
    }

    /// The suit of the card.
    #[must_use]
    pub const fn suit(&self) -> Suit {
        match self {
            Self::Ace(card) => card.suit,
            Self::Number(card) => card.suit,
            Self::Face(card) => card.suit,
        }
    }

    /// The variant of the card.
    #[must_use]
    pub const fn kind(&self) -> CardKind {
        match self {
            Self::Ace(_) => CardKind::Ace,
            Self::Number(_) => CardKind::Number,
            Self::Face(_) => CardKind::Face,
        }
    }

    /// The blackjack value of the card. Aces count 1 here.
    #[must_use]
    pub const fn value(&self) -> u8 {
        match self {
            Self::Ace(_) => Ace::VALUE,
            Self::Number(card) => card.value(),
            Self::Face(_) => FaceCard::VALUE,
        }
    }

    /// The high value of an ace, `None` for other cards.
    #[must_use]
    pub const fn high_value(&self) -> Option<u8> {
        match self {
            Self::Ace(_) => Some(Ace::HIGH_VALUE),
            Self::Number(_) | Self::Face(_) => None,
        }
    }

    /// Position of the card in an unshuffled deck (suits S, D, H, C, each
    /// running A through K).
    #[must_use]
    pub const fn index(&self) -> usize {
        self.suit().index() * Rank::ALL.len() + self.rank().index()
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.rank() == other.rank() && self.suit() == other.suit()
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.rank().hash(state);
        self.suit().hash(state);
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank()
            .cmp(&other.rank())
            .then_with(|| self.suit().cmp(&other.suit()))
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.rank(), self.suit())
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses the `"{rank}-{suit}"` form produced by [`Display`](fmt::Display).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (rank, suit) = s.split_once('-').ok_or(CardError::InvalidRank)?;
        Self::parse(rank, suit)
    }
}

impl From<Ace> for Card {
    fn from(card: Ace) -> Self {
        Self::Ace(card)
    }
}

impl From<NumberCard> for Card {
    fn from(card: NumberCard) -> Self {
        Self::Number(card)
    }
}

impl From<FaceCard> for Card {
    fn from(card: FaceCard) -> Self {
        Self::Face(card)
    }
}
