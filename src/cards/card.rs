//! Suits, values, and cards of the 24-card euchre deck.
//!
//! ## Left Bower
//!
//! Once trump is fixed, the jack of the same-colour suit counts as trump.
//! Always reason about suits through [`Card::adj_suit`], never `card.suit`
//! directly, when trump is known.
//!
//! ```
//! use euchre_search::cards::{Card, Suit, Value};
//!
//! let left = Card::new(Suit::Diamonds, Value::Jack);
//! assert_eq!(left.adj_suit(Suit::Hearts), Suit::Hearts);
//! assert!(left.is_trump(Suit::Hearts));
//! ```

use serde::{Deserialize, Serialize};

/// Card suit. Suits carry no ordering of their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Suit {
    Hearts,
    Diamonds,
    Spades,
    Clubs,
}

impl Suit {
    /// All suits in deck order.
    pub const ALL: [Suit; 4] = [Suit::Hearts, Suit::Diamonds, Suit::Spades, Suit::Clubs];

    /// The same-colour partner suit. Applying it twice is the identity.
    #[inline]
    #[must_use]
    pub const fn left(self) -> Suit {
        match self {
            Suit::Hearts => Suit::Diamonds,
            Suit::Diamonds => Suit::Hearts,
            Suit::Spades => Suit::Clubs,
            Suit::Clubs => Suit::Spades,
        }
    }

    /// Position in [`Suit::ALL`].
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    fn symbol(self) -> char {
        match self {
            Suit::Hearts => 'H',
            Suit::Diamonds => 'D',
            Suit::Spades => 'S',
            Suit::Clubs => 'C',
        }
    }
}

/// Card value, ordered from nine up to ace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Value {
    Nine,
    Ten,
    Jack,
    Queen,
    King,
    Ace,
}

impl Value {
    /// All values in ascending order.
    pub const ALL: [Value; 6] = [
        Value::Nine,
        Value::Ten,
        Value::Jack,
        Value::Queen,
        Value::King,
        Value::Ace,
    ];

    /// Position in [`Value::ALL`].
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    fn symbol(self) -> &'static str {
        match self {
            Value::Nine => "9",
            Value::Ten => "10",
            Value::Jack => "J",
            Value::Queen => "Q",
            Value::King => "K",
            Value::Ace => "A",
        }
    }
}

/// Number of cards in a euchre deck.
pub const DECK_SIZE: usize = 24;

/// An immutable playing card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub suit: Suit,
    pub value: Value,
}

impl Card {
    /// Create a card.
    #[must_use]
    pub const fn new(suit: Suit, value: Value) -> Self {
        Self { suit, value }
    }

    /// The full deck, grouped by value then suit.
    #[must_use]
    pub fn deck() -> [Card; DECK_SIZE] {
        std::array::from_fn(Card::from_index)
    }

    /// Card at a deck index in `0..24`.
    ///
    /// Panics if the index is out of range.
    #[must_use]
    pub fn from_index(index: usize) -> Card {
        assert!(index < DECK_SIZE, "card index {} out of range", index);
        Card::new(Suit::ALL[index % 4], Value::ALL[index / 4])
    }

    /// Stable deck index in `0..24`.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.value.index() * 4 + self.suit.index()
    }

    /// Effective suit once `trump` is fixed.
    #[inline]
    #[must_use]
    pub fn adj_suit(self, trump: Suit) -> Suit {
        if self.is_left_bower(trump) {
            trump
        } else {
            self.suit
        }
    }

    /// Whether this card counts as trump, left bower included.
    #[inline]
    #[must_use]
    pub fn is_trump(self, trump: Suit) -> bool {
        self.adj_suit(trump) == trump
    }

    /// Jack of the trump suit.
    #[inline]
    #[must_use]
    pub fn is_right_bower(self, trump: Suit) -> bool {
        self.value == Value::Jack && self.suit == trump
    }

    /// Jack of the suit sharing trump's colour.
    #[inline]
    #[must_use]
    pub fn is_left_bower(self, trump: Suit) -> bool {
        self.value == Value::Jack && self.suit == trump.left()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.value.symbol(), self.suit.symbol())
    }
}
