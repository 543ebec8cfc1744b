//! Bit set over the 24-card deck.

use serde::{Deserialize, Serialize};

use super::card::{Card, DECK_SIZE};

/// A set of cards stored as a 24-bit mask, indexed by [`Card::index`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardSet(u32);

impl CardSet {
    const FULL_MASK: u32 = (1 << DECK_SIZE) - 1;

    /// The empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Every card in the deck.
    #[must_use]
    pub const fn full() -> Self {
        Self(Self::FULL_MASK)
    }

    /// Insert a card, returning `false` if it was already present.
    pub fn insert(&mut self, card: Card) -> bool {
        let bit = 1 << card.index();
        let fresh = self.0 & bit == 0;
        self.0 |= bit;
        fresh
    }

    #[inline]
    #[must_use]
    pub fn contains(&self, card: Card) -> bool {
        self.0 & (1 << card.index()) != 0
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Cards in `self` but not in `other`.
    #[must_use]
    pub fn difference(self, other: CardSet) -> CardSet {
        CardSet(self.0 & !other.0)
    }

    /// Iterate in deck order.
    pub fn iter(&self) -> impl Iterator<Item = Card> + '_ {
        (0..DECK_SIZE)
            .filter(move |&i| self.0 & (1 << i) != 0)
            .map(Card::from_index)
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut set = CardSet::empty();
        set.extend(iter);
        set
    }
}

impl Extend<Card> for CardSet {
    fn extend<I: IntoIterator<Item = Card>>(&mut self, iter: I) {
        for card in iter {
            self.insert(card);
        }
    }
}
