//! Per-hand configuration and resolved tricks.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, Suit};
use crate::core::Seat;
use crate::rules::{seat_order, trick_winner};

/// How trump was made for one hand. Fixed once play begins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Setup {
    /// Seat that dealt.
    pub dealer: Seat,

    /// Seat that ordered up or named trump. Their team are the makers.
    pub caller: Seat,

    /// Whether the dealer picked up the turned card.
    pub picked_up: bool,

    /// The turned card on top of the kitty.
    pub top: Card,

    /// Trump suit for the hand.
    pub trump: Suit,

    /// Card the dealer discarded after picking up. Only the dealer knows it.
    pub discard: Option<Card>,

    /// Seat playing alone, whose partner sits out.
    pub alone: Option<Seat>,
}

impl Setup {
    /// Top card ordered up: trump is its suit and the dealer takes it.
    #[must_use]
    pub fn ordered_up(dealer: Seat, caller: Seat, top: Card, discard: Option<Card>) -> Self {
        Self {
            dealer,
            caller,
            picked_up: true,
            top,
            trump: top.suit,
            discard,
            alone: None,
        }
    }

    /// Top card turned down and `trump` named in the second round.
    #[must_use]
    pub fn called(dealer: Seat, caller: Seat, top: Card, trump: Suit) -> Self {
        Self {
            dealer,
            caller,
            picked_up: false,
            top,
            trump,
            discard: None,
            alone: None,
        }
    }

    /// Mark `seat` as playing alone.
    #[must_use]
    pub fn with_alone(mut self, seat: Seat) -> Self {
        self.alone = Some(seat);
        self
    }

    /// Team that made trump.
    #[must_use]
    pub fn makers(&self) -> u8 {
        self.caller.team()
    }

    /// Seat leading the first trick: left of the dealer, skipping a sat-out
    /// partner.
    #[must_use]
    pub fn first_leader(&self) -> Seat {
        let mut order = seat_order(self.dealer.next(), self.alone);
        order.next().unwrap_or(self.dealer.next())
    }
}

/// A resolved trick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trick {
    /// Cards in play order.
    pub cards: SmallVec<[Card; 4]>,

    /// Seat that led.
    pub led: Seat,

    /// Trump in effect.
    pub trump: Suit,

    /// Seat playing alone, if any.
    pub alone: Option<Seat>,
}

impl Trick {
    pub fn new(cards: &[Card], led: Seat, trump: Suit, alone: Option<Seat>) -> Self {
        Self {
            cards: SmallVec::from_slice(cards),
            led,
            trump,
            alone,
        }
    }

    /// Seat that took the trick.
    #[must_use]
    pub fn winner(&self) -> Seat {
        trick_winner(&self.cards, self.trump, self.led, self.alone)
    }

    /// `(seat, card)` pairs in play order.
    pub fn plays(&self) -> impl Iterator<Item = (Seat, Card)> + '_ {
        seat_order(self.led, self.alone).zip(self.cards.iter().copied())
    }
}

/// Seat leading the trick in progress, given the last resolved trick.
#[must_use]
pub fn current_leader(setup: &Setup, last: Option<&Trick>) -> Seat {
    last.map(Trick::winner)
        .unwrap_or_else(|| setup.first_leader())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Value;

    #[test]
    fn test_first_leader() {
        let top = Card::new(Suit::Hearts, Value::Nine);
        let setup = Setup::called(Seat::new(3), Seat::new(1), top, Suit::Spades);
        assert_eq!(setup.first_leader(), Seat::new(0));

        // Seat 2 alone: seat 0 sits out, so seat 1 leads.
        let setup = setup.with_alone(Seat::new(2));
        assert_eq!(setup.first_leader(), Seat::new(1));
    }

    #[test]
    fn test_ordered_up_sets_trump() {
        let top = Card::new(Suit::Clubs, Value::King);
        let setup = Setup::ordered_up(Seat::new(0), Seat::new(1), top, None);
        assert_eq!(setup.trump, Suit::Clubs);
        assert!(setup.picked_up);
        assert_eq!(setup.makers(), 1);
    }

    #[test]
    fn test_trick_plays_and_winner() {
        let cards = [
            Card::new(Suit::Hearts, Value::Queen),
            Card::new(Suit::Spades, Value::Ace),
            Card::new(Suit::Hearts, Value::Ace),
        ];
        let trick = Trick::new(&cards, Seat::new(1), Suit::Hearts, Some(Seat::new(1)));

        let seats: Vec<_> = trick.plays().map(|(s, _)| s).collect();
        assert_eq!(seats, vec![Seat::new(1), Seat::new(2), Seat::new(0)]);
        assert_eq!(trick.winner(), Seat::new(0));
    }
}
