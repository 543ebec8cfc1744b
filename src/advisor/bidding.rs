//! Bidding: ordering up the turned card, naming trump, and the dealer's
//! discard.

use std::iter;

use log::debug;

use super::error::{AdvisorError, Result};
use super::play::Advisor;
use crate::cards::{Card, Suit, Value};
use crate::core::Seat;
use crate::euchre::{Hand, PartialState, Setup, HAND_SIZE};
use crate::rules::card_strength;

impl Advisor {
    /// Whether seat 0 should order up `top`, with the estimated points.
    ///
    /// When seat 0 deals, the estimate assumes it picks up `top` and
    /// discards per [`choose_discard`].
    pub fn should_order_up(&self, hand: &[Card], top: Card, dealer: Seat) -> Result<(bool, f64)> {
        check_hand(hand)?;

        let mut held = Hand::from_slice(hand);
        let setup = if dealer == Seat::new(0) {
            let i = choose_discard(hand, top);
            let discard = held[i];
            held[i] = top;
            Setup::ordered_up(dealer, Seat::new(0), top, Some(discard))
        } else {
            Setup::ordered_up(dealer, Seat::new(0), top, None)
        };

        let partial = PartialState::new(setup, setup.first_leader(), &held, &[], iter::empty());
        let value = self.estimate(&partial)?;
        debug!("order up {}: {:.3}", top, value);

        Ok((value > self.config().call_threshold, value))
    }

    /// Best suit to name after `top` was turned down, if it clears the
    /// call threshold. The turned card's suit cannot be named.
    pub fn choose_trump(&self, hand: &[Card], top: Card, dealer: Seat) -> Result<Option<(Suit, f64)>> {
        check_hand(hand)?;

        let mut best: Option<(Suit, f64)> = None;
        for suit in Suit::ALL.into_iter().filter(|&s| s != top.suit) {
            let setup = Setup::called(dealer, Seat::new(0), top, suit);
            let partial = PartialState::new(setup, setup.first_leader(), hand, &[], iter::empty());
            let value = self.estimate(&partial)?;
            debug!("call {:?}: {:.3}", suit, value);

            if best.map_or(true, |(_, v)| value > v) {
                best = Some((suit, value));
            }
        }

        Ok(best.filter(|&(_, value)| value > self.config().call_threshold))
    }
}

/// Index of the card the dealer should discard after picking up `top`.
///
/// Prefers to void a suit: a lone off-suit card other than an ace goes
/// first, lowest value first. Otherwise the weakest off-suit card, and only
/// then the weakest trump.
#[must_use]
pub fn choose_discard(hand: &[Card], top: Card) -> usize {
    let trump = top.suit;
    let in_suit = |suit: Suit| hand.iter().filter(|c| c.adj_suit(trump) == suit).count();

    (0..hand.len())
        .min_by_key(|&i| {
            let card = hand[i];
            let off_suit = !card.is_trump(trump);
            let singleton =
                off_suit && card.value != Value::Ace && in_suit(card.adj_suit(trump)) == 1;
            (!singleton, !off_suit, card_strength(card, trump))
        })
        .unwrap_or(0)
}

fn check_hand(hand: &[Card]) -> Result<()> {
    if hand.len() != HAND_SIZE {
        return Err(AdvisorError::HandSize {
            expected: HAND_SIZE,
            found: hand.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(suit: Suit, value: Value) -> Card {
        Card::new(suit, value)
    }

    #[test]
    fn test_discard_voids_a_suit() {
        let top = c(Suit::Spades, Value::Ten);
        let hand = [
            c(Suit::Spades, Value::Ace),
            c(Suit::Hearts, Value::Nine),
            c(Suit::Hearts, Value::King),
            c(Suit::Diamonds, Value::Queen),
            c(Suit::Clubs, Value::Jack),
        ];
        // Clubs jack is the left bower; the lone diamond goes.
        assert_eq!(choose_discard(&hand, top), 3);
    }

    #[test]
    fn test_discard_keeps_lone_ace() {
        let top = c(Suit::Hearts, Value::Nine);
        let hand = [
            c(Suit::Hearts, Value::Ace),
            c(Suit::Clubs, Value::Ace),
            c(Suit::Spades, Value::Ten),
            c(Suit::Spades, Value::King),
            c(Suit::Diamonds, Value::Jack),
        ];
        // No singleton worth dropping: the lowest off-suit card goes.
        assert_eq!(choose_discard(&hand, top), 2);
    }

    #[test]
    fn test_discard_all_trump() {
        let top = c(Suit::Diamonds, Value::Nine);
        let hand = [
            c(Suit::Diamonds, Value::Jack),
            c(Suit::Hearts, Value::Jack),
            c(Suit::Diamonds, Value::Ace),
            c(Suit::Diamonds, Value::Ten),
            c(Suit::Diamonds, Value::King),
        ];
        assert_eq!(choose_discard(&hand, top), 3);
    }

    #[test]
    fn test_bidding_rejects_short_hand() {
        let advisor = Advisor::new(Default::default());
        let top = c(Suit::Diamonds, Value::Nine);
        let err = advisor
            .choose_trump(&[c(Suit::Hearts, Value::Ace)], top, Seat::new(1))
            .unwrap_err();
        assert_eq!(err, AdvisorError::HandSize { expected: 5, found: 1 });
    }
}
