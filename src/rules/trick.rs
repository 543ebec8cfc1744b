//! Trick-level rules: card comparison, trick winner, legal plays.
//!
//! All functions are pure and take the trump suit explicitly. Malformed input
//! (duplicate cards, more cards than seats) is a caller bug.

use smallvec::SmallVec;

use crate::cards::{Card, Suit};
use crate::core::{Seat, SEAT_COUNT};

/// Indices into a hand.
pub type MoveList = SmallVec<[usize; 5]>;

/// Whether `a`, played earlier in the trick, beats `b` played after it.
///
/// A lone trump beats any non-trump. Among trumps the right bower is
/// highest, then the left bower, then value. Non-trumps of the same natural
/// suit compare by value; a non-trump that fails to follow `a`'s suit loses.
///
/// ```
/// use euchre_search::cards::{Card, Suit, Value};
/// use euchre_search::rules::beats;
///
/// let ten_hearts = Card::new(Suit::Hearts, Value::Ten);
/// let ace_clubs = Card::new(Suit::Clubs, Value::Ace);
/// assert!(beats(ten_hearts, ace_clubs, Suit::Hearts));
/// ```
#[must_use]
pub fn beats(a: Card, b: Card, trump: Suit) -> bool {
    match (a.is_trump(trump), b.is_trump(trump)) {
        (true, false) => true,
        (false, true) => false,
        (true, true) => {
            if a.is_right_bower(trump) {
                true
            } else if b.is_right_bower(trump) {
                false
            } else if a.is_left_bower(trump) {
                true
            } else if b.is_left_bower(trump) {
                false
            } else {
                a.value > b.value
            }
        }
        (false, false) => a.suit != b.suit || a.value > b.value,
    }
}

/// Rank of a card within its adjusted suit: value order, with the right
/// bower above the left bower above the ace for trump.
///
/// Two cards of the same adjusted suit compare the way [`beats`] does.
#[must_use]
pub fn card_strength(card: Card, trump: Suit) -> u8 {
    if card.is_right_bower(trump) {
        7
    } else if card.is_left_bower(trump) {
        6
    } else {
        card.value.index() as u8
    }
}

/// Seats that play in a trick, in order, starting with `led`.
///
/// When a player goes alone their partner sits out and is skipped.
pub fn seat_order(led: Seat, alone: Option<Seat>) -> impl Iterator<Item = Seat> {
    let sitting_out = alone.map(Seat::partner);
    (0..SEAT_COUNT as u8)
        .map(move |offset| Seat::new((led.index() as u8 + offset) % SEAT_COUNT as u8))
        .filter(move |&seat| Some(seat) != sitting_out)
}

/// Seat playing after `seat` within a trick.
#[inline]
#[must_use]
pub fn next_to_play(seat: Seat, alone: Option<Seat>) -> Seat {
    let next = seat.next();
    if alone.map(Seat::partner) == Some(next) {
        next.next()
    } else {
        next
    }
}

/// Number of cards in a complete trick.
#[inline]
#[must_use]
pub fn trick_size(alone: Option<Seat>) -> usize {
    if alone.is_some() {
        SEAT_COUNT - 1
    } else {
        SEAT_COUNT
    }
}

/// Seat that won (or is currently winning) a trick.
///
/// `played` is in play order; position `i` belongs to the `i`-th seat of
/// [`seat_order`]. An empty trick is "won" by the leader.
#[must_use]
pub fn trick_winner(played: &[Card], trump: Suit, led: Seat, alone: Option<Seat>) -> Seat {
    let order: SmallVec<[Seat; SEAT_COUNT]> = seat_order(led, alone).collect();
    assert!(
        played.len() <= order.len(),
        "{} cards played in a trick of {} seats",
        played.len(),
        order.len()
    );

    let mut best = 0;
    for (i, &card) in played.iter().enumerate().skip(1) {
        if !beats(played[best], card, trump) {
            best = i;
        }
    }

    order[best]
}

/// Indices of `hand` that may legally be played.
///
/// A player must follow the led card's adjusted suit when able; otherwise,
/// or when leading, every card is legal. Non-empty whenever `hand` is.
#[must_use]
pub fn legal_moves(hand: &[Card], played: &[Card], trump: Suit) -> MoveList {
    if let Some(lead) = played.first() {
        let led_suit = lead.adj_suit(trump);
        let following: MoveList = hand
            .iter()
            .enumerate()
            .filter(|(_, card)| card.adj_suit(trump) == led_suit)
            .map(|(i, _)| i)
            .collect();

        if !following.is_empty() {
            return following;
        }
    }

    (0..hand.len()).collect()
}
