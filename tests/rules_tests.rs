//! Card rule tests: head-to-head comparison, trick winners across every
//! lead and alone combination, and legal plays.

use euchre_search::cards::{Card, Suit, Value, DECK_SIZE};
use euchre_search::core::{Seat, SEAT_COUNT};
use euchre_search::rules::{beats, legal_moves, seat_order, trick_size, trick_winner};
use proptest::prelude::*;

fn c(suit: Suit, value: Value) -> Card {
    Card::new(suit, value)
}

fn alone_options() -> Vec<Option<Seat>> {
    std::iter::once(None).chain(Seat::all().map(Some)).collect()
}

// =============================================================================
// Beats
// =============================================================================

#[test]
fn test_trump_beats_non_trump() {
    assert!(beats(c(Suit::Hearts, Value::Ten), c(Suit::Clubs, Value::Ace), Suit::Hearts));
}

#[test]
fn test_non_trump_leader_loses_to_trump() {
    assert!(!beats(c(Suit::Spades, Value::Queen), c(Suit::Clubs, Value::Ace), Suit::Clubs));
}

#[test]
fn test_left_bower_loses_to_right_bower() {
    assert!(!beats(c(Suit::Hearts, Value::Jack), c(Suit::Diamonds, Value::Jack), Suit::Diamonds));
    assert!(beats(c(Suit::Diamonds, Value::Jack), c(Suit::Hearts, Value::Jack), Suit::Diamonds));
}

#[test]
fn test_left_bower_beats_trump_ace() {
    for trump in Suit::ALL {
        let left = c(trump.left(), Value::Jack);
        let ace = c(trump, Value::Ace);
        assert!(beats(left, ace, trump));
        assert!(!beats(ace, left, trump));
    }
}

#[test]
fn test_failing_to_follow_loses() {
    // Off-suit, non-trump follower never wins, whatever its value.
    let trump = Suit::Spades;
    for value in Value::ALL {
        assert!(beats(c(Suit::Hearts, Value::Nine), c(Suit::Diamonds, value), trump));
    }
}

// =============================================================================
// Trick Winner
// =============================================================================

#[test]
fn test_only_trump_wins_regardless_of_lead() {
    let played = [
        c(Suit::Diamonds, Value::Ace),
        c(Suit::Hearts, Value::Queen),
        c(Suit::Diamonds, Value::Ten),
        c(Suit::Diamonds, Value::Queen),
    ];
    assert_eq!(trick_winner(&played, Suit::Hearts, Seat::new(2), None), Seat::new(3));
}

#[test]
fn test_trick_winner_every_lead_and_alone_seat() {
    let trump = Suit::Hearts;
    let right = c(Suit::Hearts, Value::Jack);
    let fillers = [
        c(Suit::Clubs, Value::Nine),
        c(Suit::Clubs, Value::Ten),
        c(Suit::Clubs, Value::Queen),
    ];

    for led in Seat::all() {
        for alone in alone_options() {
            let order: Vec<Seat> = seat_order(led, alone).collect();
            let size = trick_size(alone);
            assert_eq!(order.len(), size);
            if let Some(player) = alone {
                assert!(!order.contains(&player.partner()));
            }

            for winner_pos in 0..size {
                let mut fill = fillers.iter().copied();
                let played: Vec<Card> = (0..size)
                    .map(|pos| {
                        if pos == winner_pos {
                            right
                        } else {
                            fill.next().unwrap()
                        }
                    })
                    .collect();

                assert_eq!(
                    trick_winner(&played, trump, led, alone),
                    order[winner_pos],
                    "led {:?} alone {:?} winner at {}",
                    led,
                    alone,
                    winner_pos
                );
            }
        }
    }
}

#[test]
fn test_alone_skips_partner_between_leader_and_winner() {
    // Seat 1 alone, seat 3 sits out. Seat 2 leads; seat 0 then seat 1 follow.
    let played = [
        c(Suit::Spades, Value::Nine),
        c(Suit::Spades, Value::Ten),
        c(Suit::Spades, Value::Ace),
    ];
    assert_eq!(
        trick_winner(&played, Suit::Hearts, Seat::new(2), Some(Seat::new(1))),
        Seat::new(1)
    );
}

// =============================================================================
// Legal Moves
// =============================================================================

#[test]
fn test_cannot_follow_spades_all_legal() {
    let hand = [
        c(Suit::Hearts, Value::Ten),
        c(Suit::Hearts, Value::Ace),
        c(Suit::Clubs, Value::Jack),
        c(Suit::Clubs, Value::King),
        c(Suit::Diamonds, Value::Jack),
    ];
    let moves = legal_moves(&hand, &[c(Suit::Spades, Value::Ten)], Suit::Hearts);
    assert_eq!(moves.as_slice(), &[0, 1, 2, 3, 4]);
}

#[test]
fn test_must_follow_trump_with_left_bower() {
    let hand = [
        c(Suit::Clubs, Value::Nine),
        c(Suit::Diamonds, Value::Jack),
        c(Suit::Spades, Value::King),
    ];
    // Diamonds jack is trump when hearts are trump.
    let moves = legal_moves(&hand, &[c(Suit::Hearts, Value::Nine)], Suit::Hearts);
    assert_eq!(moves.as_slice(), &[1]);
}

// =============================================================================
// Properties
// =============================================================================

fn any_suit() -> impl Strategy<Value = Suit> {
    prop::sample::select(Suit::ALL.to_vec())
}

fn any_seat() -> impl Strategy<Value = Seat> {
    (0..SEAT_COUNT as u8).prop_map(Seat::new)
}

fn distinct_cards(n: usize) -> impl Strategy<Value = Vec<Card>> {
    Just((0..DECK_SIZE).map(Card::from_index).collect::<Vec<_>>())
        .prop_shuffle()
        .prop_map(move |deck| deck[..n].to_vec())
}

proptest! {
    #[test]
    fn prop_exactly_one_of_two_cards_wins(
        cards in distinct_cards(2),
        trump in any_suit(),
    ) {
        // Whoever leads, the two orders never both win or both lose unless
        // the cards cannot be compared (different plain suits).
        let (a, b) = (cards[0], cards[1]);
        let comparable = a.adj_suit(trump) == b.adj_suit(trump)
            || a.is_trump(trump)
            || b.is_trump(trump);
        if comparable {
            prop_assert_ne!(beats(a, b, trump), beats(b, a, trump));
        } else {
            prop_assert!(beats(a, b, trump) && beats(b, a, trump));
        }
    }

    #[test]
    fn prop_trick_winner_is_a_playing_seat(
        cards in distinct_cards(4),
        trump in any_suit(),
        led in any_seat(),
        alone in prop::option::of(any_seat()),
    ) {
        let played = &cards[..trick_size(alone)];
        let winner = trick_winner(played, trump, led, alone);
        prop_assert!(winner.index() < SEAT_COUNT);
        prop_assert!(seat_order(led, alone).any(|s| s == winner));
    }

    #[test]
    fn prop_legal_moves_non_empty(
        cards in distinct_cards(6),
        hand_len in 1usize..=5,
        trump in any_suit(),
    ) {
        let hand = &cards[..hand_len];
        let led = [cards[5]];
        let moves = legal_moves(hand, &led, trump);
        prop_assert!(!moves.is_empty());
        prop_assert!(moves.iter().all(|&i| i < hand.len()));

        let following = hand.iter().any(|h| h.adj_suit(trump) == led[0].adj_suit(trump));
        if following {
            prop_assert!(moves.iter().all(|&i| hand[i].adj_suit(trump) == led[0].adj_suit(trump)));
        } else {
            prop_assert_eq!(moves.len(), hand.len());
        }
    }
}
