//! Advisor tests: card choice under hidden information, bidding, and error
//! reporting.

use euchre_search::advisor::{Advisor, AdvisorConfig, AdvisorError, Decision};
use euchre_search::cards::{Card, Suit, Value};
use euchre_search::core::{GameRng, Seat};
use euchre_search::euchre::{Deal, DeterminizeError, PartialState, Setup, State};

fn c(suit: Suit, value: Value) -> Card {
    Card::new(suit, value)
}

fn quick() -> AdvisorConfig {
    AdvisorConfig::default()
        .with_determinizations(4)
        .with_playouts(150)
        .with_seed(7)
}

/// Seat 0 leads the first trick of a spades hand it called.
fn opening_lead() -> PartialState {
    let top = c(Suit::Hearts, Value::Nine);
    let setup = Setup::called(Seat::new(3), Seat::new(0), top, Suit::Spades);
    let hand = [
        c(Suit::Spades, Value::Jack),
        c(Suit::Clubs, Value::Jack),
        c(Suit::Spades, Value::Ten),
        c(Suit::Hearts, Value::Ace),
        c(Suit::Diamonds, Value::King),
    ];
    PartialState::new(setup, Seat::new(0), &hand, &[], [])
}

/// A random hand played until seat 0 is to move with `tricks` resolved.
fn seat_zero_endgame(seed: u64, tricks: usize) -> State {
    let mut rng = GameRng::new(seed);
    let deal = Deal::random(&mut rng);
    let setup = Setup::called(Seat::new(1), Seat::new(2), deal.top(), deal.top().suit.left());

    let mut state = State::from_deal(setup, &deal);
    while state.prior.len() < tricks || state.player != Seat::new(0) {
        let moves = state.legal_moves();
        state = state.play(moves[rng.gen_range_usize(0..moves.len())]);
    }
    state
}

// =============================================================================
// Card Play
// =============================================================================

#[test]
fn test_choose_card_returns_held_card() {
    let partial = opening_lead();
    let decision = Advisor::new(quick()).choose_card(&partial).unwrap();

    assert!(partial.hand.contains(&decision.card));
    assert!(decision.votes >= 1 && decision.votes <= 4);
    assert!(decision.value.abs() <= 4.0);
}

#[test]
fn test_choose_card_deterministic() {
    let partial = opening_lead();
    let a = Advisor::new(quick()).choose_card(&partial).unwrap();
    let b = Advisor::new(quick()).choose_card(&partial).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_forced_follow_gets_every_vote() {
    // Seat 2 led the heart ace; seat 0 holds a single heart.
    let top = c(Suit::Spades, Value::Nine);
    let setup = Setup::called(Seat::new(1), Seat::new(2), top, Suit::Clubs);
    let played = [c(Suit::Hearts, Value::Ace), c(Suit::Hearts, Value::Nine)];
    let hand = [
        c(Suit::Hearts, Value::King),
        c(Suit::Clubs, Value::Jack),
        c(Suit::Spades, Value::Jack),
        c(Suit::Diamonds, Value::Ace),
        c(Suit::Diamonds, Value::King),
    ];
    let partial = PartialState::new(setup, Seat::new(0), &hand, &played, []);

    let decision = Advisor::new(quick()).choose_card(&partial).unwrap();
    assert_eq!(decision.card, c(Suit::Hearts, Value::King));
    assert_eq!(decision.votes, 4);
}

#[test]
fn test_choose_card_exact_on_endgame() {
    for seed in 0..4 {
        let truth = seat_zero_endgame(seed, 3);
        let partial = PartialState::observe(&truth);

        let decision = Advisor::new(quick()).choose_card_exact(&partial).unwrap();
        let legal: Vec<Card> = truth.legal_moves().iter().map(|&i| truth.hands[0][i]).collect();
        assert!(legal.contains(&decision.card), "seed {}", seed);
        assert!(decision.votes <= 4);
    }
}

#[test]
fn test_exact_and_sampled_agree_on_forced_card() {
    let truth = seat_zero_endgame(5, 4);
    let partial = PartialState::observe(&truth);
    let only = truth.hands[0][0];

    let advisor = Advisor::new(quick());
    assert_eq!(advisor.choose_card_exact(&partial).unwrap().card, only);
    assert_eq!(advisor.choose_card(&partial).unwrap().card, only);
}

#[test]
fn test_estimate_of_finished_hand_is_its_score() {
    let mut rng = GameRng::new(31);
    let deal = Deal::random(&mut rng);
    let setup = Setup::called(Seat::new(0), Seat::new(3), deal.top(), deal.top().suit.left());
    let mut state = State::from_deal(setup, &deal);
    while !state.is_terminal() {
        state = state.play(state.legal_moves()[0]);
    }

    let value = Advisor::new(quick()).estimate(&PartialState::observe(&state)).unwrap();
    assert_eq!(value, f64::from(state.score()));
}

// =============================================================================
// Bidding
// =============================================================================

#[test]
fn test_orders_up_unbeatable_hand() {
    let top = c(Suit::Spades, Value::Nine);
    let hand = [
        c(Suit::Spades, Value::Jack),
        c(Suit::Clubs, Value::Jack),
        c(Suit::Spades, Value::Ace),
        c(Suit::Spades, Value::King),
        c(Suit::Spades, Value::Queen),
    ];

    let (order, value) = Advisor::new(quick())
        .should_order_up(&hand, top, Seat::new(1))
        .unwrap();
    // The five highest trumps take every trick whatever anyone plays.
    assert!(order);
    assert!((value - 2.0).abs() < 1e-9);
}

#[test]
fn test_choose_trump_respects_threshold() {
    let top = c(Suit::Hearts, Value::Nine);
    let hand = [
        c(Suit::Spades, Value::Jack),
        c(Suit::Clubs, Value::Ace),
        c(Suit::Hearts, Value::Ten),
        c(Suit::Diamonds, Value::Queen),
        c(Suit::Diamonds, Value::Nine),
    ];

    let never = Advisor::new(quick().with_call_threshold(10.0));
    assert_eq!(never.choose_trump(&hand, top, Seat::new(2)).unwrap(), None);

    let always = Advisor::new(quick().with_call_threshold(-10.0));
    let (suit, value) = always
        .choose_trump(&hand, top, Seat::new(2))
        .unwrap()
        .expect("some suit clears the threshold");
    assert_ne!(suit, Suit::Hearts);
    assert!(value.abs() <= 4.0);
}

#[test]
fn test_dealer_order_up_uses_discard() {
    let top = c(Suit::Diamonds, Value::Ace);
    let hand = [
        c(Suit::Diamonds, Value::Jack),
        c(Suit::Hearts, Value::Jack),
        c(Suit::Diamonds, Value::King),
        c(Suit::Clubs, Value::Nine),
        c(Suit::Spades, Value::Ace),
    ];

    let (_, value) = Advisor::new(quick())
        .should_order_up(&hand, top, Seat::new(0))
        .unwrap();
    assert!(value.abs() <= 4.0);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn test_not_our_turn() {
    let mut partial = opening_lead();
    partial.player = Seat::new(1);
    assert_eq!(
        Advisor::new(quick()).choose_card(&partial).unwrap_err(),
        AdvisorError::NotOurTurn(Seat::new(1))
    );
}

#[test]
fn test_zero_determinizations() {
    let advisor = Advisor::new(quick().with_determinizations(0));
    assert_eq!(
        advisor.choose_card(&opening_lead()).unwrap_err(),
        AdvisorError::NoSamples
    );
}

#[test]
fn test_zero_playouts() {
    let advisor = Advisor::new(quick().with_playouts(0));
    assert_eq!(
        advisor.choose_card(&opening_lead()).unwrap_err(),
        AdvisorError::NoPlayouts
    );
    assert_eq!(
        advisor.estimate(&opening_lead()).unwrap_err(),
        AdvisorError::NoPlayouts
    );

    let hand = opening_lead().hand;
    let top = Card::new(Suit::Hearts, Value::Nine);
    assert_eq!(
        advisor.should_order_up(&hand, top, Seat::new(1)).unwrap_err(),
        AdvisorError::NoPlayouts
    );
    // Exhaustive search does not use the playout budget.
    let endgame = PartialState::observe(&seat_zero_endgame(0, 3));
    assert!(advisor.choose_card_exact(&endgame).is_ok());
}

#[test]
fn test_bad_record_surfaces_determinize_error() {
    let mut partial = opening_lead();
    partial.hand.pop();
    let err = Advisor::new(quick()).choose_card(&partial).unwrap_err();
    assert_eq!(
        err,
        AdvisorError::Determinize(DeterminizeError::HandSize {
            seat: Seat::new(0),
            expected: 5,
            found: 4,
        })
    );
    assert_eq!(err.to_string(), "Seat 0 should hold 5 cards but holds 4");
}

#[test]
fn test_decision_serialization() {
    let decision = Decision {
        card: c(Suit::Clubs, Value::Queen),
        votes: 3,
        value: 1.5,
    };
    let json = serde_json::to_string(&decision).unwrap();
    let back: Decision = serde_json::from_str(&json).unwrap();
    assert_eq!(decision, back);
}
