//! Fully and partially observed euchre states.
//!
//! ## State
//!
//! A determinized hand in progress: every hand and the kitty are known.
//! Prior tricks live in an `im::Vector` so that the many successor states
//! created during search share their history instead of copying it.
//!
//! ## PartialState
//!
//! What seat 0 can actually see: its own hand, the current trick, the
//! resolved tricks, and the public setup. Turned into a `State` by the
//! [`Determinizer`](super::Determinizer).

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::setup::{current_leader, Setup, Trick};
use crate::cards::{Card, CardSet, DECK_SIZE};
use crate::core::{GameRng, Seat, SEAT_COUNT};
use crate::rules::{legal_moves, next_to_play, trick_size, MoveList};

/// Cards dealt to each player.
pub const HAND_SIZE: usize = 5;

/// Tricks in a hand.
pub const TRICKS_PER_HAND: usize = 5;

/// Cards held by one player.
pub type Hand = SmallVec<[Card; HAND_SIZE]>;

/// Cards of the trick in progress, or of the kitty.
pub type Pile = SmallVec<[Card; 4]>;

/// A random deal: four hands of five and a kitty whose first card is turned.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Deal {
    pub hands: [Hand; SEAT_COUNT],
    pub kitty: Pile,
}

impl Deal {
    /// Shuffle the deck and deal it.
    pub fn random(rng: &mut GameRng) -> Self {
        let mut deck = Card::deck();
        rng.shuffle(&mut deck);

        let hands = std::array::from_fn(|seat| {
            Hand::from_slice(&deck[seat * HAND_SIZE..(seat + 1) * HAND_SIZE])
        });
        let kitty = Pile::from_slice(&deck[SEAT_COUNT * HAND_SIZE..]);

        Self { hands, kitty }
    }

    /// The turned card.
    #[must_use]
    pub fn top(&self) -> Card {
        self.kitty[0]
    }
}

/// A fully observed hand in progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct State {
    pub setup: Setup,

    /// Seat to play.
    pub player: Seat,

    pub hands: [Hand; SEAT_COUNT],

    /// Face-down cards, including the discard when the dealer picked up.
    pub kitty: Pile,

    /// Cards of the trick in progress.
    pub played: Pile,

    /// Resolved tricks, oldest first.
    pub prior: Vector<Trick>,

    /// Card whose play produced this state.
    pub last_move: Option<Card>,
}

impl State {
    pub fn new(
        setup: Setup,
        player: Seat,
        hands: [Hand; SEAT_COUNT],
        kitty: Pile,
        played: Pile,
        prior: Vector<Trick>,
    ) -> Self {
        Self {
            setup,
            player,
            hands,
            kitty,
            played,
            prior,
            last_move: None,
        }
    }

    /// Starting state of a hand, applying the dealer's pickup and discard.
    ///
    /// Panics if the setup does not match the deal.
    #[must_use]
    pub fn from_deal(setup: Setup, deal: &Deal) -> Self {
        assert_eq!(deal.top(), setup.top, "setup top card does not match the deal");

        let mut hands = deal.hands.clone();
        let mut kitty = deal.kitty.clone();

        if setup.picked_up {
            let discard = match setup.discard {
                Some(card) => card,
                None => panic!("dealer picked up {} without a discard", setup.top),
            };

            if discard != setup.top {
                let hand = &mut hands[setup.dealer.index()];
                let pos = hand.iter().position(|&c| c == discard);
                let Some(pos) = pos else {
                    panic!("discard {} is not in the dealer's hand", discard);
                };
                hand[pos] = setup.top;
                kitty[0] = discard;
            }
        }

        Self::new(
            setup,
            setup.first_leader(),
            hands,
            kitty,
            Pile::new(),
            Vector::new(),
        )
    }

    /// Seat that led the trick in progress.
    #[must_use]
    pub fn leader(&self) -> Seat {
        current_leader(&self.setup, self.prior.last())
    }

    /// Hand is over: five tricks resolved and none in progress.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.played.is_empty() && self.prior.len() == TRICKS_PER_HAND
    }

    /// The player to move's hand.
    #[must_use]
    pub fn current_hand(&self) -> &[Card] {
        &self.hands[self.player.index()]
    }

    /// Legal indices into the current player's hand.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList {
        legal_moves(self.current_hand(), &self.played, self.setup.trump)
    }

    /// State after the current player plays the card at `index`.
    ///
    /// Closes the trick once every active seat has played; the winner then
    /// leads.
    #[must_use]
    pub fn play(&self, index: usize) -> State {
        let hand = self.current_hand();
        assert!(
            index < hand.len(),
            "{} has no card at index {}",
            self.player,
            index
        );

        let mut next = self.clone();
        let card = next.hands[self.player.index()].swap_remove(index);
        next.played.push(card);
        next.last_move = Some(card);

        let alone = self.setup.alone;
        if next.played.len() == trick_size(alone) {
            let trick = Trick::new(&next.played, self.leader(), self.setup.trump, alone);
            next.player = trick.winner();
            next.played.clear();
            next.prior.push_back(trick);
        } else {
            next.player = next_to_play(self.player, alone);
        }

        next
    }

    /// `(card, successor)` for every legal play, in hand order.
    #[must_use]
    pub fn successors(&self) -> Vec<(Card, State)> {
        let hand = self.current_hand();
        self.legal_moves()
            .into_iter()
            .map(|i| (hand[i], self.play(i)))
            .collect()
    }

    /// Tricks taken by each team so far.
    #[must_use]
    pub fn tricks_won(&self) -> [u8; 2] {
        let mut won = [0u8; 2];
        for trick in &self.prior {
            won[trick.winner().team() as usize] += 1;
        }
        won
    }

    /// Points for the hand from team 0's perspective.
    ///
    /// Makers taking three or four tricks score 1, all five score 2, or 4
    /// when played alone. Makers held to fewer than three are euchred and
    /// the defenders score 2.
    #[must_use]
    pub fn score(&self) -> i32 {
        let makers = self.setup.makers();
        let maker_tricks = self.tricks_won()[makers as usize] as usize;

        let (winners, points) = if maker_tricks == TRICKS_PER_HAND {
            (makers, if self.setup.alone.is_some() { 4 } else { 2 })
        } else if maker_tricks >= 3 {
            (makers, 1)
        } else {
            (1 - makers, 2)
        };

        if winners == 0 {
            points
        } else {
            -points
        }
    }

    /// Every card in the state, or the first card found twice.
    pub fn cards(&self) -> Result<CardSet, Card> {
        let mut seen = CardSet::empty();
        let located = self
            .hands
            .iter()
            .flatten()
            .chain(self.kitty.iter())
            .chain(self.played.iter())
            .chain(self.prior.iter().flat_map(|t| t.cards.iter()));

        for &card in located {
            if !seen.insert(card) {
                return Err(card);
            }
        }
        Ok(seen)
    }

    /// Panics unless all 24 cards are present exactly once.
    pub fn assert_consistent(&self) {
        match self.cards() {
            Ok(set) => assert_eq!(set.len(), DECK_SIZE, "state holds {} cards", set.len()),
            Err(card) => panic!("card {} appears twice", card),
        }
    }
}

/// Seat 0's view of a hand in progress.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialState {
    pub setup: Setup,

    /// Seat to play.
    pub player: Seat,

    /// Seat 0's cards.
    pub hand: Hand,

    /// Cards of the trick in progress.
    pub played: Pile,

    /// Resolved tricks, oldest first.
    pub prior: Vector<Trick>,
}

impl PartialState {
    pub fn new(
        setup: Setup,
        player: Seat,
        hand: &[Card],
        played: &[Card],
        prior: impl IntoIterator<Item = Trick>,
    ) -> Self {
        Self {
            setup,
            player,
            hand: Hand::from_slice(hand),
            played: Pile::from_slice(played),
            prior: prior.into_iter().collect(),
        }
    }

    /// What seat 0 sees of a full state. The discard stays hidden unless
    /// seat 0 dealt.
    #[must_use]
    pub fn observe(state: &State) -> Self {
        let mut setup = state.setup;
        if setup.dealer != Seat::new(0) {
            setup.discard = None;
        }

        Self {
            setup,
            player: state.player,
            hand: state.hands[0].clone(),
            played: state.played.clone(),
            prior: state.prior.clone(),
        }
    }

    /// Seat that led the trick in progress.
    #[must_use]
    pub fn leader(&self) -> Seat {
        current_leader(&self.setup, self.prior.last())
    }
}
