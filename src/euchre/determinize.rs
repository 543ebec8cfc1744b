//! Sampling full deals consistent with what seat 0 has seen.
//!
//! ## Accounting
//!
//! Every card seat 0 can place with certainty is removed from the pool: its
//! own hand, everything played, the turned card when it stayed on the kitty,
//! the discard when seat 0 dealt, and the turned card in another dealer's
//! hand until it is played. What remains is split among seats 1 to 3 and the
//! kitty in the sizes that trick progress implies.
//!
//! ## Voids
//!
//! A seat that failed to follow suit cannot hold that suit. With void
//! inference on, cards are dealt one at a time to a group weighted by its
//! remaining need, rejecting any choice after which the rest can no longer be
//! placed. Without voids this is the same as shuffling and slicing.

use log::debug;

use super::error::{DeterminizeError, Result};
use super::setup::{current_leader, Trick};
use super::state::{Hand, PartialState, Pile, State, HAND_SIZE, TRICKS_PER_HAND};
use crate::cards::{Card, CardSet, Suit};
use crate::core::{GameRng, Seat, SEAT_COUNT};
use crate::rules::{seat_order, trick_size};

/// Hidden groups: seats 1, 2, 3 and the kitty.
pub const GROUPS: usize = 4;

/// Group index of the kitty.
pub const KITTY: usize = 3;

const KITTY_SIZE: usize = 4;

/// Where the hidden cards of a partial state must go.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HiddenInfo {
    /// Cards seat 0 cannot place.
    pub pool: CardSet,

    /// Unknown cards held by seats 1, 2, 3 and the kitty.
    pub needs: [usize; GROUPS],

    /// `voids[seat][suit]`: the seat showed out of that adjusted suit.
    pub voids: [[bool; 4]; SEAT_COUNT],

    /// Dealer other than seat 0 still holding the turned card.
    top_holder: Option<Seat>,

    /// Kitty card known to seat 0.
    kitty_known: Option<Card>,
}

impl HiddenInfo {
    /// Whether any seat has shown out of a suit.
    #[must_use]
    pub fn has_voids(&self) -> bool {
        self.voids.iter().flatten().any(|&v| v)
    }

    /// Bitmask of groups that may receive `card`.
    fn accepts(&self, card: Card, trump: Suit) -> u8 {
        let suit = card.adj_suit(trump).index();
        let mut mask = 1 << KITTY;
        for group in 0..KITTY {
            if !self.voids[group + 1][suit] {
                mask |= 1 << group;
            }
        }
        mask
    }
}

/// Completes partial states into full ones.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Determinizer {
    infer_voids: bool,
}

impl Default for Determinizer {
    fn default() -> Self {
        Self { infer_voids: true }
    }
}

impl Determinizer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable void inference.
    #[must_use]
    pub fn with_void_inference(mut self, enabled: bool) -> Self {
        self.infer_voids = enabled;
        self
    }

    /// Validate `partial` and work out which cards are hidden and where.
    pub fn account(&self, partial: &PartialState) -> Result<HiddenInfo> {
        let setup = &partial.setup;
        let alone = setup.alone;
        let full_trick = trick_size(alone);

        if partial.prior.len() > TRICKS_PER_HAND {
            return Err(DeterminizeError::TooManyTricks(partial.prior.len()));
        }
        let mut previous = None;
        for (index, trick) in partial.prior.iter().enumerate() {
            if trick.cards.len() != full_trick {
                return Err(DeterminizeError::MalformedTrick {
                    index,
                    len: trick.cards.len(),
                    expected: full_trick,
                });
            }
            if trick.trump != setup.trump {
                return Err(DeterminizeError::TrickTrump {
                    index,
                    expected: setup.trump,
                    found: trick.trump,
                });
            }
            if trick.alone != alone {
                return Err(DeterminizeError::TrickAlone { index });
            }
            let expected = current_leader(setup, previous);
            if trick.led != expected {
                return Err(DeterminizeError::TrickLeader {
                    index,
                    expected,
                    found: trick.led,
                });
            }
            previous = Some(trick);
        }
        let max_played = if partial.prior.len() == TRICKS_PER_HAND {
            0
        } else {
            full_trick - 1
        };
        if partial.played.len() > max_played {
            return Err(DeterminizeError::TrickOverflow {
                len: partial.played.len(),
                max: max_played,
            });
        }

        let leader = partial.leader();
        let expected = seat_order(leader, alone)
            .nth(partial.played.len())
            .unwrap_or(leader);
        if partial.player != expected {
            return Err(DeterminizeError::TurnOrder {
                expected,
                found: partial.player,
            });
        }

        // Who played what, in every trick including the current one.
        let current = Trick::new(&partial.played, leader, setup.trump, alone);
        let tricks = || partial.prior.iter().chain(std::iter::once(&current));

        let mut held = [HAND_SIZE; SEAT_COUNT];
        let mut visible = CardSet::empty();
        let mut played_by = [None; crate::cards::DECK_SIZE];
        for trick in tricks() {
            for (seat, card) in trick.plays() {
                held[seat.index()] -= 1;
                played_by[card.index()] = Some(seat);
                if !visible.insert(card) {
                    return Err(DeterminizeError::DuplicateCard(card));
                }
            }
        }

        if partial.hand.len() != held[0] {
            return Err(DeterminizeError::HandSize {
                seat: Seat::new(0),
                expected: held[0],
                found: partial.hand.len(),
            });
        }
        for &card in &partial.hand {
            if !visible.insert(card) {
                return Err(DeterminizeError::DuplicateCard(card));
            }
        }

        let top = setup.top;
        let mut top_holder = None;
        let kitty_known = if !setup.picked_up {
            if visible.contains(top) {
                return Err(DeterminizeError::MisplacedTopCard(top));
            }
            Some(top)
        } else if setup.dealer == Seat::new(0) {
            let discard = setup.discard.ok_or(DeterminizeError::MissingDiscard)?;
            if visible.contains(discard) {
                return Err(DeterminizeError::DuplicateCard(discard));
            }
            if discard != top {
                let with_seat_zero = partial.hand.contains(&top)
                    || played_by[top.index()] == Some(Seat::new(0));
                if !with_seat_zero {
                    return Err(DeterminizeError::MisplacedTopCard(top));
                }
            }
            Some(discard)
        } else {
            match played_by[top.index()] {
                Some(seat) if seat == setup.dealer => {}
                Some(_) => return Err(DeterminizeError::MisplacedTopCard(top)),
                None if visible.contains(top) || held[setup.dealer.index()] == 0 => {
                    return Err(DeterminizeError::MisplacedTopCard(top));
                }
                None => top_holder = Some(setup.dealer),
            }
            None
        };

        let mut known = visible;
        known.extend(kitty_known);
        known.extend(top_holder.map(|_| top));
        let pool = CardSet::full().difference(known);

        let mut needs = [0; GROUPS];
        for group in 0..KITTY {
            let seat = Seat::new(group as u8 + 1);
            needs[group] = held[seat.index()] - usize::from(top_holder == Some(seat));
        }
        needs[KITTY] = KITTY_SIZE - usize::from(kitty_known.is_some());

        let required: usize = needs.iter().sum();
        if pool.len() != required {
            return Err(DeterminizeError::PoolMismatch {
                pool: pool.len(),
                required,
            });
        }

        let mut voids = [[false; 4]; SEAT_COUNT];
        for trick in tricks() {
            let Some(&lead) = trick.cards.first() else {
                continue;
            };
            let led_suit = lead.adj_suit(setup.trump);
            for (seat, card) in trick.plays().skip(1) {
                if seat != Seat::new(0) && card.adj_suit(setup.trump) != led_suit {
                    voids[seat.index()][led_suit.index()] = true;
                }
            }
        }

        Ok(HiddenInfo {
            pool,
            needs,
            voids,
            top_holder,
            kitty_known,
        })
    }

    /// Sample one full state consistent with `partial`.
    pub fn determinize(&self, partial: &PartialState, rng: &mut GameRng) -> Result<State> {
        let info = self.account(partial)?;
        let trump = partial.setup.trump;

        let mut cards: Vec<Card> = info.pool.iter().collect();
        rng.shuffle(&mut cards);

        let groups = if self.infer_voids && info.has_voids() {
            let masks: Vec<u8> = cards.iter().map(|&c| info.accepts(c, trump)).collect();
            if !is_feasible(&masks, info.needs) {
                return Err(DeterminizeError::UnsatisfiableVoids);
            }
            deal_with_voids(&cards, &masks, info.needs, rng)
        } else {
            slice(&cards, info.needs)
        };

        debug!(
            "determinized {} hidden cards into {:?} (voids: {})",
            cards.len(),
            info.needs,
            info.has_voids()
        );

        let [one, two, three, rest] = groups;
        let mut hands: [Hand; SEAT_COUNT] = [
            partial.hand.clone(),
            Hand::from_vec(one),
            Hand::from_vec(two),
            Hand::from_vec(three),
        ];
        if let Some(dealer) = info.top_holder {
            hands[dealer.index()].push(partial.setup.top);
        }

        let mut kitty = Pile::new();
        kitty.extend(info.kitty_known);
        kitty.extend(rest);

        let state = State::new(
            partial.setup,
            partial.player,
            hands,
            kitty,
            partial.played.clone(),
            partial.prior.clone(),
        );

        state.assert_consistent();
        for seat in 1..SEAT_COUNT {
            let expected = info.needs[seat - 1] + usize::from(info.top_holder == Some(Seat::new(seat as u8)));
            assert_eq!(state.hands[seat].len(), expected, "seat {} dealt the wrong count", seat);
        }

        Ok(state)
    }
}

/// Cut a shuffled pool into runs of the given sizes.
fn slice(cards: &[Card], needs: [usize; GROUPS]) -> [Vec<Card>; GROUPS] {
    let mut start = 0;
    std::array::from_fn(|group| {
        let run = cards[start..start + needs[group]].to_vec();
        start += needs[group];
        run
    })
}

/// Hall's condition: every set of groups can be filled from the cards any of
/// them accepts.
fn is_feasible(masks: &[u8], needs: [usize; GROUPS]) -> bool {
    (1u8..1 << GROUPS).all(|subset| {
        let demand: usize = (0..GROUPS)
            .filter(|g| subset & (1 << g) != 0)
            .map(|g| needs[g])
            .sum();
        let supply = masks.iter().filter(|&&m| m & subset != 0).count();
        demand <= supply
    })
}

/// Assign cards one at a time, keeping only choices that leave a feasible
/// remainder. Requires `is_feasible(masks, needs)`.
fn deal_with_voids(
    cards: &[Card],
    masks: &[u8],
    mut needs: [usize; GROUPS],
    rng: &mut GameRng,
) -> [Vec<Card>; GROUPS] {
    let mut groups: [Vec<Card>; GROUPS] = Default::default();

    for (i, &card) in cards.iter().enumerate() {
        let mut weights = [0usize; GROUPS];
        for group in 0..GROUPS {
            if masks[i] & (1 << group) != 0 {
                weights[group] = needs[group];
            }
        }

        loop {
            let Some(group) = rng.choose_weighted(&weights) else {
                // Unreachable while the remainder stays feasible.
                panic!("no group can take {}", card);
            };

            needs[group] -= 1;
            if is_feasible(&masks[i + 1..], needs) {
                groups[group].push(card);
                break;
            }
            needs[group] += 1;
            weights[group] = 0;
        }
    }

    groups
}
