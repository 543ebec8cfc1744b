use thiserror::Error;

use crate::cards::{Card, Suit};
use crate::core::Seat;

/// Why a partial state could not be completed into a full deal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeterminizeError {
    #[error("card {0} is visible in more than one place")]
    DuplicateCard(Card),
    #[error("trick {index} holds {len} cards, expected {expected}")]
    MalformedTrick {
        index: usize,
        len: usize,
        expected: usize,
    },
    #[error("trick {index} was recorded under {found:?} but trump is {expected:?}")]
    TrickTrump {
        index: usize,
        expected: Suit,
        found: Suit,
    },
    #[error("trick {index} disagrees with the setup about who is playing alone")]
    TrickAlone { index: usize },
    #[error("trick {index} was led by {found} but {expected} should have led")]
    TrickLeader {
        index: usize,
        expected: Seat,
        found: Seat,
    },
    #[error("{len} cards in the current trick exceeds the maximum of {max}")]
    TrickOverflow { len: usize, max: usize },
    #[error("{0} tricks resolved, a hand has at most 5")]
    TooManyTricks(usize),
    #[error("expected {expected} to play but found {found}")]
    TurnOrder { expected: Seat, found: Seat },
    #[error("{seat} should hold {expected} cards but holds {found}")]
    HandSize {
        seat: Seat,
        expected: usize,
        found: usize,
    },
    #[error("seat 0 dealt and picked up but no discard was given")]
    MissingDiscard,
    #[error("turned card {0} was seen somewhere it cannot be")]
    MisplacedTopCard(Card),
    #[error("{pool} unseen cards cannot fill {required} hidden slots")]
    PoolMismatch { pool: usize, required: usize },
    #[error("no assignment of unseen cards satisfies the known voids")]
    UnsatisfiableVoids,
}

pub type Result<T> = std::result::Result<T, DeterminizeError>;
