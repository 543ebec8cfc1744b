use thiserror::Error;

use crate::core::Seat;
use crate::euchre::DeterminizeError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AdvisorError {
    #[error("{0}")]
    Determinize(#[from] DeterminizeError),
    #[error("it is {0}'s turn, not seat 0's")]
    NotOurTurn(Seat),
    #[error("seat 0 has no card to play")]
    NoLegalMoves,
    #[error("at least one determinization is required")]
    NoSamples,
    #[error("at least one playout per sample is required")]
    NoPlayouts,
    #[error("expected {expected} cards in hand, found {found}")]
    HandSize { expected: usize, found: usize },
}

pub type Result<T> = std::result::Result<T, AdvisorError>;
