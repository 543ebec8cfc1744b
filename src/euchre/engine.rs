//! Euchre as seen by the search engines.
//!
//! Evaluations are always from team 0's perspective: positive when seats 0
//! and 2 come out ahead.

use super::state::State;
use crate::cards::Card;
use crate::mcts::MCTSEngine;
use crate::minimax::{MinimaxEngine, Move};

/// Stateless adapter exposing euchre play to MCTS and minimax.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EuchreEngine;

impl MCTSEngine for EuchreEngine {
    type State = State;

    fn favorable(&self, state: &State, eval: i32) -> bool {
        if state.player.team() == 0 {
            eval > 0
        } else {
            eval < 0
        }
    }

    fn is_terminal(&self, state: &State) -> bool {
        state.is_terminal()
    }

    fn next_states(&self, state: &State) -> Vec<State> {
        state.successors().into_iter().map(|(_, next)| next).collect()
    }

    fn evaluation(&self, state: &State) -> i32 {
        state.score()
    }
}

impl MinimaxEngine for EuchreEngine {
    type State = State;
    type Action = Card;

    fn favorable(&self, state: &State) -> bool {
        state.player.team() == 0
    }

    fn is_terminal(&self, state: &State) -> bool {
        state.is_terminal()
    }

    fn evaluation(&self, state: &State) -> f64 {
        f64::from(state.score())
    }

    fn successors(&self, state: &State) -> Vec<Move<Card, State>> {
        state
            .successors()
            .into_iter()
            .map(|(card, next)| Move::new(card, next))
            .collect()
    }
}
