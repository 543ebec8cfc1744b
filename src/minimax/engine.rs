//! Domain adapter for minimax.

use serde::{Deserialize, Serialize};

/// An action and the state it leads to. Terminal states carry no action.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Move<A, S> {
    pub action: Option<A>,
    pub state: S,
}

impl<A, S> Move<A, S> {
    pub fn new(action: A, state: S) -> Self {
        Self {
            action: Some(action),
            state,
        }
    }

    /// Sentinel returned for a terminal state.
    pub fn terminal(state: S) -> Self {
        Self {
            action: None,
            state,
        }
    }

    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.action.is_none()
    }
}

/// Game logic for exhaustive two-sided search.
pub trait MinimaxEngine {
    type State: Clone;
    type Action: Clone;

    /// Whether the side to move at `state` is maximizing.
    fn favorable(&self, state: &Self::State) -> bool;

    fn is_terminal(&self, state: &Self::State) -> bool;

    /// Score of a terminal state, from the maximizing side's view.
    fn evaluation(&self, state: &Self::State) -> f64;

    /// Legal moves in a fixed order.
    fn successors(&self, state: &Self::State) -> Vec<Move<Self::Action, Self::State>>;
}
