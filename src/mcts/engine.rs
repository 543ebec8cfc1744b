//! Domain adapter for MCTS.

/// Game logic the search needs, over whole successor states rather than
/// actions.
///
/// Evaluations are signed from a fixed reference perspective; the search
/// credits their magnitude as a win or a loss according to
/// [`favorable`](MCTSEngine::favorable).
pub trait MCTSEngine {
    type State: Clone;

    /// Whether `eval` is good for the player choosing a move at `state`.
    fn favorable(&self, state: &Self::State, eval: i32) -> bool;

    fn is_terminal(&self, state: &Self::State) -> bool;

    /// Every legal successor. Must be non-empty for non-terminal states.
    fn next_states(&self, state: &Self::State) -> Vec<Self::State>;

    /// Score of a terminal state.
    fn evaluation(&self, state: &Self::State) -> i32;
}
