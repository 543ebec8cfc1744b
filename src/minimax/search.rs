//! Depth-unbounded alpha-beta search.
//!
//! Successors are tried in the order the engine gives them. The first move
//! reaching the best value is kept; later ties do not replace it. A branch is
//! abandoned once `beta < alpha`.

use log::debug;
use serde::{Deserialize, Serialize};

use super::engine::{MinimaxEngine, Move};

/// Counters from one search.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimaxStats {
    /// States visited, terminal ones included.
    pub nodes: u64,

    /// Times the remaining successors of a state were skipped.
    pub cutoffs: u64,
}

/// Alpha-beta search context.
pub struct Minimax<E: MinimaxEngine> {
    engine: E,
    stats: MinimaxStats,
}

impl<E: MinimaxEngine> Minimax<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            stats: MinimaxStats::default(),
        }
    }

    /// Value of `state` under optimal play and the move achieving it.
    ///
    /// A terminal state yields its evaluation and the terminal sentinel. A
    /// non-terminal state with no successors yields `-inf` (maximizing) or
    /// `+inf` (minimizing) and the sentinel.
    pub fn search(&mut self, state: &E::State) -> (f64, Move<E::Action, E::State>) {
        self.stats = MinimaxStats::default();
        let result = self.alpha_beta(state, f64::NEG_INFINITY, f64::INFINITY);
        debug!(
            "minimax: value {} over {} nodes, {} cutoffs",
            result.0, self.stats.nodes, self.stats.cutoffs
        );
        result
    }

    fn alpha_beta(
        &mut self,
        state: &E::State,
        mut alpha: f64,
        mut beta: f64,
    ) -> (f64, Move<E::Action, E::State>) {
        self.stats.nodes += 1;

        if self.engine.is_terminal(state) {
            return (self.engine.evaluation(state), Move::terminal(state.clone()));
        }

        let maximizing = self.engine.favorable(state);
        let mut best_value = if maximizing {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
        let mut best = Move::terminal(state.clone());

        for next in self.engine.successors(state) {
            let (value, _) = self.alpha_beta(&next.state, alpha, beta);

            if maximizing {
                if value > best_value || best.is_terminal() {
                    best_value = value;
                    best = next;
                }
                alpha = alpha.max(best_value);
            } else {
                if value < best_value || best.is_terminal() {
                    best_value = value;
                    best = next;
                }
                beta = beta.min(best_value);
            }

            if beta < alpha {
                self.stats.cutoffs += 1;
                break;
            }
        }

        (best_value, best)
    }

    #[must_use]
    pub fn stats(&self) -> &MinimaxStats {
        &self.stats
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }
}

/// Search `state` with a one-off context.
pub fn minimax<E: MinimaxEngine>(engine: E, state: &E::State) -> (f64, Move<E::Action, E::State>) {
    Minimax::new(engine).search(state)
}
