//! Core MCTS search algorithm.
//!
//! Each playout walks from the root, visiting every node it passes:
//!
//! 1. A terminal node returns its evaluation.
//! 2. A node lists its successors once. While some successor has no child,
//!    one is picked uniformly at random, added, and descended into.
//! 3. Otherwise the child with the highest UCB1 score is descended into.
//!
//! On the way back the visited child is credited with the magnitude of the
//! evaluation, positive if it is favorable for the player choosing at the
//! parent and negative otherwise, and its score in the parent's heap is
//! refreshed. The evaluation itself passes upward unchanged.

use std::time::Instant;

use log::{debug, log_enabled, trace, Level};

use crate::core::GameRng;

use super::config::MCTSConfig;
use super::engine::MCTSEngine;
use super::node::NodeId;
use super::stats::SearchStats;
use super::tree::MCTSTree;

/// Result of a search: the chosen successor of the root and its score.
#[derive(Clone, Debug, PartialEq)]
pub struct MCTSOutcome<S> {
    /// Best child state, or the root itself when it has no children.
    pub state: S,

    /// UCB1 score of the best child. For a childless root, its evaluation
    /// when terminal and 0 otherwise.
    pub score: f64,

    /// Mean credited evaluation of the best child, from the root mover's
    /// view. Equals `score` for a childless root.
    pub mean: f64,

    /// Playouts through the returned state.
    pub visits: u32,
}

/// Main MCTS search context.
///
/// Generic over the domain adapter. A fresh tree is built for every call to
/// [`search`](Self::search).
pub struct MCTSSearch<E: MCTSEngine> {
    engine: E,

    config: MCTSConfig,

    /// RNG for choosing which successor to expand.
    rng: GameRng,

    stats: SearchStats,
}

impl<E: MCTSEngine> MCTSSearch<E> {
    pub fn new(engine: E, config: MCTSConfig) -> Self {
        let rng = GameRng::new(config.seed);

        Self {
            engine,
            config,
            rng,
            stats: SearchStats::default(),
        }
    }

    /// Use `rng` instead of one seeded from the config.
    pub fn with_rng(mut self, rng: GameRng) -> Self {
        self.rng = rng;
        self
    }

    /// Run the configured number of playouts from `root` and return the best
    /// child.
    pub fn search(&mut self, root: E::State) -> MCTSOutcome<E::State> {
        let tree = self.build_tree(root);
        self.best(&tree)
    }

    /// Run the configured number of playouts and hand back the whole tree.
    pub fn build_tree(&mut self, root: E::State) -> MCTSTree<E::State> {
        let start = Instant::now();
        self.stats.reset();

        let mut tree = MCTSTree::new(root);
        let root = tree.root();
        for _ in 0..self.config.playouts {
            self.playout(&mut tree, root);
            self.stats.playouts += 1;
        }

        self.stats.time_us = start.elapsed().as_micros() as u64;
        debug!(
            "mcts: {} playouts, {} nodes, depth {}",
            self.stats.playouts,
            tree.len(),
            self.stats.max_depth
        );

        tree
    }

    /// Read the answer off a finished tree.
    pub fn best(&self, tree: &MCTSTree<E::State>) -> MCTSOutcome<E::State> {
        let root = tree.root_node();

        if log_enabled!(Level::Trace) {
            for (id, score) in tree.ranked_children() {
                let child = tree.get(id);
                trace!("child {}: wins {} sims {} ucb {:.4}", id, child.wins, child.simulations, score);
            }
        }

        match root.children.peek() {
            Some((&id, score)) => {
                let child = tree.get(id);
                MCTSOutcome {
                    state: child.state.clone(),
                    score,
                    mean: child.mean(),
                    visits: child.simulations,
                }
            }
            None => {
                let score = if self.engine.is_terminal(&root.state) {
                    f64::from(self.engine.evaluation(&root.state))
                } else {
                    0.0
                };
                MCTSOutcome {
                    state: root.state.clone(),
                    score,
                    mean: score,
                    visits: root.simulations,
                }
            }
        }
    }

    /// One playout through `id`, returning the evaluation reached.
    fn playout(&mut self, tree: &mut MCTSTree<E::State>, id: NodeId) -> i32 {
        tree.get_mut(id).simulations += 1;

        if self.engine.is_terminal(&tree.get(id).state) {
            self.stats.terminal_hits += 1;
            return self.engine.evaluation(&tree.get(id).state);
        }

        if tree.get(id).unexpanded.is_none() {
            let next = self.engine.next_states(&tree.get(id).state);
            tree.get_mut(id).unexpanded = Some(next);
        }

        let child = match self.take_unexpanded(tree, id) {
            Some(state) => {
                let child = tree.add_child(id, state);
                self.stats.nodes_expanded += 1;
                self.stats.max_depth = self.stats.max_depth.max(tree.get(child).depth);
                child
            }
            None => match tree.get(id).children.peek() {
                Some((&child, _)) => child,
                // No successors at all; score it where it stands.
                None => return self.engine.evaluation(&tree.get(id).state),
            },
        };

        let eval = self.playout(tree, child);

        let favorable = self.engine.favorable(&tree.get(id).state, eval);
        let magnitude = i64::from(eval.unsigned_abs());
        let parent_simulations = tree.get(id).simulations;

        let node = tree.get_mut(child);
        node.wins += if favorable { magnitude } else { -magnitude };
        let score = node.ucb1(parent_simulations);
        let slot = node.slot;
        tree.get_mut(id).children.update(slot, score);

        eval
    }

    /// Remove a uniformly chosen successor that has no child yet.
    fn take_unexpanded(&mut self, tree: &mut MCTSTree<E::State>, id: NodeId) -> Option<E::State> {
        let pending = tree.get_mut(id).unexpanded.as_mut()?;
        if pending.is_empty() {
            return None;
        }
        let pick = self.rng.gen_range_usize(0..pending.len());
        Some(pending.swap_remove(pick))
    }

    #[must_use]
    pub fn stats(&self) -> &SearchStats {
        &self.stats
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn config(&self) -> &MCTSConfig {
        &self.config
    }
}

/// Search `root` with a one-off context.
pub fn mcts<E: MCTSEngine>(engine: E, root: E::State, config: MCTSConfig) -> MCTSOutcome<E::State> {
    MCTSSearch::new(engine, config).search(root)
}
