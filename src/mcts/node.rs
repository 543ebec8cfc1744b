//! MCTS node structures.
//!
//! Nodes live in an arena and refer to each other by [`NodeId`]. Each node
//! keeps its children in an [`IndexedHeap`] keyed by UCB1, and remembers the
//! [`Handle`] of its own entry in the parent's heap so the score can be
//! updated in place after every playout.

use serde::{Deserialize, Serialize};

use crate::core::{Handle, IndexedHeap};

/// Index into the MCTSTree node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "NodeId(NONE)")
        } else {
            write!(f, "NodeId({})", self.0)
        }
    }
}

/// Where a node is in its life cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NodePhase {
    /// Created but never played through.
    Unvisited,
    /// Some successors still lack a child node.
    Expanding,
    /// Visited with no children: terminal, or successors not yet listed.
    Leaf,
    /// Every successor has a child node.
    Internal,
}

/// UCB1 score of a child with `wins` over `simulations`, whose parent has
/// been played through `parent_simulations` times.
///
/// Unvisited children score `+inf` so each is tried once.
///
/// ```
/// use euchre_search::mcts::ucb1;
///
/// assert_eq!(ucb1(0, 0, 10), f64::INFINITY);
/// let score = ucb1(3, 4, 10);
/// assert!((score - (0.75 + (2.0 * ((10f64).ln() + 1.0) / 4.0).sqrt())).abs() < 1e-12);
/// ```
#[must_use]
pub fn ucb1(wins: i64, simulations: u32, parent_simulations: u32) -> f64 {
    if simulations == 0 {
        return f64::INFINITY;
    }
    let s = f64::from(simulations);
    let parent = f64::from(parent_simulations);
    wins as f64 / s + (2.0 * (parent.ln() + 1.0) / s).sqrt()
}

/// A node in the MCTS tree.
#[derive(Clone, Debug)]
pub struct MCTSNode<S> {
    pub state: S,

    /// Parent node (NONE for root).
    pub parent: NodeId,

    /// This node's entry in the parent's child heap.
    pub slot: Handle,

    /// Depth in tree (root = 0).
    pub depth: u16,

    /// Children keyed by UCB1.
    pub children: IndexedHeap<NodeId>,

    /// Sum of credited evaluation magnitudes, from the parent mover's view.
    pub wins: i64,

    pub simulations: u32,

    /// Successor states without a child yet. `None` until first listed.
    pub unexpanded: Option<Vec<S>>,
}

impl<S> MCTSNode<S> {
    pub fn new(state: S, parent: NodeId, slot: Handle, depth: u16) -> Self {
        Self {
            state,
            parent,
            slot,
            depth,
            children: IndexedHeap::new(),
            wins: 0,
            simulations: 0,
            unexpanded: None,
        }
    }

    pub fn root(state: S) -> Self {
        Self::new(state, NodeId::NONE, Handle::NONE, 0)
    }

    #[must_use]
    pub fn phase(&self) -> NodePhase {
        if self.simulations == 0 {
            return NodePhase::Unvisited;
        }
        match &self.unexpanded {
            Some(rest) if !rest.is_empty() => NodePhase::Expanding,
            Some(_) if !self.children.is_empty() => NodePhase::Internal,
            _ => NodePhase::Leaf,
        }
    }

    /// UCB1 score given the parent's simulation count.
    #[must_use]
    pub fn ucb1(&self, parent_simulations: u32) -> f64 {
        ucb1(self.wins, self.simulations, parent_simulations)
    }

    /// Mean credited evaluation, or 0 if never visited.
    #[must_use]
    pub fn mean(&self) -> f64 {
        if self.simulations == 0 {
            0.0
        } else {
            self.wins as f64 / f64::from(self.simulations)
        }
    }
}
