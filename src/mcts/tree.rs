//! Arena-based MCTS tree.
//!
//! Uses a flat `Vec<MCTSNode>` with index-based references. A tree is built
//! for one decision and dropped once the best child is read off.

use super::node::{MCTSNode, NodeId};

/// Arena-based MCTS tree.
#[derive(Clone, Debug)]
pub struct MCTSTree<S> {
    nodes: Vec<MCTSNode<S>>,

    /// The root node ID (always 0).
    root: NodeId,
}

impl<S> MCTSTree<S> {
    /// Create a new tree with a root node.
    pub fn new(root_state: S) -> Self {
        Self::with_capacity(root_state, 1024)
    }

    /// Create a tree with custom initial capacity.
    pub fn with_capacity(root_state: S, capacity: usize) -> Self {
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(MCTSNode::root(root_state));
        Self {
            nodes,
            root: NodeId::new(0),
        }
    }

    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &MCTSNode<S> {
        &self.nodes[id.0 as usize]
    }

    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut MCTSNode<S> {
        &mut self.nodes[id.0 as usize]
    }

    /// Add `state` as a new child of `parent`, queued with an infinite score.
    pub fn add_child(&mut self, parent: NodeId, state: S) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        let depth = self.get(parent).depth + 1;

        let slot = self.get_mut(parent).children.push(id, f64::INFINITY);
        self.nodes.push(MCTSNode::new(state, parent, slot, depth));
        id
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn root_node(&self) -> &MCTSNode<S> {
        self.get(self.root)
    }

    /// Iterate over all nodes.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &MCTSNode<S>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }

    /// Root children with their current scores, best first.
    pub fn ranked_children(&self) -> Vec<(NodeId, f64)> {
        let mut ranked: Vec<_> = self
            .root_node()
            .children
            .iter()
            .map(|(_, &id, score)| (id, score))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked
    }

    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let max_depth = self.nodes.iter().map(|n| n.depth).max().unwrap_or(0);
        let leaf_count = self.nodes.iter().filter(|n| n.children.is_empty()).count();
        let total_children: usize = self.nodes.iter().map(|n| n.children.len()).sum();

        TreeStats {
            node_count: self.nodes.len(),
            max_depth,
            leaf_count,
            total_children,
        }
    }
}

/// Statistics about the MCTS tree.
#[derive(Clone, Debug, Default)]
pub struct TreeStats {
    pub node_count: usize,

    /// Maximum depth reached.
    pub max_depth: u16,

    /// Nodes without children.
    pub leaf_count: usize,

    pub total_children: usize,
}

impl TreeStats {
    /// Average children per internal node.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        let internal = self.node_count - self.leaf_count;
        if internal == 0 {
            0.0
        } else {
            self.total_children as f64 / internal as f64
        }
    }
}
