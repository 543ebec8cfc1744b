//! MCTS search statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected during MCTS search.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SearchStats {
    /// Playouts performed.
    pub playouts: u32,

    /// Nodes expanded (added to tree).
    pub nodes_expanded: u32,

    /// Playouts that ended on a terminal state.
    pub terminal_hits: u32,

    /// Maximum depth reached during search.
    pub max_depth: u16,

    /// Total time spent searching (microseconds).
    pub time_us: u64,
}

impl SearchStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    #[must_use]
    pub fn playouts_per_second(&self) -> f64 {
        if self.time_us == 0 {
            0.0
        } else {
            self.playouts as f64 / (self.time_us as f64 / 1_000_000.0)
        }
    }

    /// Share of playouts that grew the tree.
    #[must_use]
    pub fn expansion_rate(&self) -> f64 {
        if self.playouts == 0 {
            0.0
        } else {
            self.nodes_expanded as f64 / self.playouts as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = SearchStats::new();
        assert_eq!(stats.playouts, 0);
        assert_eq!(stats.nodes_expanded, 0);
    }

    #[test]
    fn test_stats_playouts_per_second() {
        let mut stats = SearchStats::new();
        stats.playouts = 1000;
        stats.time_us = 1_000_000;

        assert_eq!(stats.playouts_per_second(), 1000.0);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = SearchStats::new();
        stats.playouts = 100;
        stats.nodes_expanded = 50;
        assert_eq!(stats.expansion_rate(), 0.5);

        stats.reset();

        assert_eq!(stats.playouts, 0);
        assert_eq!(stats.expansion_rate(), 0.0);
    }
}
