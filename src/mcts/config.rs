//! MCTS configuration parameters.

use serde::{Deserialize, Serialize};

/// MCTS configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MCTSConfig {
    /// Playouts per search. A count, not a deadline.
    pub playouts: u32,

    /// Random seed for expansion choices.
    /// Same seed produces deterministic searches.
    pub seed: u64,
}

impl Default for MCTSConfig {
    fn default() -> Self {
        Self {
            playouts: 1_000,
            seed: 42,
        }
    }
}

impl MCTSConfig {
    pub fn with_playouts(mut self, playouts: u32) -> Self {
        self.playouts = playouts;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MCTSConfig::default();
        assert_eq!(config.playouts, 1_000);
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_builder_pattern() {
        let config = MCTSConfig::default().with_playouts(250).with_seed(123);

        assert_eq!(config.playouts, 250);
        assert_eq!(config.seed, 123);
    }

    #[test]
    fn test_serialization() {
        let config = MCTSConfig::default().with_seed(7);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MCTSConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
