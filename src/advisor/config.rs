//! Advisor configuration.

use serde::{Deserialize, Serialize};

use crate::mcts::MCTSConfig;

/// How hard the advisor thinks about each decision.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// Deals sampled per decision.
    pub determinizations: usize,

    /// MCTS playouts per sampled deal.
    pub playouts: u32,

    /// Base seed; sample `i` derives its own stream from it.
    pub seed: u64,

    /// Expected points above which trump is ordered up or called.
    pub call_threshold: f64,

    /// Keep sampled hands consistent with suits players showed out of.
    pub infer_voids: bool,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            determinizations: 32,
            playouts: 2_000,
            seed: 42,
            call_threshold: 0.6,
            infer_voids: true,
        }
    }
}

impl AdvisorConfig {
    pub fn with_determinizations(mut self, n: usize) -> Self {
        self.determinizations = n;
        self
    }

    pub fn with_playouts(mut self, playouts: u32) -> Self {
        self.playouts = playouts;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_call_threshold(mut self, threshold: f64) -> Self {
        self.call_threshold = threshold;
        self
    }

    pub fn with_void_inference(mut self, enabled: bool) -> Self {
        self.infer_voids = enabled;
        self
    }

    /// MCTS settings for one sample.
    #[must_use]
    pub fn mcts(&self) -> MCTSConfig {
        MCTSConfig::default()
            .with_playouts(self.playouts)
            .with_seed(self.seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AdvisorConfig::default();
        assert_eq!(config.determinizations, 32);
        assert_eq!(config.call_threshold, 0.6);
        assert!(config.infer_voids);
    }

    #[test]
    fn test_builder_pattern() {
        let config = AdvisorConfig::default()
            .with_determinizations(4)
            .with_playouts(100)
            .with_seed(9)
            .with_call_threshold(1.0)
            .with_void_inference(false);

        assert_eq!(config.determinizations, 4);
        assert_eq!(config.mcts().playouts, 100);
        assert_eq!(config.mcts().seed, 9);
        assert_eq!(config.call_threshold, 1.0);
        assert!(!config.infer_voids);
    }

    #[test]
    fn test_serialization() {
        let config = AdvisorConfig::default().with_seed(77);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: AdvisorConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
