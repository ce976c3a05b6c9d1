//! Search configuration parameters.

use serde::{Deserialize, Serialize};

/// Default number of children explored per internal node.
pub const DEFAULT_BRANCH_CAP: usize = 14;

/// Minimax search configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Plies searched by strategies that do not pass an explicit depth.
    pub depth: u32,

    /// Children explored per internal node after shuffling.
    /// `None` explores every child (exact, deterministic, slow).
    pub branch_cap: Option<usize>,

    /// Seed for the move-ordering shuffle.
    /// The RNG is reseeded at every search, so equal inputs give equal results.
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 2,
            branch_cap: Some(DEFAULT_BRANCH_CAP),
            seed: 42,
        }
    }
}

impl SearchConfig {
    /// Create a new config with custom depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Create a new config with a custom branch cap.
    pub fn with_branch_cap(mut self, cap: Option<usize>) -> Self {
        assert!(cap != Some(0), "branch cap must be positive");
        self.branch_cap = cap;
        self
    }

    /// Create a new config with custom seed.
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
        let config = SearchConfig::default();
        assert_eq!(config.depth, 2);
        assert_eq!(config.branch_cap, Some(14));
        assert_eq!(config.seed, 42);
    }

    #[test]
    fn test_builder_pattern() {
        let config = SearchConfig::default()
            .with_depth(3)
            .with_branch_cap(None)
            .with_seed(7);

        assert_eq!(config.depth, 3);
        assert_eq!(config.branch_cap, None);
        assert_eq!(config.seed, 7);
    }

    #[test]
    #[should_panic(expected = "branch cap must be positive")]
    fn test_zero_branch_cap() {
        let _ = SearchConfig::default().with_branch_cap(Some(0));
    }

    #[test]
    fn test_serialization() {
        let config = SearchConfig::default().with_seed(99);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: SearchConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
