//! Build-pass statistics for diagnostics.

use serde::{Deserialize, Serialize};

/// Statistics collected while building and scoring a tree.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct BuildStats {
    /// Nodes created during enumeration (excluding the root).
    pub nodes_created: u32,

    /// Leaves assigned a terminal payoff during construction.
    pub leaves_scored: u32,

    /// Deepest ply reached.
    pub max_depth: u16,

    /// Time spent in `populate` (microseconds).
    pub populate_us: u64,

    /// Time spent in `set_payoffs` (microseconds).
    pub propagate_us: u64,
}

impl BuildStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Nodes created per second of construction time.
    #[must_use]
    pub fn nodes_per_second(&self) -> f64 {
        if self.populate_us == 0 {
            0.0
        } else {
            self.nodes_created as f64 / (self.populate_us as f64 / 1_000_000.0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_default() {
        let stats = BuildStats::new();
        assert_eq!(stats.nodes_created, 0);
        assert_eq!(stats.leaves_scored, 0);
        assert_eq!(stats.nodes_per_second(), 0.0);
    }

    #[test]
    fn test_stats_reset() {
        let mut stats = BuildStats::new();
        stats.nodes_created = 10;
        stats.max_depth = 4;

        stats.reset();

        assert_eq!(stats.nodes_created, 0);
        assert_eq!(stats.max_depth, 0);
    }

    #[test]
    fn test_nodes_per_second() {
        let mut stats = BuildStats::new();
        stats.nodes_created = 500;
        stats.populate_us = 1_000_000;

        assert_eq!(stats.nodes_per_second(), 500.0);
    }

    #[test]
    fn test_serialization() {
        let mut stats = BuildStats::new();
        stats.nodes_created = 42;

        let json = serde_json::to_string(&stats).unwrap();
        let back: BuildStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back.nodes_created, 42);
    }
}
