//! Search configuration.

use serde::{Deserialize, Serialize};

/// Configuration for a game evaluation.
///
/// The only tunable is the rack size; the maximum ply count is derived
/// from it and everything else (sentinels, aggregation rules) is fixed by
/// the game's conventions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Tiles dealt to each player at game start.
    pub tiles_per_player: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { tiles_per_player: 5 }
    }
}

impl SearchConfig {
    /// Create a config with a custom rack size. Tiles are addressed by
    /// 8-bit ids, so racks are capped at 255 tiles.
    pub fn with_tiles_per_player(mut self, tiles: usize) -> Self {
        assert!(tiles >= 1, "Each player needs at least 1 tile");
        assert!(
            tiles <= u8::MAX as usize,
            "At most 255 tiles per player supported"
        );
        self.tiles_per_player = tiles;
        self
    }

    /// Deepest reachable ply: the opening tile sits at depth 0 and at most
    /// `2 * tiles_per_player - 1` replies follow.
    #[must_use]
    pub fn max_plies(&self) -> u16 {
        (2 * self.tiles_per_player - 1) as u16
    }
}
