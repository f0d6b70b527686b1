//! Tiles and placements.
//!
//! A tile is a pair of order-significant colors. Tiles never carry mutable
//! search state: whether a tile is currently placed along the active search
//! path lives in the per-search `UsedSet`, keyed by `Placement`.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::player::PlayerId;

/// Index of a tile within its owner's rack.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileId(pub u8);

impl TileId {
    /// Create a new tile ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for TileId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "t{}", self.0)
    }
}

/// A two-color tile.
///
/// Color order is significant: the opening tile's *second* color is the
/// first open color of the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tile {
    first: Color,
    second: Color,
}

impl Tile {
    /// Create a tile from its two colors.
    #[must_use]
    pub const fn new(first: Color, second: Color) -> Self {
        Self { first, second }
    }

    /// Both colors, in order.
    #[inline]
    #[must_use]
    pub const fn colors(self) -> (Color, Color) {
        (self.first, self.second)
    }

    /// The tile's first color.
    #[inline]
    #[must_use]
    pub const fn first(self) -> Color {
        self.first
    }

    /// The tile's second color.
    #[inline]
    #[must_use]
    pub const fn second(self) -> Color {
        self.second
    }

    /// Check whether this tile can be placed against the given open color.
    #[inline]
    #[must_use]
    pub fn matches(self, open: Color) -> bool {
        self.first == open || self.second == open
    }

    /// The open color after placing this tile against `open`.
    ///
    /// Returns the color that is *not* `open`; for a double (both colors
    /// equal to `open`) the same color stays open.
    #[must_use]
    pub fn follow(self, open: Color) -> Color {
        if self.first != open {
            self.first
        } else {
            self.second
        }
    }
}

impl std::fmt::Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}|{}]", self.first, self.second)
    }
}

/// A specific tile of a specific player: the unit a node records and the
/// key the used set tracks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    /// The player whose rack the tile belongs to.
    pub player: PlayerId,
    /// The tile's index within that rack.
    pub tile: TileId,
}

impl Placement {
    /// Create a new placement.
    #[must_use]
    pub const fn new(player: PlayerId, tile: TileId) -> Self {
        Self { player, tile }
    }
}

impl std::fmt::Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "P{}:{}", self.player.number(), self.tile)
    }
}
