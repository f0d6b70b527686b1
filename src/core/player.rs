//! Player identity and the tile-collection capability.
//!
//! ## PlayerId
//!
//! Stable numeric identity for exactly two players, numbered 1 and 2.
//!
//! ## PlayerCollection
//!
//! The capability the engine consumes: a player number plus an ordered view
//! of the tiles that player was dealt. The engine never mutates a
//! collection; all transient search state lives in the evaluator's used set.

use serde::{Deserialize, Serialize};

use super::color::Color;
use super::rng::DealRng;
use super::tile::{Tile, TileId};

/// Player identifier for a two-player game, numbered 1 and 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(u8);

impl PlayerId {
    /// The first player (places the opening tile).
    pub const ONE: PlayerId = PlayerId(1);
    /// The second player.
    pub const TWO: PlayerId = PlayerId(2);

    /// Look up a player by number; only 1 and 2 exist.
    #[must_use]
    pub const fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::ONE),
            2 => Some(Self::TWO),
            _ => None,
        }
    }

    /// The 1-based player number.
    #[inline]
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    /// Zero-based index, for addressing `[&P; 2]` arrays.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// The other player.
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self.0 {
            1 => Self::TWO,
            _ => Self::ONE,
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Tile-collection capability consumed by the engine.
///
/// Implementations expose which player they belong to and the ordered,
/// live view of that player's tiles. Enumeration order during search is the
/// order `tiles()` yields.
pub trait PlayerCollection {
    /// The owning player's identity.
    fn player(&self) -> PlayerId;

    /// The player's tiles, in rack order.
    fn tiles(&self) -> &[Tile];

    /// Look up one tile by its id.
    #[must_use]
    fn tile(&self, id: TileId) -> &Tile {
        &self.tiles()[id.index()]
    }
}

/// A player's rack: the fixed multiset of tiles assigned at game start.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rack {
    player: PlayerId,
    tiles: Vec<Tile>,
}

impl Rack {
    /// Create a rack with an explicit tile list.
    #[must_use]
    pub fn new(player: PlayerId, tiles: Vec<Tile>) -> Self {
        Self { player, tiles }
    }

    /// Deal a rack of `count` random tiles drawn from `palette`.
    ///
    /// Both tile colors are drawn independently, so doubles can occur.
    /// The same seed deals the same rack.
    #[must_use]
    pub fn deal(player: PlayerId, count: usize, palette: &[Color], rng: &mut DealRng) -> Self {
        assert!(!palette.is_empty(), "Palette must not be empty");

        let tiles = (0..count)
            .map(|_| {
                let first = palette[rng.gen_range_usize(0..palette.len())];
                let second = palette[rng.gen_range_usize(0..palette.len())];
                Tile::new(first, second)
            })
            .collect();

        Self { player, tiles }
    }

    /// Number of tiles in the rack.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    /// Check if the rack is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }
}

impl PlayerCollection for Rack {
    fn player(&self) -> PlayerId {
        self.player
    }

    fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::ONE.number(), 1);
        assert_eq!(PlayerId::TWO.number(), 2);
        assert_eq!(PlayerId::ONE.index(), 0);
        assert_eq!(PlayerId::TWO.index(), 1);
        assert_eq!(format!("{}", PlayerId::ONE), "Player 1");
    }

    #[test]
    fn test_player_id_opponent() {
        assert_eq!(PlayerId::ONE.opponent(), PlayerId::TWO);
        assert_eq!(PlayerId::TWO.opponent(), PlayerId::ONE);
    }

    #[test]
    fn test_player_id_from_number() {
        assert_eq!(PlayerId::from_number(1), Some(PlayerId::ONE));
        assert_eq!(PlayerId::from_number(2), Some(PlayerId::TWO));
        assert_eq!(PlayerId::from_number(0), None);
        assert_eq!(PlayerId::from_number(3), None);
    }

    #[test]
    fn test_rack_collection_view() {
        let tiles = vec![
            Tile::new(Color::new(1), Color::new(2)),
            Tile::new(Color::new(2), Color::new(3)),
        ];
        let rack = Rack::new(PlayerId::TWO, tiles.clone());

        assert_eq!(rack.player(), PlayerId::TWO);
        assert_eq!(rack.tiles(), &tiles[..]);
        assert_eq!(*rack.tile(TileId::new(1)), tiles[1]);
        assert_eq!(rack.len(), 2);
    }

    #[test]
    fn test_deal_is_deterministic() {
        let palette = [Color::new(1), Color::new(2), Color::new(3)];

        let a = Rack::deal(PlayerId::ONE, 5, &palette, &mut DealRng::new(42));
        let b = Rack::deal(PlayerId::ONE, 5, &palette, &mut DealRng::new(42));

        assert_eq!(a, b);
        assert_eq!(a.len(), 5);
    }

    #[test]
    fn test_deal_draws_from_palette() {
        let palette = [Color::new(10), Color::new(20)];
        let rack = Rack::deal(PlayerId::ONE, 8, &palette, &mut DealRng::new(7));

        for tile in rack.tiles() {
            let (a, b) = tile.colors();
            assert!(palette.contains(&a));
            assert!(palette.contains(&b));
        }
    }

    #[test]
    fn test_rack_serialization() {
        let rack = Rack::new(
            PlayerId::ONE,
            vec![Tile::new(Color::new(1), Color::new(2))],
        );
        let json = serde_json::to_string(&rack).unwrap();
        let back: Rack = serde_json::from_str(&json).unwrap();
        assert_eq!(rack, back);
    }
}
