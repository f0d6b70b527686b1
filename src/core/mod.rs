//! Core data model: colors, tiles, players, and the dealing RNG.

pub mod color;
pub mod player;
pub mod rng;
pub mod tile;

pub use color::Color;
pub use player::{PlayerCollection, PlayerId, Rack};
pub use rng::DealRng;
pub use tile::{Placement, Tile, TileId};
