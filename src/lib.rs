//! # tile-duel
//!
//! Decision-support engine for a two-player color-matching tile game.
//! Given the current board state — one placed opening tile, its open color,
//! and each player's remaining tiles — the engine enumerates every legal
//! continuation as a tree, scores game-ending positions, and propagates
//! payoffs backward so each node estimates how favorable its position is to
//! the opening player.
//!
//! The engine performs no I/O and no drawing; boards, buttons, and input
//! handling belong to the caller, which reaches the engine through two
//! small capabilities: the tile pair itself and the per-player tile
//! collection.
//!
//! ## Design
//!
//! - **Arena tree**: nodes live in a flat vector addressed by `NodeId`;
//!   each node owns its child list, and the depth index for the backward
//!   pass is derived from the arena in a single pass.
//! - **Scoped used set**: instead of a mutable mark on each tile, the
//!   active search path is tracked in a per-search set of placements,
//!   acquired before each recursive call and released unconditionally when
//!   it returns.
//! - **Complete enumeration**: racks are single-digit small, so the full
//!   tree is built — no pruning, no sampling, no depth cutoff beyond the
//!   tiles dealt.
//!
//! ## Modules
//!
//! - `core`: colors, tiles, players, the collection capability, dealing RNG
//! - `search`: tree construction, payoff propagation, diagnostics

pub mod core;
pub mod search;

// Re-export commonly used types
pub use crate::core::{
    Color, DealRng, Placement, PlayerCollection, PlayerId, Rack, Tile, TileId,
};

pub use crate::search::{
    BuildStats, EvalError, Evaluator, GameNode, GameTree, NodeId, SearchConfig, TreeStats,
    UsedSet, FAVORABLE, UNFAVORABLE,
};
