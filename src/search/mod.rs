//! Game-tree search: exhaustive enumeration plus backward induction.
//!
//! ## Overview
//!
//! Given the opening placement and both player collections, [`Evaluator`]
//! builds the complete tree of legal continuations, assigns terminal
//! payoffs at game-ending positions, and propagates values back up so every
//! node estimates how favorable its position is to the opening player.
//!
//! ## Usage
//!
//! ```
//! use tile_duel::core::{Color, Placement, PlayerId, Rack, Tile, TileId};
//! use tile_duel::search::{Evaluator, SearchConfig};
//!
//! let red = Color::new(1);
//! let blue = Color::new(2);
//! let green = Color::new(3);
//!
//! let p1 = Rack::new(PlayerId::ONE, vec![Tile::new(red, blue), Tile::new(green, red)]);
//! let p2 = Rack::new(PlayerId::TWO, vec![Tile::new(blue, green), Tile::new(red, red)]);
//!
//! let opening = Placement::new(PlayerId::ONE, TileId::new(0));
//! let config = SearchConfig::default().with_tiles_per_player(2);
//!
//! let tree = Evaluator::build_and_evaluate(opening, [&p1, &p2], config).unwrap();
//! let payoff = tree.payoff(tree.root()).unwrap();
//! let recommended = tree.best_child(tree.root()).unwrap();
//! println!("root payoff {payoff}, recommended child {recommended:?}");
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod node;
pub mod stats;
pub mod tree;
pub mod used;

pub use config::SearchConfig;
pub use engine::{Evaluator, FAVORABLE, UNFAVORABLE};
pub use error::{EvalError, Result};
pub use node::{GameNode, NodeId};
pub use stats::BuildStats;
pub use tree::{GameTree, TreeStats};
pub use used::UsedSet;
