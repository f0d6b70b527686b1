//! Tree construction and payoff propagation.
//!
//! `Evaluator` is handed the opening placement and both player collections,
//! enumerates every legal continuation into a `GameTree`, scores leaves with
//! the terminal rule, then runs backward induction from the deepest level up.
//!
//! ## Conventions
//!
//! Payoffs measure favorability to the player who placed the opening tile:
//! `+1.0` good for them, `-1.0` bad. The advised party is the *responder*,
//! the player who moves at odd plies. A node's children are chosen by the
//! mover one ply deeper, so:
//!
//! - a leaf scores [`FAVORABLE`] when its depth is even (the responder is
//!   the one stuck) or equal to the maximum ply count (the opening player
//!   empties their rack first), and [`UNFAVORABLE`] otherwise (the opening
//!   player is stuck);
//! - an internal node at even depth takes the **min** of its children: the
//!   responder chooses there and plays against the opening player;
//! - an internal node at odd depth takes the **arithmetic mean** of its
//!   children: the opening player chooses there and is modeled as
//!   unpredictable rather than optimal.

use std::time::Instant;

use crate::core::{Color, Placement, PlayerCollection, PlayerId, TileId};

use super::config::SearchConfig;
use super::error::{EvalError, Result};
use super::node::{GameNode, NodeId};
use super::stats::BuildStats;
use super::tree::GameTree;
use super::used::UsedSet;

/// Terminal payoff for positions won by the opening player.
pub const FAVORABLE: f64 = 1.0;

/// Terminal payoff for positions lost by the opening player.
pub const UNFAVORABLE: f64 = -1.0;

/// Complete-enumeration evaluator for one game position.
///
/// Generic over the tile-collection capability. One evaluator runs one
/// search; the used set is owned here, so independent evaluators over the
/// same racks cannot interfere.
#[derive(Debug)]
pub struct Evaluator<'a, P: PlayerCollection> {
    /// Both player collections, indexed by `PlayerId::index()`.
    players: [&'a P; 2],

    /// Search configuration.
    config: SearchConfig,

    /// The tree under construction.
    tree: GameTree,

    /// Placements on the active root-to-node path.
    used: UsedSet,

    /// Build diagnostics.
    stats: BuildStats,
}

impl<'a, P: PlayerCollection> Evaluator<'a, P> {
    /// Create an evaluator for the given opening placement.
    ///
    /// Validates that each rack holds exactly `config.tiles_per_player`
    /// tiles and that the opening placement names a real tile.
    ///
    /// # Panics
    ///
    /// Panics if `players` is not `[player 1, player 2]` in that order, or
    /// if the config allows more than 255 tiles per player (tile ids are
    /// 8-bit).
    pub fn new(root: Placement, players: [&'a P; 2], config: SearchConfig) -> Result<Self> {
        assert_eq!(players[0].player(), PlayerId::ONE, "players[0] must be player 1");
        assert_eq!(players[1].player(), PlayerId::TWO, "players[1] must be player 2");
        assert!(
            config.tiles_per_player <= u8::MAX as usize,
            "At most 255 tiles per player supported"
        );

        for collection in players {
            let got = collection.tiles().len();
            if got != config.tiles_per_player {
                return Err(EvalError::RackSize {
                    player: collection.player().number(),
                    got,
                    expected: config.tiles_per_player,
                });
            }
        }

        let rack_len = players[root.player.index()].tiles().len();
        if root.tile.index() >= rack_len {
            return Err(EvalError::InvalidRoot {
                placement: root,
                rack_len,
            });
        }

        Ok(Self {
            players,
            config,
            tree: GameTree::new(root),
            used: UsedSet::new(),
            stats: BuildStats::new(),
        })
    }

    /// Construct the full tree, compute all payoffs, and return the scored
    /// tree. The root's payoff and children are then ready for move
    /// selection via [`GameTree::best_child`].
    pub fn build_and_evaluate(
        root: Placement,
        players: [&'a P; 2],
        config: SearchConfig,
    ) -> Result<GameTree> {
        let mut eval = Self::new(root, players, config)?;
        eval.populate();
        eval.set_payoffs()?;
        Ok(eval.into_tree())
    }

    /// Enumerate every legal continuation of the opening placement.
    ///
    /// The opening tile's second color is the first open color, and the
    /// opponent of the opening player moves first. The opening placement is
    /// held in the used set for the duration of the walk so neither player
    /// can re-place it.
    ///
    /// One evaluator builds one tree: once the root has been expanded or
    /// scored, further calls are no-ops.
    pub fn populate(&mut self) {
        let start = Instant::now();

        let root = self.tree.root();
        if !self.tree.get(root).is_leaf() || self.tree.get(root).payoff.is_some() {
            return;
        }
        let placed = self.tree.get(root).placed;
        let open = self.rack(placed.player).tile(placed.tile).second();

        self.used.acquire(placed);
        self.next_move(placed.player.opponent(), 1, root, open);
        self.used.release(placed);

        if self.tree.get(root).is_leaf() {
            // No legal reply at all: the opponent is stuck immediately.
            let payoff = self.terminal_payoff(0);
            self.tree.get_mut(root).payoff = Some(payoff);
            self.stats.leaves_scored += 1;
        }

        self.stats.populate_us = start.elapsed().as_micros() as u64;
    }

    /// Recursive exhaustive enumerator: one child per legal tile of `mover`.
    ///
    /// Every acquire is matched by a release immediately after the
    /// recursive call returns, so the used set holds exactly the active
    /// root-to-node path at all times.
    fn next_move(&mut self, mover: PlayerId, depth: u16, node: NodeId, open: Color) {
        let rack = self.rack(mover);

        for (idx, tile) in rack.tiles().iter().enumerate() {
            let placed = Placement::new(mover, TileId::new(idx as u8));
            if !tile.matches(open) || self.used.contains(placed) {
                continue;
            }

            self.used.acquire(placed);

            let child = self.tree.alloc(GameNode::new(node, placed, depth));
            self.tree.get_mut(node).children.push(child);
            self.stats.nodes_created += 1;
            if depth > self.stats.max_depth {
                self.stats.max_depth = depth;
            }

            self.next_move(mover.opponent(), depth + 1, child, tile.follow(open));

            self.used.release(placed);

            // Only now is the child provably childless: its own enumeration
            // has completed.
            if self.tree.get(child).is_leaf() {
                let payoff = self.terminal_payoff(depth);
                self.tree.get_mut(child).payoff = Some(payoff);
                self.stats.leaves_scored += 1;
            }
        }
    }

    /// Terminal rule for a leaf at the given depth.
    fn terminal_payoff(&self, depth: u16) -> f64 {
        if depth == self.config.max_plies() || depth % 2 == 0 {
            FAVORABLE
        } else {
            UNFAVORABLE
        }
    }

    /// Backward induction: finalize every node's payoff, deepest level
    /// first, so each parent only ever reads already-finalized children.
    ///
    /// Idempotent on a static tree; leaves pass their terminal payoff
    /// through unchanged.
    pub fn set_payoffs(&mut self) -> Result<()> {
        let start = Instant::now();

        for bucket in self.tree.depth_index().iter().rev() {
            for &id in bucket {
                let payoff = self.payoff_at(id)?;
                self.tree.get_mut(id).payoff = Some(payoff);
            }
        }

        self.stats.propagate_us = start.elapsed().as_micros() as u64;
        Ok(())
    }

    /// A node's payoff from its children's already-finalized payoffs.
    fn payoff_at(&self, id: NodeId) -> Result<f64> {
        let node = self.tree.get(id);

        if node.is_leaf() {
            // Exhaustive construction scored every leaf; a childless node
            // without a payoff means the build invariant was broken.
            return node.payoff.ok_or(EvalError::ChildlessInternal {
                node: id,
                depth: node.depth,
            });
        }

        let mut pays = Vec::with_capacity(node.children.len());
        for &child in &node.children {
            pays.push(self.tree.payoff(child)?);
        }

        if node.depth % 2 == 0 {
            Ok(pays.iter().copied().fold(f64::INFINITY, f64::min))
        } else {
            Ok(pays.iter().sum::<f64>() / pays.len() as f64)
        }
    }

    /// The collection belonging to `player`.
    fn rack(&self, player: PlayerId) -> &'a P {
        self.players[player.index()]
    }

    /// The tree built so far.
    #[must_use]
    pub fn tree(&self) -> &GameTree {
        &self.tree
    }

    /// Consume the evaluator, keeping the tree.
    #[must_use]
    pub fn into_tree(self) -> GameTree {
        self.tree
    }

    /// Build diagnostics.
    #[must_use]
    pub fn stats(&self) -> &BuildStats {
        &self.stats
    }

    /// The used set; empty whenever no enumeration is in flight.
    #[must_use]
    pub fn used(&self) -> &UsedSet {
        &self.used
    }

    /// The configuration in use.
    #[must_use]
    pub fn config(&self) -> &SearchConfig {
        &self.config
    }
}
