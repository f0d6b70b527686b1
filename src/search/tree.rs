//! Arena-based game tree.
//!
//! Nodes live in a flat `Vec<GameNode>` referenced by `NodeId` indices, with
//! the root at index 0. Child links on the nodes are the authoritative
//! structure; the depth index used by the backward pass is recomputed from
//! the arena in a single pass, never maintained incrementally.

use serde::{Deserialize, Serialize};

use super::error::{EvalError, Result};
use super::node::{GameNode, NodeId};
use crate::core::Placement;

/// Arena-owned game tree rooted at the opening tile.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameTree {
    /// All nodes; the root is always index 0.
    nodes: Vec<GameNode>,

    /// The root node ID.
    root: NodeId,
}

impl GameTree {
    /// Create a tree whose root holds the game's opening tile.
    pub fn new(root_placement: Placement) -> Self {
        let mut tree = Self {
            nodes: Vec::with_capacity(256),
            root: NodeId::new(0),
        };
        tree.nodes.push(GameNode::root(root_placement));
        tree
    }

    /// Get the root node ID.
    #[inline]
    #[must_use]
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Get a node by ID.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &GameNode {
        &self.nodes[id.index()]
    }

    /// Get a mutable node by ID.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut GameNode {
        &mut self.nodes[id.index()]
    }

    /// Allocate a new node, returning its ID. Construction only ever adds
    /// nodes; none are removed individually.
    pub fn alloc(&mut self, node: GameNode) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Number of nodes in the tree.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A tree always holds at least its root.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes in allocation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &GameNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }

    /// Read a node's payoff, failing if the backward pass has not set it.
    pub fn payoff(&self, id: NodeId) -> Result<f64> {
        let node = self.get(id);
        node.payoff.ok_or(EvalError::PayoffUnset {
            node: id,
            depth: node.depth,
        })
    }

    /// The child the player to move at `id` would pick. Payoffs measure
    /// favorability to the opening player, and the responder chooses among
    /// an even-depth node's children, so the preferred child is the minimum
    /// there and the maximum under odd-depth nodes. Fails if any child is
    /// still unscored.
    pub fn best_child(&self, id: NodeId) -> Result<Option<NodeId>> {
        let minimize = self.get(id).depth % 2 == 0;
        let mut best: Option<(NodeId, f64)> = None;
        for &child in &self.get(id).children {
            let pay = self.payoff(child)?;
            let better = match best {
                None => true,
                Some((_, b)) => {
                    if minimize {
                        pay < b
                    } else {
                        pay > b
                    }
                }
            };
            if better {
                best = Some((child, pay));
            }
        }
        Ok(best.map(|(id, _)| id))
    }

    /// Bucket node IDs by depth, index 0 = root level.
    ///
    /// Derived from the arena in one pass; used to order the backward
    /// payoff pass and the diagnostic dump.
    #[must_use]
    pub fn depth_index(&self) -> Vec<Vec<NodeId>> {
        let max_depth = self.nodes.iter().map(|n| n.depth).max().unwrap_or(0);
        let mut buckets = vec![Vec::new(); max_depth as usize + 1];
        for (id, node) in self.iter() {
            buckets[node.depth as usize].push(id);
        }
        buckets
    }

    /// Get statistics about the tree.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let max_depth = self.nodes.iter().map(|n| n.depth).max().unwrap_or(0);
        let leaf_count = self.nodes.iter().filter(|n| n.is_leaf()).count();
        let scored_count = self.nodes.iter().filter(|n| n.payoff.is_some()).count();

        TreeStats {
            node_count: self.nodes.len(),
            leaf_count,
            scored_count,
            max_depth,
        }
    }
}

impl std::fmt::Display for GameTree {
    /// Depth-ordered diagnostic dump: every node's placement and payoff,
    /// level by level from the root down.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (depth, bucket) in self.depth_index().iter().enumerate() {
            writeln!(f, "depth {depth}")?;
            for &id in bucket {
                let node = self.get(id);
                match node.payoff {
                    Some(pay) => writeln!(f, "  {} payoff: {pay}", node.placed)?,
                    None => writeln!(f, "  {} payoff: unset", node.placed)?,
                }
            }
        }
        Ok(())
    }
}

/// Statistics about a game tree.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TreeStats {
    /// Total number of nodes.
    pub node_count: usize,

    /// Number of leaves (nodes with no legal continuation).
    pub leaf_count: usize,

    /// Number of nodes with a payoff set.
    pub scored_count: usize,

    /// Deepest ply reached.
    pub max_depth: u16,
}

impl TreeStats {
    /// Average children per internal node.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        let internal = self.node_count - self.leaf_count;
        if internal == 0 {
            0.0
        } else {
            // Every node except the root is someone's child.
            (self.node_count - 1) as f64 / internal as f64
        }
    }

    /// True once every node carries a payoff.
    #[must_use]
    pub fn fully_scored(&self) -> bool {
        self.scored_count == self.node_count
    }
}
