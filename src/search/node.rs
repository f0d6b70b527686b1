//! Game tree node.
//!
//! Nodes live in the `GameTree` arena and reference each other by index
//! (`NodeId`); a node's child list is the authoritative tree structure.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::Placement;

/// Index into the `GameTree` node arena. `u32::MAX` is reserved as the
/// no-node sentinel, used for the root's parent link.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Sentinel value representing no node.
    pub const NONE: NodeId = NodeId(u32::MAX);

    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Check if this is the NONE sentinel.
    #[inline]
    #[must_use]
    pub const fn is_none(self) -> bool {
        self.0 == u32::MAX
    }

    /// Position in the arena.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_none() {
            write!(f, "n-")
        } else {
            write!(f, "n{}", self.0)
        }
    }
}

/// One ply of the game: a placed tile, its depth, and its payoff.
///
/// `payoff` stays `None` until the node is scored — terminally during
/// construction for leaves, or by the backward pass for internal nodes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameNode {
    /// Parent node (NONE for the root).
    pub parent: NodeId,

    /// The tile placed at this ply.
    pub placed: Placement,

    /// Depth in the tree (root = 0, one more per ply).
    pub depth: u16,

    /// Payoff value, set once the node has been scored.
    pub payoff: Option<f64>,

    /// Children in enumeration order, one per legal continuation.
    /// SmallVec sized for the usual small branching factor.
    pub children: SmallVec<[NodeId; 8]>,
}

impl GameNode {
    /// Create a new unscored node.
    pub fn new(parent: NodeId, placed: Placement, depth: u16) -> Self {
        Self {
            parent,
            placed,
            depth,
            payoff: None,
            children: SmallVec::new(),
        }
    }

    /// Create the root node holding the game's opening tile.
    pub fn root(placed: Placement) -> Self {
        Self::new(NodeId::NONE, placed, 0)
    }

    /// A node with no legal continuations is a leaf.
    #[inline]
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}
