//! Error taxonomy for tree construction and payoff propagation.
//!
//! Every failure here is a programming-invariant failure, not a transient
//! one; they are surfaced eagerly and never retried.

use thiserror::Error;

use super::node::NodeId;
use crate::core::Placement;

/// Errors surfaced by the evaluator.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// A childless node reached the backward pass without a terminal payoff.
    /// Exhaustive construction scores every leaf, so this is an invariant
    /// violation, never a recoverable state.
    #[error("node {node} at depth {depth} has no children and no terminal payoff")]
    ChildlessInternal { node: NodeId, depth: u16 },

    /// A payoff was read before the backward pass finalized it.
    #[error("payoff of node {node} at depth {depth} read before it was set")]
    PayoffUnset { node: NodeId, depth: u16 },

    /// The root placement does not name a tile of either player.
    #[error("root placement {placement} does not exist in its owner's rack of {rack_len} tiles")]
    InvalidRoot {
        placement: Placement,
        rack_len: usize,
    },

    /// A rack does not hold the configured number of tiles.
    #[error("player {player} holds {got} tiles, expected {expected}")]
    RackSize {
        player: u8,
        got: usize,
        expected: usize,
    },
}

/// Convenience Result type for evaluator operations.
pub type Result<T> = std::result::Result<T, EvalError>;
