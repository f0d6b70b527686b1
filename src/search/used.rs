//! Per-search used-tile set.
//!
//! Replaces a mutable "used" mark on the tiles themselves: the set is owned
//! by one evaluator, so nothing can leak across unrelated searches, and the
//! acquire/release pairing is visible at every recursion site. The invariant
//! is strict stack discipline: every placement acquired before a recursive
//! call is released immediately after that call returns, on every path, so
//! the set is empty again once construction finishes.

use rustc_hash::FxHashSet;

use crate::core::Placement;

/// Set of placements currently on the active root-to-node search path.
#[derive(Clone, Debug, Default)]
pub struct UsedSet {
    used: FxHashSet<Placement>,
}

impl UsedSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a placement is on the active path.
    #[inline]
    #[must_use]
    pub fn contains(&self, placement: Placement) -> bool {
        self.used.contains(&placement)
    }

    /// Mark a placement as on the path. Must not already be present.
    pub fn acquire(&mut self, placement: Placement) {
        let inserted = self.used.insert(placement);
        debug_assert!(inserted, "placement {placement} acquired twice");
    }

    /// Remove a placement from the path. Must be present.
    pub fn release(&mut self, placement: Placement) {
        let removed = self.used.remove(&placement);
        debug_assert!(removed, "placement {placement} released without acquire");
    }

    /// True once every acquire has been matched by a release.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.used.is_empty()
    }

    /// Number of placements currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.used.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PlayerId, TileId};

    fn p(n: u8, t: u8) -> Placement {
        Placement::new(PlayerId::from_number(n).unwrap(), TileId::new(t))
    }

    #[test]
    fn test_acquire_release_roundtrip() {
        let mut used = UsedSet::new();
        assert!(used.is_empty());

        used.acquire(p(1, 0));
        assert!(used.contains(p(1, 0)));
        assert!(!used.contains(p(2, 0)));
        assert_eq!(used.len(), 1);

        used.release(p(1, 0));
        assert!(used.is_empty());
    }

    #[test]
    fn test_same_tile_id_distinct_per_player() {
        let mut used = UsedSet::new();
        used.acquire(p(1, 3));
        used.acquire(p(2, 3));

        assert_eq!(used.len(), 2);

        used.release(p(1, 3));
        assert!(used.contains(p(2, 3)));
        assert!(!used.contains(p(1, 3)));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "acquired twice")]
    fn test_double_acquire_panics() {
        let mut used = UsedSet::new();
        used.acquire(p(1, 0));
        used.acquire(p(1, 0));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "released without acquire")]
    fn test_unmatched_release_panics() {
        let mut used = UsedSet::new();
        used.release(p(1, 0));
    }
}
