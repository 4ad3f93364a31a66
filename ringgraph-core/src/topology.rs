//! Pure neighbour arithmetic for a ring of `order` vertices.
//!
//! Vertex `u` is joined to `(u + 1) mod order` in the [`Direction::Next`]
//! direction and to `(u - 1) mod order` in the [`Direction::Prev`] direction.
//! The functions here never allocate and keep no state beyond `order`; they
//! assume `u < order` and leave range checks to [`crate::RingGraph`].

use std::num::NonZeroUsize;

use crate::edge::Edge;

/// One of the two ways to step around the ring from a vertex.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Direction {
    /// Towards `(u + 1) mod order`.
    Next,
    /// Towards `(u - 1) mod order`.
    Prev,
}

impl Direction {
    /// The order in which incidence queries visit the two directions.
    pub const CANONICAL: [Self; 2] = [Self::Next, Self::Prev];

    /// Returns the opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Next => Self::Prev,
            Self::Prev => Self::Next,
        }
    }
}

/// Boundary policy of a ring, derived from its vertex count.
///
/// Rings with fewer than three vertices cannot form a simple cycle; instead
/// of leaving their modular arithmetic implicit the graph classifies them so
/// callers can branch on the shape they are dealing with.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
/// use ringgraph_core::RingShape;
///
/// let shape = |n| NonZeroUsize::new(n).map(RingShape::of);
/// assert_eq!(shape(1), Some(RingShape::SelfLoop));
/// assert_eq!(shape(2), Some(RingShape::Digon));
/// assert_eq!(shape(7), Some(RingShape::Cycle));
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum RingShape {
    /// One vertex whose two directions both lead back to itself.
    SelfLoop,
    /// Two vertices joined by a doubled connection.
    Digon,
    /// A simple cycle of three or more vertices.
    Cycle,
}

impl RingShape {
    /// Classifies a ring of `order` vertices.
    #[must_use]
    pub const fn of(order: NonZeroUsize) -> Self {
        match order.get() {
            1 => Self::SelfLoop,
            2 => Self::Digon,
            _ => Self::Cycle,
        }
    }

    /// Returns `true` when every vertex has two distinct neighbours.
    #[must_use]
    pub const fn is_simple(self) -> bool {
        matches!(self, Self::Cycle)
    }
}

/// Returns the vertex reached from `u` by stepping once in `direction`.
///
/// # Examples
/// ```
/// use std::num::NonZeroUsize;
/// use ringgraph_core::{Direction, topology::neighbor};
///
/// let order = NonZeroUsize::new(5).expect("non-zero");
/// assert_eq!(neighbor(0, Direction::Prev, order), 4);
/// assert_eq!(neighbor(4, Direction::Next, order), 0);
/// assert_eq!(neighbor(2, Direction::Next, order), 3);
/// ```
#[must_use]
#[inline]
pub const fn neighbor(u: usize, direction: Direction, order: NonZeroUsize) -> usize {
    let n = order.get();
    match direction {
        Direction::Next => (u + 1) % n,
        Direction::Prev => {
            if u == 0 {
                n - 1
            } else {
                u - 1
            }
        }
    }
}

/// Returns the edge leaving `u` in `direction`, with `u` as its source.
#[must_use]
#[inline]
pub const fn incident_edge(u: usize, direction: Direction, order: NonZeroUsize) -> Edge {
    Edge::new(u, neighbor(u, direction, order))
}

/// Returns `true` when `u` and `v` are joined by a ring edge.
///
/// Both vertices must lie in `[0, order)`; out-of-range ids are never
/// adjacent.
#[must_use]
pub const fn are_adjacent(u: usize, v: usize, order: NonZeroUsize) -> bool {
    let n = order.get();
    if u >= n || v >= n {
        return false;
    }
    neighbor(u, Direction::Next, order) == v || neighbor(u, Direction::Prev, order) == v
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    fn order(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).expect("test orders are non-zero")
    }

    #[rstest]
    #[case(5, 0, 1, 4)]
    #[case(5, 4, 0, 3)]
    #[case(5, 2, 3, 1)]
    #[case(3, 2, 0, 1)]
    #[case(2, 0, 1, 1)]
    #[case(2, 1, 0, 0)]
    #[case(1, 0, 0, 0)]
    fn neighbours_wrap_around(
        #[case] n: usize,
        #[case] u: usize,
        #[case] next: usize,
        #[case] prev: usize,
    ) {
        assert_eq!(neighbor(u, Direction::Next, order(n)), next);
        assert_eq!(neighbor(u, Direction::Prev, order(n)), prev);
    }

    #[test]
    fn incident_edges_are_sourced_at_the_vertex() {
        let edge = incident_edge(0, Direction::Prev, order(5));
        assert_eq!(edge, Edge::new(0, 4));
    }

    #[rstest]
    #[case(5, 0, 4, true)]
    #[case(5, 4, 0, true)]
    #[case(5, 0, 2, false)]
    #[case(5, 0, 0, false)]
    #[case(5, 0, 5, false)]
    #[case(1, 0, 0, true)]
    #[case(2, 1, 0, true)]
    #[case(2, 1, 1, false)]
    fn adjacency_matches_the_ring(
        #[case] n: usize,
        #[case] u: usize,
        #[case] v: usize,
        #[case] expected: bool,
    ) {
        assert_eq!(are_adjacent(u, v, order(n)), expected);
    }

    #[test]
    fn opposite_directions_undo_each_other() {
        let n = order(6);
        for u in 0..n.get() {
            for direction in Direction::CANONICAL {
                let there = neighbor(u, direction, n);
                assert_eq!(neighbor(there, direction.opposite(), n), u);
            }
        }
    }

    #[rstest]
    #[case(1, RingShape::SelfLoop)]
    #[case(2, RingShape::Digon)]
    #[case(3, RingShape::Cycle)]
    #[case(1_000, RingShape::Cycle)]
    fn shapes_follow_the_vertex_count(#[case] n: usize, #[case] expected: RingShape) {
        assert_eq!(RingShape::of(order(n)), expected);
        assert_eq!(RingShape::of(order(n)).is_simple(), n >= 3);
    }
}
