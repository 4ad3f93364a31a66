//! Iterators over the two edges incident to a ring vertex.
//!
//! Every vertex is visited in the fixed order [`Direction::Next`] then
//! [`Direction::Prev`]. The iterators carry an explicit [`Position`] tag
//! instead of hidden counters; equality compares that tag alone so two
//! iterators at the same stage of the walk are interchangeable.

use std::iter::FusedIterator;
use std::num::NonZeroUsize;

use crate::{
    edge::Edge,
    topology::{Direction, incident_edge},
};

/// Stage reached by an [`IncidentEdges`] or [`InEdges`] iterator.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Position {
    /// The [`Direction::Next`] edge is produced next.
    Next,
    /// The [`Direction::Prev`] edge is produced next.
    Prev,
    /// Both edges have been produced.
    End,
}

impl Position {
    const fn direction(self) -> Option<Direction> {
        match self {
            Self::Next => Some(Direction::Next),
            Self::Prev => Some(Direction::Prev),
            Self::End => None,
        }
    }

    const fn advance(self) -> Self {
        match self {
            Self::Next => Self::Prev,
            Self::Prev | Self::End => Self::End,
        }
    }

    const fn remaining(self) -> usize {
        match self {
            Self::Next => 2,
            Self::Prev => 1,
            Self::End => 0,
        }
    }
}

/// Yields the `(edge, neighbour)` pairs leaving a vertex.
///
/// Produces `(u, next(u))` and then `(u, prev(u))`; every edge has the
/// queried vertex as its source.
///
/// # Examples
/// ```
/// use ringgraph_core::{Edge, IncidenceGraph, RingGraph};
///
/// let graph = RingGraph::new(5)?;
/// let incident: Vec<_> = graph.incident_edges(0)?.collect();
/// assert_eq!(incident, [(Edge::new(0, 1), 1), (Edge::new(0, 4), 4)]);
/// # Ok::<(), ringgraph_core::GraphError>(())
/// ```
#[derive(Clone, Copy, Debug)]
pub struct IncidentEdges {
    vertex: usize,
    order: NonZeroUsize,
    position: Position,
}

impl IncidentEdges {
    pub(crate) const fn new(vertex: usize, order: NonZeroUsize) -> Self {
        Self {
            vertex,
            order,
            position: Position::Next,
        }
    }

    /// Returns the vertex whose incidence is being walked.
    #[must_use]
    #[rustfmt::skip]
    pub const fn vertex(&self) -> usize { self.vertex }

    /// Returns the stage the iterator has reached.
    #[must_use]
    #[rustfmt::skip]
    pub const fn position(&self) -> Position { self.position }

    /// Returns the exhausted form of this walk, for `iter != iter.end()`
    /// loops.
    #[must_use]
    pub const fn end(&self) -> Self {
        Self {
            position: Position::End,
            ..*self
        }
    }
}

impl PartialEq for IncidentEdges {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl Eq for IncidentEdges {}

impl Iterator for IncidentEdges {
    type Item = (Edge, usize);

    fn next(&mut self) -> Option<Self::Item> {
        let direction = self.position.direction()?;
        self.position = self.position.advance();
        let edge = incident_edge(self.vertex, direction, self.order);
        Some((edge, edge.target()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.position.remaining();
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for IncidentEdges {}

impl FusedIterator for IncidentEdges {}

/// Yields the `(edge, neighbour)` pairs arriving at a vertex.
///
/// Visits the same two connections as [`IncidentEdges`] in the same order,
/// oriented towards the queried vertex: `(next(u), u)` then `(prev(u), u)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InEdges {
    outgoing: IncidentEdges,
}

impl InEdges {
    pub(crate) const fn new(vertex: usize, order: NonZeroUsize) -> Self {
        Self {
            outgoing: IncidentEdges::new(vertex, order),
        }
    }

    /// Returns the stage the iterator has reached.
    #[must_use]
    pub const fn position(&self) -> Position {
        self.outgoing.position()
    }

    /// Returns the exhausted form of this walk.
    #[must_use]
    pub const fn end(&self) -> Self {
        Self {
            outgoing: self.outgoing.end(),
        }
    }
}

impl Iterator for InEdges {
    type Item = (Edge, usize);

    fn next(&mut self) -> Option<Self::Item> {
        self.outgoing
            .next()
            .map(|(edge, neighbour)| (edge.reversed(), neighbour))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.outgoing.size_hint()
    }
}

impl ExactSizeIterator for InEdges {}

impl FusedIterator for InEdges {}

/// Yields the two neighbours of a vertex in incidence order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Neighbors {
    incident: IncidentEdges,
}

impl Neighbors {
    pub(crate) const fn new(incident: IncidentEdges) -> Self {
        Self { incident }
    }
}

impl Iterator for Neighbors {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        self.incident.next().map(|(_, neighbour)| neighbour)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.incident.size_hint()
    }
}

impl ExactSizeIterator for Neighbors {}

impl FusedIterator for Neighbors {}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    fn order(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).expect("test orders are non-zero")
    }

    #[test]
    fn walks_next_then_prev_then_stops() {
        let mut iter = IncidentEdges::new(2, order(5));
        assert_eq!(iter.position(), Position::Next);
        assert_eq!(iter.next(), Some((Edge::new(2, 3), 3)));
        assert_eq!(iter.position(), Position::Prev);
        assert_eq!(iter.next(), Some((Edge::new(2, 1), 1)));
        assert_eq!(iter.position(), Position::End);
        assert_eq!(iter.next(), None);
        assert_eq!(iter.position(), Position::End);
    }

    #[test]
    fn equality_depends_on_position_only() {
        let mut first = IncidentEdges::new(0, order(5));
        let second = IncidentEdges::new(3, order(9));
        assert_eq!(first, second);
        first.next();
        assert_ne!(first, second);
    }

    #[test]
    fn exhausted_iterators_match_any_end() {
        let mut walked = IncidentEdges::new(1, order(4));
        walked.by_ref().for_each(drop);
        let mut other = IncidentEdges::new(0, order(2));
        other.nth(1);
        assert_eq!(walked, other);
    }

    #[rstest]
    #[case(Position::Next, 2)]
    #[case(Position::Prev, 1)]
    #[case(Position::End, 0)]
    fn size_hint_tracks_position(#[case] position: Position, #[case] expected: usize) {
        let iter = IncidentEdges {
            vertex: 0,
            order: order(5),
            position,
        };
        assert_eq!(iter.len(), expected);
    }

    #[test]
    fn in_edges_point_at_the_vertex() {
        let incoming: Vec<_> = InEdges::new(0, order(5)).collect();
        assert_eq!(incoming, [(Edge::new(1, 0), 1), (Edge::new(4, 0), 4)]);
    }

    #[test]
    fn neighbours_follow_incidence_order() {
        let neighbours: Vec<_> = Neighbors::new(IncidentEdges::new(4, order(5))).collect();
        assert_eq!(neighbours, [0, 3]);
    }

    #[test]
    fn single_vertex_loops_twice() {
        let incident: Vec<_> = IncidentEdges::new(0, order(1)).collect();
        assert_eq!(incident, [(Edge::new(0, 0), 0), (Edge::new(0, 0), 0)]);
    }
}
