//! Graph-wide edge enumeration.
//!
//! Each ring edge is emitted exactly once, from the vertex that owns it under
//! [`EdgeOwnership::NextEdgeSource`]. Enumeration walks the vertices in
//! ascending order and asks the rule for each vertex's owned edge, so the
//! result never depends on incidental iteration details.

use std::iter::FusedIterator;
use std::num::NonZeroUsize;

use crate::{
    edge::Edge,
    topology::{Direction, are_adjacent, incident_edge, neighbor},
    vertices::VertexIter,
};

/// Rule assigning every ring edge to exactly one owning vertex.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum EdgeOwnership {
    /// A vertex owns the edge it reaches in the [`Direction::Next`]
    /// direction, so `(u, (u + 1) mod n)` is emitted by `u` and never by its
    /// other endpoint.
    #[default]
    NextEdgeSource,
}

impl EdgeOwnership {
    /// Returns the edge `owner` is responsible for emitting.
    #[must_use]
    pub const fn owned_edge(self, owner: usize, order: NonZeroUsize) -> Edge {
        match self {
            Self::NextEdgeSource => incident_edge(owner, Direction::Next, order),
        }
    }

    /// Returns the vertex that owns the connection described by `edge`.
    ///
    /// Either orientation of a genuine ring edge is accepted. Returns `None`
    /// when the endpoints are out of range or not adjacent. In a two-vertex
    /// ring both orientations are distinct parallel edges, so the edge's own
    /// source is reported as its owner.
    ///
    /// # Examples
    /// ```
    /// use std::num::NonZeroUsize;
    /// use ringgraph_core::{Edge, EdgeOwnership};
    ///
    /// let order = NonZeroUsize::new(5).expect("non-zero");
    /// let rule = EdgeOwnership::NextEdgeSource;
    /// assert_eq!(rule.owner(Edge::new(4, 0), order), Some(4));
    /// assert_eq!(rule.owner(Edge::new(0, 4), order), Some(4));
    /// assert_eq!(rule.owner(Edge::new(0, 2), order), None);
    /// ```
    #[must_use]
    pub const fn owner(self, edge: Edge, order: NonZeroUsize) -> Option<usize> {
        if !are_adjacent(edge.source(), edge.target(), order) {
            return None;
        }
        match self {
            Self::NextEdgeSource => {
                if neighbor(edge.source(), Direction::Next, order) == edge.target() {
                    Some(edge.source())
                } else {
                    Some(edge.target())
                }
            }
        }
    }
}

/// Iterator over every edge of a ring, one per owning vertex.
///
/// # Examples
/// ```
/// use ringgraph_core::{Edge, EdgeListGraph, RingGraph};
///
/// let graph = RingGraph::new(3)?;
/// let edges: Vec<_> = graph.edges().collect();
/// assert_eq!(edges, [Edge::new(0, 1), Edge::new(1, 2), Edge::new(2, 0)]);
/// # Ok::<(), ringgraph_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct EdgeIter {
    owners: VertexIter,
    order: NonZeroUsize,
    rule: EdgeOwnership,
}

impl EdgeIter {
    pub(crate) const fn new(order: NonZeroUsize) -> Self {
        Self {
            owners: VertexIter::new(order.get()),
            order,
            rule: EdgeOwnership::NextEdgeSource,
        }
    }

    /// Returns the ownership rule driving the enumeration.
    #[must_use]
    #[rustfmt::skip]
    pub const fn rule(&self) -> EdgeOwnership { self.rule }
}

impl Iterator for EdgeIter {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        let owner = self.owners.next()?;
        Some(self.rule.owned_edge(owner, self.order))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.owners.size_hint()
    }
}

impl DoubleEndedIterator for EdgeIter {
    fn next_back(&mut self) -> Option<Self::Item> {
        let owner = self.owners.next_back()?;
        Some(self.rule.owned_edge(owner, self.order))
    }
}

impl ExactSizeIterator for EdgeIter {}

impl FusedIterator for EdgeIter {}
