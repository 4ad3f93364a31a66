//! Edge values produced by the ring graph.

use std::fmt;

/// An ordered `(source, target)` pair describing one undirected ring edge.
///
/// The `source` is the endpoint the edge was produced from: the vertex whose
/// incidence was queried, or the owning vertex during global enumeration.
/// Two edges with swapped endpoints describe the same connection but are
/// distinct values; use [`Edge::same_connection`] to compare connections.
///
/// # Examples
/// ```
/// use ringgraph_core::Edge;
///
/// let edge = Edge::new(4, 0);
/// assert_eq!(edge.source(), 4);
/// assert_eq!(edge.target(), 0);
/// assert_ne!(edge, edge.reversed());
/// assert!(edge.same_connection(edge.reversed()));
/// assert_eq!(edge.to_string(), "<4, 0>");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, PartialOrd, Ord)]
pub struct Edge {
    source: usize,
    target: usize,
}

impl Edge {
    /// Creates an edge from `source` to `target`.
    #[must_use]
    pub const fn new(source: usize, target: usize) -> Self {
        Self { source, target }
    }

    /// Returns the endpoint the edge was produced from.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the endpoint the edge leads to.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the same connection viewed from the other endpoint.
    #[must_use]
    pub const fn reversed(self) -> Self {
        Self {
            source: self.target,
            target: self.source,
        }
    }

    /// Returns `true` when the edge starts and ends at the same vertex.
    #[must_use]
    pub const fn is_loop(&self) -> bool {
        self.source == self.target
    }

    /// Returns `true` when both edges join the same unordered pair of vertices.
    #[must_use]
    pub const fn same_connection(&self, other: Self) -> bool {
        (self.source == other.source && self.target == other.target)
            || (self.source == other.target && self.target == other.source)
    }

    /// Returns the endpoints ordered as `(min, max)`.
    #[must_use]
    pub fn canonical(&self) -> (usize, usize) {
        (self.source.min(self.target), self.source.max(self.target))
    }
}

impl From<(usize, usize)> for Edge {
    fn from((source, target): (usize, usize)) -> Self {
        Self::new(source, target)
    }
}

impl From<Edge> for (usize, usize) {
    fn from(edge: Edge) -> Self {
        (edge.source, edge.target)
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}, {}>", self.source, self.target)
    }
}
