//! Single-source shortest paths over any weighted incidence graph.
//!
//! The search only uses the capability traits, so it runs unchanged on the
//! implicit ring or on any other graph with dense `usize` vertex ids. It
//! owns all of its working state; the graph is only read.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use thiserror::Error;
use tracing::{Span, debug, field, instrument};

use crate::{
    contract::{GraphBase, IncidenceGraph, VertexListGraph, WeightedGraph},
    error::{GraphError, define_error_codes},
};

/// Errors returned by [`shortest_paths`].
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum SearchError {
    /// The search origin is not a vertex of the graph.
    #[error("search origin {origin} is out of range for a graph of {order} vertices")]
    SourceOutOfRange {
        /// Requested search origin.
        origin: usize,
        /// Number of vertices in the graph.
        order: usize,
    },
    /// An edge reported a NaN or infinite weight.
    #[error("edge <{left}, {right}> has a non-finite weight")]
    NonFiniteWeight {
        /// Source endpoint of the edge.
        left: usize,
        /// Target endpoint of the edge.
        right: usize,
    },
    /// An edge reported a weight below zero.
    #[error("edge <{left}, {right}> has negative weight {weight}")]
    NegativeWeight {
        /// Source endpoint of the edge.
        left: usize,
        /// Target endpoint of the edge.
        right: usize,
        /// The rejected weight.
        weight: f32,
    },
    /// A graph query failed during the search.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

define_error_codes! {
    /// Stable codes describing [`SearchError`] variants.
    enum SearchErrorCode for SearchError {
        /// The search origin is not a vertex of the graph.
        SourceOutOfRange => SourceOutOfRange { .. } => "SEARCH_SOURCE_OUT_OF_RANGE",
        /// An edge reported a NaN or infinite weight.
        NonFiniteWeight => NonFiniteWeight { .. } => "SEARCH_NON_FINITE_WEIGHT",
        /// An edge reported a weight below zero.
        NegativeWeight => NegativeWeight { .. } => "SEARCH_NEGATIVE_WEIGHT",
        /// A graph query failed during the search.
        GraphFailure => Graph { .. } => "SEARCH_GRAPH_FAILURE",
    }
}

impl SearchError {
    /// Retrieve the inner graph error code when a graph query failed.
    #[must_use]
    pub const fn graph_code(&self) -> Option<crate::GraphErrorCode> {
        match self {
            Self::Graph(error) => Some(error.code()),
            _ => None,
        }
    }
}

/// Distance and parent tables produced by [`shortest_paths`].
///
/// Both tables are indexed by vertex id. The origin is its own parent;
/// vertices that cannot be reached keep an infinite distance and are also
/// their own parent.
#[derive(Clone, Debug, PartialEq)]
pub struct ShortestPaths {
    source: usize,
    distances: Vec<f32>,
    parents: Vec<usize>,
}

impl ShortestPaths {
    /// Returns the vertex the search started from.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the distance table.
    #[must_use]
    #[rustfmt::skip]
    pub fn distances(&self) -> &[f32] { &self.distances }

    /// Returns the parent table.
    #[must_use]
    #[rustfmt::skip]
    pub fn parents(&self) -> &[usize] { &self.parents }

    /// Returns the number of vertices covered by the tables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.distances.len()
    }

    /// Returns `true` when the tables are empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    /// Returns the shortest distance from the origin to `vertex`.
    #[must_use]
    pub fn distance(&self, vertex: usize) -> Option<f32> {
        self.distances.get(vertex).copied()
    }

    /// Returns the predecessor of `vertex` on its shortest path.
    #[must_use]
    pub fn parent(&self, vertex: usize) -> Option<usize> {
        self.parents.get(vertex).copied()
    }

    /// Returns `true` when `vertex` was reached by the search.
    #[must_use]
    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some_and(f32::is_finite)
    }

    /// Returns the vertices on the shortest path from the origin to
    /// `vertex`, both included.
    ///
    /// Returns `None` when `vertex` is unknown or unreachable.
    ///
    /// # Examples
    /// ```
    /// use ringgraph_core::{RingGraph, shortest_paths};
    ///
    /// let graph = RingGraph::new(5)?;
    /// let paths = shortest_paths(&graph, 0)?;
    /// assert_eq!(paths.path_to(3), Some(vec![0, 4, 3]));
    /// assert_eq!(paths.path_to(0), Some(vec![0]));
    /// assert_eq!(paths.path_to(9), None);
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    #[must_use]
    pub fn path_to(&self, vertex: usize) -> Option<Vec<usize>> {
        if !self.is_reachable(vertex) {
            return None;
        }
        let mut path = vec![vertex];
        let mut current = vertex;
        while current != self.source {
            current = self.parent(current)?;
            path.push(current);
            if path.len() > self.len() {
                return None;
            }
        }
        path.reverse();
        Some(path)
    }

    /// Iterates over `(vertex, distance, parent)` rows in vertex order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, f32, usize)> + '_ {
        self.distances
            .iter()
            .zip(&self.parents)
            .enumerate()
            .map(|(vertex, (distance, parent))| (vertex, *distance, *parent))
    }
}

/// Vertex waiting in the search frontier, ordered so that the binary heap
/// pops the smallest tentative distance first and breaks ties by the lower
/// vertex id.
#[derive(Clone, Copy, Debug)]
struct Frontier {
    vertex: usize,
    distance: f64,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .distance
            .total_cmp(&self.distance)
            .then_with(|| other.vertex.cmp(&self.vertex))
    }
}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Computes shortest distances and parents from `source` with Dijkstra's
/// algorithm.
///
/// Edges are relaxed only when they strictly improve a tentative distance,
/// and equal tentative distances are settled in ascending vertex order, so
/// the parent table is deterministic.
///
/// Path lengths are summed in `f64` and narrowed to `f32` only when the
/// tables are built. Parents stay exact on long unit-weight paths, while
/// distances above 2^24 are rounded to the nearest `f32`.
///
/// # Errors
/// Returns [`SearchError::SourceOutOfRange`] when `source` is not a vertex,
/// [`SearchError::NonFiniteWeight`] or [`SearchError::NegativeWeight`] when
/// an edge weight cannot be used, and [`SearchError::Graph`] when a graph
/// query fails or reports a neighbour outside the vertex range.
///
/// # Examples
/// ```
/// use ringgraph_core::{RingGraph, shortest_paths};
///
/// let graph = RingGraph::new(5)?;
/// let paths = shortest_paths(&graph, 0)?;
/// assert_eq!(paths.distances(), [0.0, 1.0, 2.0, 2.0, 1.0]);
/// assert_eq!(paths.parents(), [0, 0, 1, 4, 0]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "search.shortest_paths",
    err,
    skip(graph),
    fields(order = field::Empty, reached = field::Empty),
)]
pub fn shortest_paths<G>(graph: &G, source: usize) -> Result<ShortestPaths, SearchError>
where
    G: GraphBase<Vertex = usize> + VertexListGraph + IncidenceGraph + WeightedGraph,
{
    let order = graph.order();
    let span = Span::current();
    span.record("order", order);
    if source >= order {
        return Err(SearchError::SourceOutOfRange {
            origin: source,
            order,
        });
    }

    let mut tentative = vec![f64::INFINITY; order];
    let mut parents: Vec<usize> = (0..order).collect();
    let mut settled = vec![false; order];
    let mut frontier = BinaryHeap::new();

    tentative[source] = 0.0;
    frontier.push(Frontier {
        vertex: source,
        distance: 0.0,
    });

    while let Some(Frontier { vertex, distance }) = frontier.pop() {
        if std::mem::replace(&mut settled[vertex], true) {
            continue;
        }
        for (edge, neighbour) in graph.incident_edges(vertex)? {
            let weight = checked_weight(graph, edge)?;
            if neighbour >= order {
                return Err(GraphError::OutOfRange {
                    vertex: neighbour,
                    order,
                }
                .into());
            }
            let candidate = distance + f64::from(weight);
            if candidate < tentative[neighbour] {
                tentative[neighbour] = candidate;
                parents[neighbour] = vertex;
                frontier.push(Frontier {
                    vertex: neighbour,
                    distance: candidate,
                });
            }
        }
    }

    let reached = settled.iter().filter(|done| **done).count();
    span.record("reached", reached);
    debug!(source, reached, "shortest path search completed");
    #[expect(
        clippy::cast_possible_truncation,
        reason = "distance tables are exposed as f32 edge weights"
    )]
    let distances = tentative.into_iter().map(|distance| distance as f32).collect();
    Ok(ShortestPaths {
        source,
        distances,
        parents,
    })
}

fn checked_weight<G>(graph: &G, edge: G::Edge) -> Result<f32, SearchError>
where
    G: GraphBase<Vertex = usize> + WeightedGraph,
{
    let weight = graph.weight(edge)?;
    if !weight.is_finite() {
        return Err(SearchError::NonFiniteWeight {
            left: graph.source(edge),
            right: graph.target(edge),
        });
    }
    if weight < 0.0 {
        return Err(SearchError::NegativeWeight {
            left: graph.source(edge),
            right: graph.target(edge),
            weight,
        });
    }
    Ok(weight)
}
