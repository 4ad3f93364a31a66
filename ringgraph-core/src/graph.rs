//! The implicit ring graph.
//!
//! [`RingGraph`] stores only its vertex count. Vertices, edges, neighbours
//! and weights are computed on demand by the [`crate::topology`] functions,
//! so the graph is `Copy` and can be shared between any number of readers.

use std::num::NonZeroUsize;

use tracing::debug;

use crate::{
    Result,
    contract::{
        AdjacencyGraph, AdjacencyMatrix, BidirectionalGraph, Capabilities, Described,
        Directedness, EdgeListGraph, GraphBase, IncidenceGraph, VertexListGraph, WeightedGraph,
    },
    edge::Edge,
    edges::EdgeIter,
    error::GraphError,
    incidence::{InEdges, IncidentEdges, Neighbors},
    topology::{Direction, RingShape, are_adjacent, neighbor},
    vertices::VertexIter,
    weight::{EdgeWeightMap, edge_weight},
};

/// Every vertex of a ring has one edge in each direction.
const RING_DEGREE: usize = 2;

/// Undirected graph of `order` vertices arranged in a ring.
///
/// Vertex `i` is adjacent to `i - 1` and `i + 1`, and vertex `0` is also
/// adjacent to vertex `order - 1`. For `order = 5` the ring looks like:
///
/// ```text
///       0
///     /   \
///    4     1
///    |     |
///    3 --- 2
/// ```
///
/// Rings with one or two vertices follow the boundary policy described by
/// [`RingShape`]: a single vertex carries a self-loop and two vertices are
/// joined by a doubled connection.
///
/// # Examples
/// ```
/// use ringgraph_core::{AdjacencyGraph, EdgeListGraph, RingGraph, VertexListGraph};
///
/// let graph = RingGraph::new(5)?;
/// assert_eq!(graph.order(), 5);
/// assert_eq!(graph.size(), 5);
/// assert_eq!(graph.neighbors(0)?.collect::<Vec<_>>(), [1, 4]);
/// # Ok::<(), ringgraph_core::GraphError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct RingGraph {
    order: NonZeroUsize,
}

impl RingGraph {
    /// Creates a ring of `order` vertices.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidTopology`] when `order` is zero.
    ///
    /// # Examples
    /// ```
    /// use ringgraph_core::{GraphError, RingGraph};
    ///
    /// assert!(RingGraph::new(3).is_ok());
    /// assert_eq!(RingGraph::new(0), Err(GraphError::InvalidTopology { order: 0 }));
    /// ```
    pub fn new(order: usize) -> Result<Self> {
        let order = NonZeroUsize::new(order).ok_or(GraphError::InvalidTopology { order })?;
        let graph = Self::with_order(order);
        debug!(order = order.get(), shape = ?graph.shape(), "ring graph constructed");
        Ok(graph)
    }

    /// Creates a ring from a vertex count that is already known to be
    /// non-zero.
    #[must_use]
    pub const fn with_order(order: NonZeroUsize) -> Self {
        Self { order }
    }

    /// Returns the vertex count as a [`NonZeroUsize`].
    #[must_use]
    #[rustfmt::skip]
    pub const fn order_non_zero(&self) -> NonZeroUsize { self.order }

    /// Returns the boundary policy in effect for this ring.
    #[must_use]
    pub const fn shape(&self) -> RingShape {
        RingShape::of(self.order)
    }

    /// Returns `true` when `vertex` lies in `[0, order)`.
    #[must_use]
    pub const fn contains(&self, vertex: usize) -> bool {
        vertex < self.order.get()
    }

    /// Returns the vertex reached from `vertex` in `direction`.
    ///
    /// # Errors
    /// Returns [`GraphError::OutOfRange`] when `vertex` is not in the ring.
    ///
    /// # Examples
    /// ```
    /// use ringgraph_core::{Direction, RingGraph};
    ///
    /// let graph = RingGraph::new(5)?;
    /// assert_eq!(graph.neighbor(0, Direction::Prev)?, 4);
    /// assert_eq!(graph.neighbor(4, Direction::Next)?, 0);
    /// # Ok::<(), ringgraph_core::GraphError>(())
    /// ```
    pub fn neighbor(&self, vertex: usize, direction: Direction) -> Result<usize> {
        self.check_vertex(vertex)?;
        Ok(neighbor(vertex, direction, self.order))
    }

    /// Returns the read-only weight map of this ring.
    #[must_use]
    pub const fn weight_map(&self) -> EdgeWeightMap {
        EdgeWeightMap::new(self.order)
    }

    fn check_vertex(&self, vertex: usize) -> Result<()> {
        if self.contains(vertex) {
            Ok(())
        } else {
            Err(GraphError::OutOfRange {
                vertex,
                order: self.order.get(),
            })
        }
    }
}

impl GraphBase for RingGraph {
    type Vertex = usize;
    type Edge = Edge;

    fn source(&self, edge: Edge) -> usize {
        edge.source()
    }

    fn target(&self, edge: Edge) -> usize {
        edge.target()
    }
}

impl VertexListGraph for RingGraph {
    type Vertices<'a> = VertexIter;

    fn vertices(&self) -> VertexIter {
        VertexIter::new(self.order.get())
    }

    fn order(&self) -> usize {
        self.order.get()
    }
}

impl IncidenceGraph for RingGraph {
    type IncidentEdges<'a> = IncidentEdges;

    fn incident_edges(&self, vertex: usize) -> Result<IncidentEdges> {
        self.check_vertex(vertex)?;
        Ok(IncidentEdges::new(vertex, self.order))
    }

    fn degree(&self, vertex: usize) -> Result<usize> {
        self.check_vertex(vertex)?;
        Ok(RING_DEGREE)
    }
}

impl AdjacencyGraph for RingGraph {
    type Neighbors<'a> = Neighbors;

    fn neighbors(&self, vertex: usize) -> Result<Neighbors> {
        self.incident_edges(vertex).map(Neighbors::new)
    }
}

impl BidirectionalGraph for RingGraph {
    type InEdges<'a> = InEdges;

    fn in_edges(&self, vertex: usize) -> Result<InEdges> {
        self.check_vertex(vertex)?;
        Ok(InEdges::new(vertex, self.order))
    }

    fn in_degree(&self, vertex: usize) -> Result<usize> {
        self.check_vertex(vertex)?;
        Ok(RING_DEGREE)
    }
}

impl EdgeListGraph for RingGraph {
    type Edges<'a> = EdgeIter;

    fn edges(&self) -> EdgeIter {
        EdgeIter::new(self.order)
    }

    fn size(&self) -> usize {
        // One owned edge per vertex.
        self.order.get()
    }
}

impl AdjacencyMatrix for RingGraph {
    fn edge(&self, source: usize, target: usize) -> Result<Option<Edge>> {
        self.check_vertex(source)?;
        self.check_vertex(target)?;
        Ok(are_adjacent(source, target, self.order).then(|| Edge::new(source, target)))
    }
}

impl WeightedGraph for RingGraph {
    fn weight(&self, edge: Edge) -> Result<f32> {
        edge_weight(edge, self.order)
    }
}

impl Described for RingGraph {
    const CAPABILITIES: Capabilities = Capabilities {
        directedness: Directedness::Undirected,
        incidence: true,
        adjacency: true,
        bidirectional: true,
        vertex_list: true,
        edge_list: true,
        adjacency_matrix: true,
        weighted: true,
    };
}

impl TryFrom<usize> for RingGraph {
    type Error = GraphError;

    fn try_from(order: usize) -> Result<Self> {
        Self::new(order)
    }
}
