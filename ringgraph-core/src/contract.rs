//! Capability traits that generic graph algorithms are written against.
//!
//! Each capability is a separate trait. A graph that cannot answer a query
//! simply does not implement the corresponding trait, so missing support is
//! a compile error at the call site rather than a placeholder type. The
//! [`Capabilities`] descriptor summarises which traits a graph type
//! implements for code that needs to inspect support at runtime.
//!
//! Iterators are associated types, so implementations avoid both allocation
//! and dynamic dispatch.

use crate::Result;

/// Identifier types shared by every capability trait.
pub trait GraphBase {
    /// Type used to identify vertices. Usually a small dense index.
    type Vertex: Copy + Eq;

    /// Type used to identify edges.
    type Edge: Copy + Eq;

    /// Returns the endpoint an edge was produced from.
    fn source(&self, edge: Self::Edge) -> Self::Vertex;

    /// Returns the endpoint an edge leads to.
    fn target(&self, edge: Self::Edge) -> Self::Vertex;
}

/// A graph whose vertex set can be enumerated.
pub trait VertexListGraph: GraphBase {
    /// Iterator over all vertices.
    ///
    /// The order is stable for a given graph value.
    type Vertices<'a>: Iterator<Item = Self::Vertex>
    where
        Self: 'a;

    /// Returns an iterator over all vertices.
    fn vertices(&self) -> Self::Vertices<'_>;

    /// Returns the number of vertices.
    fn order(&self) -> usize;
}

/// A graph that can report the edges leaving a vertex.
pub trait IncidenceGraph: GraphBase {
    /// Iterator over `(edge, neighbour)` pairs leaving one vertex.
    ///
    /// Every produced edge has the queried vertex as its source.
    type IncidentEdges<'a>: Iterator<Item = (Self::Edge, Self::Vertex)>
    where
        Self: 'a;

    /// Returns the edges leaving `vertex`, paired with the neighbour reached.
    ///
    /// # Errors
    /// Fails when `vertex` does not belong to the graph.
    fn incident_edges(&self, vertex: Self::Vertex) -> Result<Self::IncidentEdges<'_>>;

    /// Returns the number of edges leaving `vertex`.
    ///
    /// # Errors
    /// Fails when `vertex` does not belong to the graph.
    fn degree(&self, vertex: Self::Vertex) -> Result<usize>;
}

/// A graph that can list the neighbours of a vertex directly.
pub trait AdjacencyGraph: IncidenceGraph {
    /// Iterator over the neighbours of one vertex, in incidence order.
    type Neighbors<'a>: Iterator<Item = Self::Vertex>
    where
        Self: 'a;

    /// Returns the neighbours of `vertex`.
    ///
    /// # Errors
    /// Fails when `vertex` does not belong to the graph.
    fn neighbors(&self, vertex: Self::Vertex) -> Result<Self::Neighbors<'_>>;
}

/// A graph that can also report the edges arriving at a vertex.
pub trait BidirectionalGraph: IncidenceGraph {
    /// Iterator over `(edge, neighbour)` pairs arriving at one vertex.
    ///
    /// Every produced edge has the queried vertex as its target.
    type InEdges<'a>: Iterator<Item = (Self::Edge, Self::Vertex)>
    where
        Self: 'a;

    /// Returns the edges arriving at `vertex`, paired with their origin.
    ///
    /// # Errors
    /// Fails when `vertex` does not belong to the graph.
    fn in_edges(&self, vertex: Self::Vertex) -> Result<Self::InEdges<'_>>;

    /// Returns the number of edges arriving at `vertex`.
    ///
    /// # Errors
    /// Fails when `vertex` does not belong to the graph.
    fn in_degree(&self, vertex: Self::Vertex) -> Result<usize>;
}

/// A graph whose edge set can be enumerated without duplicates.
pub trait EdgeListGraph: GraphBase {
    /// Iterator over all edges, each emitted once.
    type Edges<'a>: Iterator<Item = Self::Edge>
    where
        Self: 'a;

    /// Returns an iterator over all edges.
    fn edges(&self) -> Self::Edges<'_>;

    /// Returns the number of edges.
    fn size(&self) -> usize;
}

/// A graph that can look up the edge joining two vertices.
pub trait AdjacencyMatrix: GraphBase {
    /// Returns the edge from `source` to `target` when they are adjacent.
    ///
    /// # Errors
    /// Fails when either vertex does not belong to the graph.
    fn edge(&self, source: Self::Vertex, target: Self::Vertex) -> Result<Option<Self::Edge>>;
}

/// A graph whose edges carry a floating point weight.
pub trait WeightedGraph: GraphBase {
    /// Returns the weight of `edge`.
    ///
    /// # Errors
    /// Fails when `edge` is not an edge of the graph.
    fn weight(&self, edge: Self::Edge) -> Result<f32>;
}

/// Whether edges have an inherent direction.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Directedness {
    /// Every edge can be traversed from either endpoint.
    Undirected,
    /// Edges can only be traversed from source to target.
    Directed,
}

/// One query family a graph may support.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Capability {
    /// [`IncidenceGraph`].
    Incidence,
    /// [`AdjacencyGraph`].
    Adjacency,
    /// [`BidirectionalGraph`].
    Bidirectional,
    /// [`VertexListGraph`].
    VertexList,
    /// [`EdgeListGraph`].
    EdgeList,
    /// [`AdjacencyMatrix`].
    AdjacencyMatrix,
    /// [`WeightedGraph`].
    Weighted,
}

impl Capability {
    /// Returns every capability in declaration order.
    #[must_use]
    pub const fn all() -> [Self; 7] {
        [
            Self::Incidence,
            Self::Adjacency,
            Self::Bidirectional,
            Self::VertexList,
            Self::EdgeList,
            Self::AdjacencyMatrix,
            Self::Weighted,
        ]
    }
}

/// Flags describing the capability traits a graph type implements.
///
/// # Examples
/// ```
/// use ringgraph_core::{Capability, Described, Directedness, RingGraph};
///
/// let caps = RingGraph::CAPABILITIES;
/// assert_eq!(caps.directedness, Directedness::Undirected);
/// assert!(caps.supports(Capability::Bidirectional));
/// assert!(caps.supports(Capability::AdjacencyMatrix));
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Capabilities {
    /// Edge orientation semantics.
    pub directedness: Directedness,
    /// Implements [`IncidenceGraph`].
    pub incidence: bool,
    /// Implements [`AdjacencyGraph`].
    pub adjacency: bool,
    /// Implements [`BidirectionalGraph`].
    pub bidirectional: bool,
    /// Implements [`VertexListGraph`].
    pub vertex_list: bool,
    /// Implements [`EdgeListGraph`].
    pub edge_list: bool,
    /// Implements [`AdjacencyMatrix`].
    pub adjacency_matrix: bool,
    /// Implements [`WeightedGraph`].
    pub weighted: bool,
}

impl Capabilities {
    /// Returns `true` when the flag for `capability` is set.
    #[must_use]
    pub const fn supports(&self, capability: Capability) -> bool {
        match capability {
            Capability::Incidence => self.incidence,
            Capability::Adjacency => self.adjacency,
            Capability::Bidirectional => self.bidirectional,
            Capability::VertexList => self.vertex_list,
            Capability::EdgeList => self.edge_list,
            Capability::AdjacencyMatrix => self.adjacency_matrix,
            Capability::Weighted => self.weighted,
        }
    }

    /// Iterates over the supported capabilities in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Capability> + '_ {
        Capability::all()
            .into_iter()
            .filter(|capability| self.supports(*capability))
    }
}

/// Attaches a [`Capabilities`] descriptor to a graph type.
pub trait Described {
    /// Capability flags of the implementing type.
    const CAPABILITIES: Capabilities;
}

/// Every capability a topology must supply to stand in for an explicit
/// adjacency-list graph.
///
/// Implemented automatically for any type implementing all capability
/// traits and [`Described`].
pub trait GraphContract:
    VertexListGraph
    + AdjacencyGraph
    + BidirectionalGraph
    + EdgeListGraph
    + AdjacencyMatrix
    + WeightedGraph
    + Described
{
}

impl<T> GraphContract for T where
    T: VertexListGraph
        + AdjacencyGraph
        + BidirectionalGraph
        + EdgeListGraph
        + AdjacencyMatrix
        + WeightedGraph
        + Described
{
}
