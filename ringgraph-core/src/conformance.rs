//! Structural conformance checks for graph contract implementations.
//!
//! [`ConformanceChecker`] exercises a graph through its capability traits and
//! reports the first structural guarantee it breaks: enumeration order,
//! incidence arity, adjacency symmetry, edge ownership and coverage, and
//! unit weights. The `require_*` functions are the compile-time half: they
//! only type-check for graphs implementing the named capabilities.

use std::collections::HashMap;

use thiserror::Error;
use tracing::{Span, debug, field, instrument};

use crate::{
    contract::{
        AdjacencyGraph, AdjacencyMatrix, BidirectionalGraph, EdgeListGraph, GraphBase,
        GraphContract, IncidenceGraph, VertexListGraph, WeightedGraph,
    },
    error::{GraphError, define_error_codes},
    weight::UNIT_WEIGHT,
};

/// Orders above this limit skip the exhaustive negative lookups of
/// [`ConformanceCheck::MatrixLookup`].
const EXHAUSTIVE_MATRIX_LIMIT: usize = 64;

/// Structural guarantees verified by [`ConformanceChecker`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ConformanceCheck {
    /// Vertices are `0..order` in ascending order.
    VertexEnumeration,
    /// Each vertex yields exactly `degree` incident edges, all sourced at it.
    Incidence,
    /// `neighbors` reports the incidence targets in the same order.
    Adjacency,
    /// Every neighbour relation holds in both directions.
    Symmetry,
    /// In-edges mirror the incident edges and point at the queried vertex.
    InEdges,
    /// `edges` yields `size` edges, each found among its source's incidence.
    EdgeOwnership,
    /// Every connection is emitted exactly as often as it occurs.
    EdgeCoverage,
    /// Every produced edge weighs one.
    UnitWeights,
    /// `edge(u, v)` agrees with adjacency.
    MatrixLookup,
}

impl ConformanceCheck {
    /// Returns all checks in the order they are evaluated.
    #[must_use]
    pub const fn all() -> [Self; 9] {
        [
            Self::VertexEnumeration,
            Self::Incidence,
            Self::Adjacency,
            Self::Symmetry,
            Self::InEdges,
            Self::EdgeOwnership,
            Self::EdgeCoverage,
            Self::UnitWeights,
            Self::MatrixLookup,
        ]
    }

    /// Returns a short label for logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::VertexEnumeration => "vertex_enumeration",
            Self::Incidence => "incidence",
            Self::Adjacency => "adjacency",
            Self::Symmetry => "symmetry",
            Self::InEdges => "in_edges",
            Self::EdgeOwnership => "edge_ownership",
            Self::EdgeCoverage => "edge_coverage",
            Self::UnitWeights => "unit_weights",
            Self::MatrixLookup => "matrix_lookup",
        }
    }
}

/// Reports a guarantee broken by the graph under test.
#[non_exhaustive]
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConformanceViolation {
    /// A graph query failed while running a check.
    #[error("{check:?} check failed to query the graph: {error}")]
    Query {
        /// Check that issued the query.
        check: ConformanceCheck,
        /// Error returned by the graph.
        #[source]
        error: GraphError,
    },
    /// The vertex at `position` was not the expected id.
    #[error("vertex enumeration yielded {found:?} at position {position}")]
    VertexOrder {
        /// Position in the enumeration.
        position: usize,
        /// Vertex found there, `None` when enumeration stopped early.
        found: Option<usize>,
    },
    /// Enumeration produced more vertices than `order` reports.
    #[error("vertex enumeration yielded {produced} vertices but order is {order}")]
    VertexCount {
        /// Reported vertex count.
        order: usize,
        /// Number of vertices produced.
        produced: usize,
    },
    /// Incidence produced a different number of edges than `degree`.
    #[error("vertex {vertex} reports degree {degree} but yields {produced} incident edges")]
    DegreeMismatch {
        /// Vertex under test.
        vertex: usize,
        /// Reported degree.
        degree: usize,
        /// Number of edges produced.
        produced: usize,
    },
    /// An incident edge was not sourced at the queried vertex, or its target
    /// disagreed with the paired neighbour.
    #[error("vertex {vertex} yields edge <{left}, {right}> paired with neighbour {neighbour}")]
    MisattributedEdge {
        /// Vertex under test.
        vertex: usize,
        /// Source of the offending edge.
        left: usize,
        /// Target of the offending edge.
        right: usize,
        /// Neighbour reported alongside the edge.
        neighbour: usize,
    },
    /// `neighbors` disagreed with the incidence targets.
    #[error("neighbours of {vertex} are {neighbours:?} but incidence reaches {expected:?}")]
    NeighbourMismatch {
        /// Vertex under test.
        vertex: usize,
        /// Neighbours reported by `neighbors`.
        neighbours: Vec<usize>,
        /// Targets of the incident edges.
        expected: Vec<usize>,
    },
    /// `to` is a neighbour of `from` but not the other way round.
    #[error("{to} is a neighbour of {from} but {from} is not a neighbour of {to}")]
    AsymmetricAdjacency {
        /// Vertex listing the neighbour.
        from: usize,
        /// Neighbour missing the reverse relation.
        to: usize,
    },
    /// In-edges disagreed with the incident edges of a vertex.
    #[error("in-edges of {vertex} do not mirror its incident edges")]
    InEdgeMismatch {
        /// Vertex under test.
        vertex: usize,
    },
    /// Edge enumeration produced a different number of edges than `size`.
    #[error("edge enumeration yielded {produced} edges but size is {size}")]
    EdgeCount {
        /// Reported edge count.
        size: usize,
        /// Number of edges produced.
        produced: usize,
    },
    /// An enumerated edge is not among the incident edges of its source.
    #[error("edge <{left}, {right}> is not incident to its source")]
    UnownedEdge {
        /// Source of the edge.
        left: usize,
        /// Target of the edge.
        right: usize,
    },
    /// A connection was emitted a different number of times than it occurs.
    #[error("connection {{{left}, {right}}} emitted {emitted} time(s) but occurs {multiplicity} time(s)")]
    ConnectionMultiplicity {
        /// Smaller endpoint.
        left: usize,
        /// Larger endpoint.
        right: usize,
        /// Times the connection appeared in `edges`.
        emitted: usize,
        /// Times the connection occurs according to incidence.
        multiplicity: usize,
    },
    /// An edge weighed something other than one.
    #[error("edge <{left}, {right}> weighs {weight}")]
    WeightMismatch {
        /// Source of the edge.
        left: usize,
        /// Target of the edge.
        right: usize,
        /// Reported weight.
        weight: f32,
    },
    /// `edge(u, v)` disagreed with adjacency.
    #[error("edge lookup for ({left}, {right}) disagrees with adjacency")]
    MatrixMismatch {
        /// Queried source.
        left: usize,
        /// Queried target.
        right: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`ConformanceViolation`] variants.
    enum ConformanceViolationCode for ConformanceViolation {
        /// A graph query failed while running a check.
        Query => Query { .. } => "CONFORMANCE_QUERY_FAILED",
        /// Vertex enumeration yielded an unexpected id.
        VertexOrder => VertexOrder { .. } => "CONFORMANCE_VERTEX_ORDER",
        /// Vertex enumeration yielded too many vertices.
        VertexCount => VertexCount { .. } => "CONFORMANCE_VERTEX_COUNT",
        /// Incidence disagreed with `degree`.
        DegreeMismatch => DegreeMismatch { .. } => "CONFORMANCE_DEGREE_MISMATCH",
        /// An incident edge had the wrong endpoints.
        MisattributedEdge => MisattributedEdge { .. } => "CONFORMANCE_MISATTRIBUTED_EDGE",
        /// `neighbors` disagreed with incidence.
        NeighbourMismatch => NeighbourMismatch { .. } => "CONFORMANCE_NEIGHBOUR_MISMATCH",
        /// Adjacency held in one direction only.
        AsymmetricAdjacency => AsymmetricAdjacency { .. } => "CONFORMANCE_ASYMMETRIC_ADJACENCY",
        /// In-edges disagreed with incidence.
        InEdgeMismatch => InEdgeMismatch { .. } => "CONFORMANCE_IN_EDGE_MISMATCH",
        /// Edge enumeration disagreed with `size`.
        EdgeCount => EdgeCount { .. } => "CONFORMANCE_EDGE_COUNT",
        /// An enumerated edge was not incident to its source.
        UnownedEdge => UnownedEdge { .. } => "CONFORMANCE_UNOWNED_EDGE",
        /// A connection was emitted too often or too rarely.
        ConnectionMultiplicity => ConnectionMultiplicity { .. } => "CONFORMANCE_CONNECTION_MULTIPLICITY",
        /// An edge weighed something other than one.
        WeightMismatch => WeightMismatch { .. } => "CONFORMANCE_WEIGHT_MISMATCH",
        /// `edge(u, v)` disagreed with adjacency.
        MatrixMismatch => MatrixMismatch { .. } => "CONFORMANCE_MATRIX_MISMATCH",
    }
}

/// Summary of a successful conformance run.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConformanceReport {
    /// Number of vertices checked.
    pub order: usize,
    /// Number of edges checked.
    pub size: usize,
    /// Checks that passed, in evaluation order.
    pub passed: Vec<ConformanceCheck>,
}

/// Runs [`ConformanceCheck`]s against a graph.
#[derive(Debug)]
pub struct ConformanceChecker<'graph, G> {
    graph: &'graph G,
}

type Outcome = Result<(), ConformanceViolation>;

impl<'graph, G> ConformanceChecker<'graph, G>
where
    G: GraphContract + GraphBase<Vertex = usize>,
{
    /// Wraps `graph` for checking.
    #[must_use]
    pub const fn new(graph: &'graph G) -> Self {
        Self { graph }
    }

    /// Runs all checks, returning the first violation encountered.
    ///
    /// # Errors
    /// Returns the [`ConformanceViolation`] raised by the first failing check.
    #[instrument(
        name = "conformance.check_all",
        err,
        skip(self),
        fields(order = field::Empty, size = field::Empty),
    )]
    pub fn check_all(&self) -> Result<ConformanceReport, ConformanceViolation> {
        let span = Span::current();
        span.record("order", self.graph.order());
        span.record("size", self.graph.size());
        let mut passed = Vec::with_capacity(ConformanceCheck::all().len());
        for check in ConformanceCheck::all() {
            self.check(check)?;
            debug!(check = check.as_str(), "conformance check passed");
            passed.push(check);
        }
        Ok(ConformanceReport {
            order: self.graph.order(),
            size: self.graph.size(),
            passed,
        })
    }

    /// Runs a single check.
    ///
    /// # Errors
    /// Returns a [`ConformanceViolation`] describing the broken guarantee.
    pub fn check(&self, check: ConformanceCheck) -> Outcome {
        match check {
            ConformanceCheck::VertexEnumeration => self.check_vertices(),
            ConformanceCheck::Incidence => self.check_incidence(),
            ConformanceCheck::Adjacency => self.check_adjacency(),
            ConformanceCheck::Symmetry => self.check_symmetry(),
            ConformanceCheck::InEdges => self.check_in_edges(),
            ConformanceCheck::EdgeOwnership => self.check_ownership(),
            ConformanceCheck::EdgeCoverage => self.check_coverage(),
            ConformanceCheck::UnitWeights => self.check_weights(),
            ConformanceCheck::MatrixLookup => self.check_matrix(),
        }
    }

    fn check_vertices(&self) -> Outcome {
        let order = self.graph.order();
        let mut vertices = self.graph.vertices();
        for position in 0..order {
            let found = vertices.next();
            if found != Some(position) {
                return Err(ConformanceViolation::VertexOrder { position, found });
            }
        }
        let extra = vertices.count();
        if extra > 0 {
            return Err(ConformanceViolation::VertexCount {
                order,
                produced: order + extra,
            });
        }
        Ok(())
    }

    fn check_incidence(&self) -> Outcome {
        let check = ConformanceCheck::Incidence;
        for vertex in self.graph.vertices() {
            let degree = self.query(check, |g| g.degree(vertex))?;
            let mut produced = 0;
            for (edge, neighbour) in self.query(check, |g| g.incident_edges(vertex))? {
                produced += 1;
                let (left, right) = self.endpoints(edge);
                if left != vertex || right != neighbour {
                    return Err(ConformanceViolation::MisattributedEdge {
                        vertex,
                        left,
                        right,
                        neighbour,
                    });
                }
            }
            if produced != degree {
                return Err(ConformanceViolation::DegreeMismatch {
                    vertex,
                    degree,
                    produced,
                });
            }
        }
        Ok(())
    }

    fn check_adjacency(&self) -> Outcome {
        for vertex in self.graph.vertices() {
            let neighbours = self.neighbours(ConformanceCheck::Adjacency, vertex)?;
            let expected: Vec<usize> = self
                .query(ConformanceCheck::Adjacency, |g| g.incident_edges(vertex))?
                .map(|(_, neighbour)| neighbour)
                .collect();
            if neighbours != expected {
                return Err(ConformanceViolation::NeighbourMismatch {
                    vertex,
                    neighbours,
                    expected,
                });
            }
        }
        Ok(())
    }

    fn check_symmetry(&self) -> Outcome {
        for from in self.graph.vertices() {
            for to in self.neighbours(ConformanceCheck::Symmetry, from)? {
                if !self.neighbours(ConformanceCheck::Symmetry, to)?.contains(&from) {
                    return Err(ConformanceViolation::AsymmetricAdjacency { from, to });
                }
            }
        }
        Ok(())
    }

    fn check_in_edges(&self) -> Outcome {
        let check = ConformanceCheck::InEdges;
        for vertex in self.graph.vertices() {
            let in_degree = self.query(check, |g| g.in_degree(vertex))?;
            let incoming: Vec<(usize, usize, usize)> = self
                .query(check, |g| g.in_edges(vertex))?
                .map(|(edge, neighbour)| {
                    let (left, right) = self.endpoints(edge);
                    (left, right, neighbour)
                })
                .collect();
            let outgoing: Vec<usize> = self
                .query(check, |g| g.incident_edges(vertex))?
                .map(|(_, neighbour)| neighbour)
                .collect();
            let mirrored = incoming.len() == in_degree
                && incoming.len() == outgoing.len()
                && incoming
                    .iter()
                    .zip(&outgoing)
                    .all(|(&(left, right, origin), &neighbour)| {
                        right == vertex && left == origin && origin == neighbour
                    });
            if !mirrored {
                return Err(ConformanceViolation::InEdgeMismatch { vertex });
            }
        }
        Ok(())
    }

    fn check_ownership(&self) -> Outcome {
        let check = ConformanceCheck::EdgeOwnership;
        let size = self.graph.size();
        let mut produced = 0;
        for edge in self.graph.edges() {
            produced += 1;
            let (left, right) = self.endpoints(edge);
            let owned = self
                .query(check, |g| g.incident_edges(left))?
                .any(|(incident, _)| incident == edge);
            if !owned {
                return Err(ConformanceViolation::UnownedEdge { left, right });
            }
        }
        if produced != size {
            return Err(ConformanceViolation::EdgeCount { size, produced });
        }
        Ok(())
    }

    fn check_coverage(&self) -> Outcome {
        let mut emitted: HashMap<(usize, usize), usize> = HashMap::new();
        for edge in self.graph.edges() {
            *emitted.entry(canonical(self.endpoints(edge))).or_insert(0) += 1;
        }

        let mut occurrences: HashMap<(usize, usize), usize> = HashMap::new();
        for vertex in self.graph.vertices() {
            for neighbour in self.neighbours(ConformanceCheck::EdgeCoverage, vertex)? {
                *occurrences.entry(canonical((vertex, neighbour))).or_insert(0) += 1;
            }
        }

        // Each connection is seen once from each endpoint; a loop is seen
        // twice from its only endpoint.
        let mut expected: Vec<((usize, usize), usize)> = occurrences
            .into_iter()
            .map(|(pair, seen)| (pair, seen / 2))
            .collect();
        expected.sort_unstable();
        for ((left, right), multiplicity) in expected {
            let count = emitted.remove(&(left, right)).unwrap_or(0);
            if count != multiplicity {
                return Err(ConformanceViolation::ConnectionMultiplicity {
                    left,
                    right,
                    emitted: count,
                    multiplicity,
                });
            }
        }
        if let Some((&(left, right), &count)) = emitted.iter().min() {
            return Err(ConformanceViolation::ConnectionMultiplicity {
                left,
                right,
                emitted: count,
                multiplicity: 0,
            });
        }
        Ok(())
    }

    fn check_weights(&self) -> Outcome {
        let check = ConformanceCheck::UnitWeights;
        for edge in self.graph.edges() {
            self.check_weight(check, edge)?;
        }
        for vertex in self.graph.vertices() {
            for (edge, _) in self.query(check, |g| g.incident_edges(vertex))? {
                self.check_weight(check, edge)?;
            }
            for (edge, _) in self.query(check, |g| g.in_edges(vertex))? {
                self.check_weight(check, edge)?;
            }
        }
        Ok(())
    }

    fn check_weight(&self, check: ConformanceCheck, edge: G::Edge) -> Outcome {
        let weight = self.query(check, |g| g.weight(edge))?;
        if weight.to_bits() != UNIT_WEIGHT.to_bits() {
            let (left, right) = self.endpoints(edge);
            return Err(ConformanceViolation::WeightMismatch {
                left,
                right,
                weight,
            });
        }
        Ok(())
    }

    fn check_matrix(&self) -> Outcome {
        let check = ConformanceCheck::MatrixLookup;
        let order = self.graph.order();
        for left in self.graph.vertices() {
            let neighbours = self.neighbours(check, left)?;
            for &right in &neighbours {
                let found = self.query(check, |g| g.edge(left, right))?;
                if found.map(|edge| self.endpoints(edge)) != Some((left, right)) {
                    return Err(ConformanceViolation::MatrixMismatch { left, right });
                }
            }
            if order > EXHAUSTIVE_MATRIX_LIMIT {
                continue;
            }
            for right in self.graph.vertices() {
                if neighbours.contains(&right) {
                    continue;
                }
                if self.query(check, |g| g.edge(left, right))?.is_some() {
                    return Err(ConformanceViolation::MatrixMismatch { left, right });
                }
            }
        }
        Ok(())
    }

    fn neighbours(
        &self,
        check: ConformanceCheck,
        vertex: usize,
    ) -> Result<Vec<usize>, ConformanceViolation> {
        Ok(self.query(check, |g| g.neighbors(vertex))?.collect())
    }

    fn endpoints(&self, edge: G::Edge) -> (usize, usize) {
        (self.graph.source(edge), self.graph.target(edge))
    }

    fn query<T>(
        &self,
        check: ConformanceCheck,
        op: impl FnOnce(&'graph G) -> crate::Result<T>,
    ) -> Result<T, ConformanceViolation> {
        op(self.graph).map_err(|error| ConformanceViolation::Query { check, error })
    }
}

fn canonical((left, right): (usize, usize)) -> (usize, usize) {
    (left.min(right), left.max(right))
}

/// Runs every [`ConformanceCheck`] against `graph`.
///
/// # Errors
/// Returns the first [`ConformanceViolation`] encountered.
///
/// # Examples
/// ```
/// use ringgraph_core::{ConformanceCheck, RingGraph, check_conformance};
///
/// let report = check_conformance(&RingGraph::new(5)?)?;
/// assert_eq!(report.order, 5);
/// assert_eq!(report.passed, ConformanceCheck::all());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn check_conformance<G>(graph: &G) -> Result<ConformanceReport, ConformanceViolation>
where
    G: GraphContract + GraphBase<Vertex = usize>,
{
    ConformanceChecker::new(graph).check_all()
}

/// Compiles only when `G` supplies the whole graph contract.
pub const fn require_graph_contract<G: GraphContract>() {}

/// Compiles only when `G` can enumerate its vertices.
pub const fn require_vertex_list<G: VertexListGraph>() {}

/// Compiles only when `G` can report incident edges.
pub const fn require_incidence<G: IncidenceGraph>() {}

/// Compiles only when `G` can list neighbours.
pub const fn require_adjacency<G: AdjacencyGraph>() {}

/// Compiles only when `G` can report in-edges.
pub const fn require_bidirectional<G: BidirectionalGraph>() {}

/// Compiles only when `G` can enumerate its edges.
pub const fn require_edge_list<G: EdgeListGraph>() {}

/// Compiles only when `G` can look up edges by endpoints.
pub const fn require_adjacency_matrix<G: AdjacencyMatrix>() {}

/// Compiles only when `G` exposes edge weights.
pub const fn require_weighted<G: WeightedGraph>() {}
