//! Read-only edge weights for the ring graph.
//!
//! Every ring edge weighs [`UNIT_WEIGHT`]. Lookups validate the edge first:
//! a pair whose endpoints are not neighbours on the ring has no weight.

use std::num::NonZeroUsize;

use crate::{
    Result,
    edge::Edge,
    error::GraphError,
    topology::are_adjacent,
};

/// Weight carried by every edge of a ring.
pub const UNIT_WEIGHT: f32 = 1.0;

/// Read-only mapping from keys to values.
///
/// Generic algorithms can accept a property map instead of the whole graph
/// when they only need one attribute.
pub trait ReadablePropertyMap {
    /// Lookup key, for example an edge.
    type Key: Copy;
    /// Value stored against each key.
    type Value;

    /// Returns the value associated with `key`.
    ///
    /// # Errors
    /// Fails when `key` is not part of the map's domain.
    fn get(&self, key: Self::Key) -> Result<Self::Value>;
}

/// Property map from ring edges to their weights.
///
/// The map stores nothing beyond the ring order; it is `Copy` and can be
/// shared freely between readers.
///
/// # Examples
/// ```
/// use ringgraph_core::{Edge, GraphError, ReadablePropertyMap, RingGraph};
///
/// let weights = RingGraph::new(5)?.weight_map();
/// assert_eq!(weights.get(Edge::new(4, 0))?, 1.0);
/// assert!(matches!(
///     weights.get(Edge::new(0, 2)),
///     Err(GraphError::InvalidEdge { left: 0, right: 2, order: 5 })
/// ));
/// # Ok::<(), GraphError>(())
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct EdgeWeightMap {
    order: NonZeroUsize,
}

impl EdgeWeightMap {
    pub(crate) const fn new(order: NonZeroUsize) -> Self {
        Self { order }
    }
}

impl ReadablePropertyMap for EdgeWeightMap {
    type Key = Edge;
    type Value = f32;

    fn get(&self, key: Edge) -> Result<f32> {
        edge_weight(key, self.order)
    }
}

/// Returns the weight of `edge` in a ring of `order` vertices.
///
/// # Errors
/// Returns [`GraphError::OutOfRange`] when an endpoint lies outside the ring
/// and [`GraphError::InvalidEdge`] when the endpoints are not neighbours.
pub(crate) const fn edge_weight(edge: Edge, order: NonZeroUsize) -> Result<f32> {
    let n = order.get();
    if edge.source() >= n {
        return Err(GraphError::OutOfRange {
            vertex: edge.source(),
            order: n,
        });
    }
    if edge.target() >= n {
        return Err(GraphError::OutOfRange {
            vertex: edge.target(),
            order: n,
        });
    }
    if !are_adjacent(edge.source(), edge.target(), order) {
        return Err(GraphError::InvalidEdge {
            left: edge.source(),
            right: edge.target(),
            order: n,
        });
    }
    Ok(UNIT_WEIGHT)
}
