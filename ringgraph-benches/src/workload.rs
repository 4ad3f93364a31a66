//! Work measured by the traversal benchmarks.
//!
//! Both sweeps return the graph's first error instead of skipping it, so a
//! failing lookup cannot pass for a fast one.

use ringgraph_core::{AdjacencyGraph, EdgeListGraph, Result, VertexListGraph, WeightedGraph};

/// Sums the weight of every enumerated edge.
///
/// # Errors
/// Returns the first error raised by a weight lookup.
pub fn total_weight<G>(graph: &G) -> Result<f32>
where
    G: EdgeListGraph + WeightedGraph,
{
    graph.edges().map(|edge| graph.weight(edge)).sum()
}

/// Counts the neighbours of every vertex.
///
/// # Errors
/// Returns the first error raised by a neighbour query.
pub fn degree_sum<G>(graph: &G) -> Result<usize>
where
    G: VertexListGraph + AdjacencyGraph,
{
    graph
        .vertices()
        .map(|vertex| graph.neighbors(vertex).map(Iterator::count))
        .sum()
}
