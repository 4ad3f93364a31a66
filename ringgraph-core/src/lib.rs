//! Ring graph core library.
//!
//! Provides [`RingGraph`], an undirected cycle whose vertices, edges and
//! weights are computed on demand from the vertex count, together with the
//! capability traits generic algorithms are written against, a generic
//! [`shortest_paths`] search, and a conformance harness that checks any
//! implementation of the contract.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod conformance;
mod contract;
mod edge;
mod edges;
mod error;
mod graph;
mod incidence;
mod search;
pub mod topology;
mod vertices;
mod weight;

pub use crate::{
    conformance::{
        ConformanceCheck, ConformanceChecker, ConformanceReport, ConformanceViolation,
        ConformanceViolationCode, check_conformance, require_adjacency, require_adjacency_matrix,
        require_bidirectional, require_edge_list, require_graph_contract, require_incidence,
        require_vertex_list, require_weighted,
    },
    contract::{
        AdjacencyGraph, AdjacencyMatrix, BidirectionalGraph, Capabilities, Capability, Described,
        Directedness, EdgeListGraph, GraphBase, GraphContract, IncidenceGraph, VertexListGraph,
        WeightedGraph,
    },
    edge::Edge,
    edges::{EdgeIter, EdgeOwnership},
    error::{GraphError, GraphErrorCode, Result},
    graph::RingGraph,
    incidence::{InEdges, IncidentEdges, Neighbors, Position},
    search::{SearchError, SearchErrorCode, ShortestPaths, shortest_paths},
    topology::{Direction, RingShape},
    vertices::VertexIter,
    weight::{EdgeWeightMap, ReadablePropertyMap, UNIT_WEIGHT},
};
