//! Argument parsing, report assembly and rendering for the ringgraph CLI.

use std::io::{self, Write};

use clap::Parser;
use ringgraph_core::{
    AdjacencyGraph, Edge, EdgeListGraph, GraphError, GraphErrorCode, IncidenceGraph, RingGraph,
    SearchError, ShortestPaths, VertexListGraph, WeightedGraph, shortest_paths,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

const DEFAULT_ORDER: usize = 5;

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "ringgraph",
    about = "Inspect an implicit ring graph and its shortest paths."
)]
pub struct Cli {
    /// Number of vertices in the ring.
    #[arg(default_value_t = DEFAULT_ORDER, value_parser = clap::value_parser!(usize))]
    pub order: usize,

    /// Vertex the shortest-path search starts from.
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(usize))]
    pub source: usize,
}

/// Errors surfaced while executing the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// The ring could not be built or queried.
    #[error(transparent)]
    Graph(#[from] GraphError),
    /// The shortest-path search failed.
    #[error(transparent)]
    Search(#[from] SearchError),
}

impl CliError {
    /// Returns the stable code of the underlying failure.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Graph(error) => error.code().as_str(),
            Self::Search(error) => error.code().as_str(),
        }
    }

    /// Returns the graph error code when a graph query failed, including
    /// failures surfaced through the search.
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph(error) => Some(error.code()),
            Self::Search(error) => error.graph_code(),
        }
    }
}

/// Incidence of one vertex as listed in the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VertexRow {
    /// Vertex described by the row.
    pub vertex: usize,
    /// Edges leaving the vertex, in visit order.
    pub incident: Vec<Edge>,
    /// Neighbours of the vertex, in visit order.
    pub neighbours: Vec<usize>,
}

/// Everything the CLI prints about one ring.
#[derive(Debug, Clone)]
pub struct RingReport {
    /// Number of vertices.
    pub order: usize,
    /// One row per vertex.
    pub vertices: Vec<VertexRow>,
    /// Every edge with its weight, in enumeration order.
    pub edges: Vec<(Edge, f32)>,
    /// Shortest paths from the requested origin.
    pub paths: ShortestPaths,
}

/// Builds the ring described by `cli` and assembles its report.
///
/// # Errors
/// Returns [`CliError`] when the order is zero or the origin lies outside
/// the ring.
///
/// # Examples
/// ```
/// use ringgraph_cli::cli::{Cli, run_cli};
///
/// let report = run_cli(Cli { order: 5, source: 0 })?;
/// assert_eq!(report.edges.len(), 5);
/// assert_eq!(report.paths.distances(), [0.0, 1.0, 2.0, 2.0, 1.0]);
/// # Ok::<(), ringgraph_cli::cli::CliError>(())
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(order = field::Empty, source = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<RingReport, CliError> {
    let span = Span::current();
    span.record("order", cli.order);
    span.record("source", cli.source);

    let graph = RingGraph::new(cli.order)?;
    let report = build_report(&graph, cli.source)?;
    info!(
        order = report.order,
        edges = report.edges.len(),
        shape = ?graph.shape(),
        "report assembled"
    );
    Ok(report)
}

pub(super) fn build_report(graph: &RingGraph, source: usize) -> Result<RingReport, CliError> {
    let vertices = graph
        .vertices()
        .map(|vertex| -> Result<VertexRow, GraphError> {
            Ok(VertexRow {
                vertex,
                incident: graph.incident_edges(vertex)?.map(|(edge, _)| edge).collect(),
                neighbours: graph.neighbors(vertex)?.collect(),
            })
        })
        .collect::<Result<Vec<_>, GraphError>>()?;
    let edges = graph
        .edges()
        .map(|edge| graph.weight(edge).map(|weight| (edge, weight)))
        .collect::<Result<Vec<_>, GraphError>>()?;
    let paths = shortest_paths(graph, source)?;
    Ok(RingReport {
        order: graph.order(),
        vertices,
        edges,
        paths,
    })
}

/// Renders `report` to `writer` as three blank-line separated sections.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// use ringgraph_cli::cli::{Cli, render_report, run_cli};
///
/// let report = run_cli(Cli { order: 1, source: 0 })?;
/// let mut buffer = Vec::new();
/// render_report(&report, &mut buffer)?;
/// let text = String::from_utf8(buffer)?;
/// assert!(text.starts_with("Vertices, incident edges, and adjacent vertices\n"));
/// assert!(text.contains("<0, 0> weight 1\n"));
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn render_report(report: &RingReport, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "Vertices, incident edges, and adjacent vertices")?;
    for row in &report.vertices {
        write!(writer, "Vertex {}: ", row.vertex)?;
        for edge in &row.incident {
            write!(writer, "{edge}  ")?;
        }
        write!(writer, " Adjacent vertices")?;
        for neighbour in &row.neighbours {
            write!(writer, " {neighbour}")?;
        }
        writeln!(writer)?;
    }
    writeln!(writer, "{} vertices", report.order)?;

    writeln!(writer)?;
    writeln!(writer, "Edges and weights")?;
    for (edge, weight) in &report.edges {
        writeln!(writer, "{edge} weight {weight}")?;
    }
    writeln!(writer, "{} edges", report.edges.len())?;

    writeln!(writer)?;
    writeln!(writer, "Shortest paths from vertex {}", report.paths.source())?;
    for (vertex, distance, parent) in report.paths.iter() {
        writeln!(writer, "Vertex {vertex}: distance {distance}, parent {parent}")?;
    }
    Ok(())
}
