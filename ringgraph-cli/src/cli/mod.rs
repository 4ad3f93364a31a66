//! Command-line interface for inspecting a ring graph.
//!
//! The binary builds a ring, lists its incidence and edges, and prints the
//! shortest paths from one origin vertex.

mod commands;

pub use commands::{Cli, CliError, RingReport, VertexRow, render_report, run_cli};
