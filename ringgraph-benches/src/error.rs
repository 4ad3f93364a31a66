//! Benchmark setup error type.
//!
//! Lets setup functions propagate failures with `?` instead of using
//! `.expect()`.

use ringgraph_core::{GraphError, SearchError};

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// The ring could not be constructed.
    #[error("ring construction failed: {0}")]
    Graph(#[from] GraphError),
    /// The warm-up search failed.
    #[error("shortest path search failed: {0}")]
    Search(#[from] SearchError),
}
