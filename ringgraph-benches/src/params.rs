//! Benchmark parameter types.
//!
//! Each struct renders as the Criterion benchmark id, so reports read
//! `n=1000` rather than a bare number.

use std::fmt;

use ringgraph_core::RingGraph;

use crate::{error::BenchSetupError, workload};

/// Parameters for an edge enumeration benchmark run.
#[derive(Clone, Debug)]
pub struct RingBenchParams {
    /// Number of vertices in the ring.
    pub order: usize,
}

impl RingBenchParams {
    /// Builds the ring and runs both sweeps once.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::Graph`] when `order` is zero or a sweep
    /// fails.
    pub fn build(&self) -> Result<RingGraph, BenchSetupError> {
        let graph = RingGraph::new(self.order)?;
        workload::total_weight(&graph)?;
        workload::degree_sum(&graph)?;
        Ok(graph)
    }
}

impl fmt::Display for RingBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={}", self.order)
    }
}

/// Parameters for a shortest-path benchmark run.
#[derive(Clone, Debug)]
pub struct SearchBenchParams {
    /// Number of vertices in the ring.
    pub order: usize,
    /// Vertex the search starts from.
    pub source: usize,
}

impl SearchBenchParams {
    /// Builds the ring and checks that the origin lies inside it.
    ///
    /// # Errors
    /// Returns [`BenchSetupError`] when the ring is empty or the origin is
    /// out of range.
    pub fn build(&self) -> Result<RingGraph, BenchSetupError> {
        let graph = RingGraph::new(self.order)?;
        ringgraph_core::shortest_paths(&graph, self.source)?;
        Ok(graph)
    }
}

impl fmt::Display for SearchBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},s={}", self.order, self.source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case(RingBenchParams { order: 100 }.to_string(), "n=100")]
    #[case(SearchBenchParams { order: 8, source: 3 }.to_string(), "n=8,s=3")]
    fn params_render_as_benchmark_ids(#[case] rendered: String, #[case] expected: &str) {
        assert_eq!(rendered, expected);
    }

    #[rstest]
    fn empty_ring_fails_setup() {
        let err = RingBenchParams { order: 0 }
            .build()
            .expect_err("zero vertices must be rejected");
        assert!(matches!(err, BenchSetupError::Graph(_)));
    }

    #[rstest]
    fn out_of_range_origin_fails_setup() {
        let err = SearchBenchParams { order: 4, source: 4 }
            .build()
            .expect_err("origin outside the ring must be rejected");
        assert!(matches!(err, BenchSetupError::Search(_)));
    }
}
