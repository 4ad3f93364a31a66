//! Benchmark support crate for ringgraph.
//!
//! Provides the parameter types, setup errors and measured sweeps used by the
//! Criterion benchmarks for edge enumeration and shortest-path search.

pub mod error;
pub mod params;
pub mod workload;
