//! Ring traversal benchmarks.
//!
//! Measures full edge enumeration with weight lookups, and Dijkstra search
//! from vertex 0, over rings of increasing order.
#![expect(
    missing_docs,
    reason = "Criterion macros generate items without doc comments"
)]
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};

use ringgraph_benches::{
    error::BenchSetupError,
    params::{RingBenchParams, SearchBenchParams},
    workload::{degree_sum, total_weight},
};
use ringgraph_core::shortest_paths;

/// Ring orders to benchmark.
const ORDERS: &[usize] = &[1_000, 10_000, 100_000];

fn edge_enumeration_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("edge_enumeration");

    for &order in ORDERS {
        let params = RingBenchParams { order };
        let graph = params.build()?;

        group.bench_function(BenchmarkId::new("edges", &params), |b| {
            b.iter(|| black_box(total_weight(&graph)));
        });

        group.bench_function(BenchmarkId::new("neighbors", &params), |b| {
            b.iter(|| black_box(degree_sum(&graph)));
        });
    }

    group.finish();
    Ok(())
}

fn shortest_paths_impl(c: &mut Criterion) -> Result<(), BenchSetupError> {
    let mut group = c.benchmark_group("shortest_paths");
    group.sample_size(20);

    for &order in ORDERS {
        let params = SearchBenchParams { order, source: 0 };
        let graph = params.build()?;

        group.bench_function(BenchmarkId::from_parameter(&params), |b| {
            b.iter(|| black_box(shortest_paths(&graph, params.source)));
        });
    }

    group.finish();
    Ok(())
}

fn edge_enumeration(c: &mut Criterion) {
    if let Err(err) = edge_enumeration_impl(c) {
        panic!("edge_enumeration benchmark setup failed: {err}");
    }
}

fn shortest_paths_bench(c: &mut Criterion) {
    if let Err(err) = shortest_paths_impl(c) {
        panic!("shortest_paths benchmark setup failed: {err}");
    }
}

criterion_group!(benches, edge_enumeration, shortest_paths_bench);
criterion_main!(benches);
