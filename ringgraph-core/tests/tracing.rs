//! Instrumentation emitted by graph construction, search and conformance.

use ringgraph_core::{ConformanceCheck, RingGraph, SearchError, check_conformance, shortest_paths};
use ringgraph_test_support::tracing::capture;
use rstest::rstest;
use tracing::Level;

#[rstest]
fn construction_logs_order_and_shape() {
    let (graph, layer) = capture(|| RingGraph::new(2));
    graph.expect("two vertices form a ring");
    let event = layer
        .event_with_message("ring graph constructed")
        .expect("construction event must exist");
    assert_eq!(event.level, Level::DEBUG);
    assert_eq!(event.field("order"), Some("2"));
    assert_eq!(event.field("shape"), Some("Digon"));
}

#[rstest]
fn search_records_order_and_reached() {
    let graph = RingGraph::new(5).expect("valid ring");
    let (paths, layer) = capture(|| shortest_paths(&graph, 0));
    paths.expect("origin is in range");

    let span = layer
        .span_named("search.shortest_paths")
        .expect("search span must exist");
    assert_eq!(span.field("source"), Some("0"));
    assert_eq!(span.field("order"), Some("5"));
    assert_eq!(span.field("reached"), Some("5"));
    assert!(layer.has_event(Level::DEBUG, "shortest path search completed"));
}

#[rstest]
fn failed_search_emits_error_event() {
    let graph = RingGraph::new(3).expect("valid ring");
    let (paths, layer) = capture(|| shortest_paths(&graph, 7));
    let err = paths.expect_err("origin out of range");
    assert!(matches!(err, SearchError::SourceOutOfRange { origin: 7, .. }));

    let span = layer
        .span_named("search.shortest_paths")
        .expect("search span must exist");
    assert_eq!(span.field("reached"), None);
    assert!(layer.events().iter().any(|event| event.level == Level::ERROR));
}

#[rstest]
fn conformance_run_is_instrumented() {
    let graph = RingGraph::new(4).expect("valid ring");
    let (report, layer) = capture(|| check_conformance(&graph));
    report.expect("ring conforms");

    let span = layer
        .span_named("conformance.check_all")
        .expect("conformance span must exist");
    assert_eq!(span.field("order"), Some("4"));
    assert_eq!(span.field("size"), Some("4"));
    let passed = layer
        .events()
        .iter()
        .filter(|event| event.message() == Some("conformance check passed"))
        .count();
    assert_eq!(passed, ConformanceCheck::all().len());
}
