//! Structural tests for `RingGraph` through the capability traits.

mod common;

use std::collections::HashSet;

use common::{ring, suite_proptest_config};
use proptest::{
    prop_assert, prop_assert_eq, proptest,
    strategy::{Just, Strategy},
};
use ringgraph_core::{
    AdjacencyGraph, BidirectionalGraph, Capability, Described, Direction, Edge, EdgeListGraph,
    EdgeOwnership, GraphBase, GraphError, GraphErrorCode, IncidenceGraph, Position, RingGraph,
    RingShape, UNIT_WEIGHT, VertexListGraph, WeightedGraph,
};
use ringgraph_test_support::scenarios::{self, RingScenario};
use rstest::rstest;

fn neighbour_pairs(graph: &RingGraph) -> Vec<[usize; 2]> {
    graph
        .vertices()
        .map(|vertex| {
            let mut neighbours = graph.neighbors(vertex).expect("vertex is in range");
            [
                neighbours.next().expect("first neighbour"),
                neighbours.next().expect("second neighbour"),
            ]
        })
        .collect()
}

#[rstest]
#[case::self_loop(scenarios::SELF_LOOP)]
#[case::digon(scenarios::DIGON)]
#[case::triangle(scenarios::TRIANGLE)]
#[case::pentagon(scenarios::PENTAGON)]
fn ring_matches_scenario(#[case] scenario: RingScenario) {
    let graph = ring(scenario.order);
    assert_eq!(graph.order(), scenario.order);
    assert_eq!(graph.size(), scenario.order);
    assert_eq!(
        graph.vertices().collect::<Vec<_>>(),
        (0..scenario.order).collect::<Vec<_>>()
    );
    let edges: Vec<(usize, usize)> = graph.edges().map(Into::into).collect();
    assert_eq!(edges, scenario.edges);
    assert_eq!(neighbour_pairs(&graph), scenario.neighbours);
}

#[rstest]
fn empty_ring_is_rejected() {
    let err = RingGraph::new(0).expect_err("zero vertices must be rejected");
    assert_eq!(err, GraphError::InvalidTopology { order: 0 });
    assert_eq!(err.code(), GraphErrorCode::InvalidTopology);
}

#[rstest]
fn pentagon_incidence_visits_next_then_prev() {
    let graph = ring(5);
    let incident: Vec<(Edge, usize)> = graph.incident_edges(0).expect("in range").collect();
    assert_eq!(incident, [(Edge::new(0, 1), 1), (Edge::new(0, 4), 4)]);

    let incoming: Vec<(Edge, usize)> = graph.in_edges(0).expect("in range").collect();
    assert_eq!(incoming, [(Edge::new(1, 0), 1), (Edge::new(4, 0), 4)]);
}

#[rstest]
fn incident_iterator_walks_positions() {
    let graph = ring(3);
    let mut edges = graph.incident_edges(2).expect("in range");
    assert_eq!(edges.position(), Position::Next);
    assert_eq!(edges.len(), 2);
    assert_eq!(edges.next(), Some((Edge::new(2, 0), 0)));
    assert_eq!(edges.position(), Position::Prev);
    assert_eq!(edges.next(), Some((Edge::new(2, 1), 1)));
    assert_eq!(edges.position(), Position::End);
    assert_eq!(edges.next(), None);
    assert_eq!(edges.next(), None);
}

#[rstest]
fn fresh_iterators_compare_equal() {
    let graph = ring(4);
    let mut advanced = graph.incident_edges(1).expect("in range");
    assert_eq!(advanced, graph.incident_edges(3).expect("in range"));
    advanced.next();
    assert_ne!(advanced, graph.incident_edges(1).expect("in range"));
}

#[rstest]
#[case(1)]
#[case(2)]
#[case(6)]
fn walking_until_the_end_sentinel_visits_degree_edges(#[case] order: usize) {
    let graph = ring(order);
    for vertex in graph.vertices() {
        let mut edges = graph.incident_edges(vertex).expect("in range");
        let end = edges.end();
        assert_eq!(end.position(), Position::End);
        assert_eq!(end.vertex(), vertex);

        let mut visited = 0;
        while edges != end {
            let (edge, _) = edges.next().expect("a walk short of the end yields an edge");
            assert_eq!(edge.source(), vertex);
            visited += 1;
        }
        assert_eq!(visited, graph.degree(vertex).expect("in range"));
        assert_eq!(edges.next(), None);

        let mut incoming = graph.in_edges(vertex).expect("in range");
        let end = incoming.end();
        incoming.by_ref().for_each(drop);
        assert_eq!(incoming, end);
    }
}

#[rstest]
fn self_loop_reports_both_directions() {
    let graph = ring(1);
    assert_eq!(graph.shape(), RingShape::SelfLoop);
    let incident: Vec<(Edge, usize)> = graph.incident_edges(0).expect("in range").collect();
    assert_eq!(incident, [(Edge::new(0, 0), 0), (Edge::new(0, 0), 0)]);
    assert_eq!(graph.degree(0), Ok(2));
    assert_eq!(graph.weight(Edge::new(0, 0)), Ok(UNIT_WEIGHT));
}

#[rstest]
fn digon_emits_parallel_edges() {
    let graph = ring(2);
    assert_eq!(graph.shape(), RingShape::Digon);
    let edges: Vec<Edge> = graph.edges().collect();
    assert_eq!(edges, [Edge::new(0, 1), Edge::new(1, 0)]);
    assert!(edges[0].same_connection(edges[1]));
}

#[rstest]
#[case(3)]
#[case(5)]
#[case(64)]
fn wraparound_links_both_ends(#[case] order: usize) {
    let graph = ring(order);
    assert_eq!(graph.neighbor(0, Direction::Prev), Ok(order - 1));
    assert_eq!(graph.neighbor(order - 1, Direction::Next), Ok(0));
}

#[rstest]
fn edges_follow_ownership_rule() {
    let graph = ring(6);
    let order = graph.order_non_zero();
    let edges = graph.edges();
    assert_eq!(edges.rule(), EdgeOwnership::NextEdgeSource);
    for (owner, edge) in edges.enumerate() {
        assert_eq!(graph.source(edge), owner);
        assert_eq!(EdgeOwnership::NextEdgeSource.owner(edge, order), Some(owner));
        assert_eq!(
            EdgeOwnership::NextEdgeSource.owner(edge.reversed(), order),
            Some(owner)
        );
        assert_eq!(EdgeOwnership::NextEdgeSource.owned_edge(owner, order), edge);
    }
}

#[rstest]
fn ring_declares_every_capability() {
    let caps = RingGraph::CAPABILITIES;
    assert!(Capability::all().iter().all(|cap| caps.supports(*cap)));
}

#[rstest]
fn concurrent_readers_observe_identical_structure() {
    let graph = ring(257);
    let expected: Vec<Edge> = graph.edges().collect();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    let edges: Vec<Edge> = graph.edges().collect();
                    let neighbours = neighbour_pairs(&graph);
                    (edges, neighbours)
                })
            })
            .collect();
        let reference = neighbour_pairs(&graph);
        for handle in handles {
            let (edges, neighbours) = handle.join().expect("reader thread panicked");
            assert_eq!(edges, expected);
            assert_eq!(neighbours, reference);
        }
    });
}

proptest! {
    #![proptest_config(suite_proptest_config(64))]

    #[test]
    fn simple_rings_have_two_distinct_symmetric_neighbours(
        (order, vertex) in (3_usize..512).prop_flat_map(|n| (Just(n), 0..n))
    ) {
        let graph = ring(order);
        let neighbours: Vec<usize> = graph.neighbors(vertex).expect("in range").collect();
        prop_assert_eq!(neighbours.len(), 2);
        prop_assert!(neighbours[0] != neighbours[1]);
        for neighbour in neighbours {
            let back: Vec<usize> = graph.neighbors(neighbour).expect("in range").collect();
            prop_assert!(back.contains(&vertex));
        }
    }

    #[test]
    fn incident_edges_start_at_the_queried_vertex(
        (order, vertex) in (1_usize..512).prop_flat_map(|n| (Just(n), 0..n))
    ) {
        let graph = ring(order);
        let incident: Vec<(Edge, usize)> = graph.incident_edges(vertex).expect("in range").collect();
        prop_assert_eq!(incident.len(), 2);
        for (edge, neighbour) in incident {
            prop_assert_eq!(edge.source(), vertex);
            prop_assert_eq!(edge.target(), neighbour);
            prop_assert_eq!(graph.weight(edge), Ok(UNIT_WEIGHT));
        }
    }

    #[test]
    fn edges_cover_the_cycle_once(order in 3_usize..512) {
        let graph = ring(order);
        let connections: HashSet<(usize, usize)> = graph.edges().map(|e| e.canonical()).collect();
        prop_assert_eq!(connections.len(), order);
        prop_assert_eq!(graph.edges().len(), order);
        for vertex in graph.vertices() {
            let next = (vertex + 1) % order;
            prop_assert!(connections.contains(&(vertex.min(next), vertex.max(next))));
        }
    }

    #[test]
    fn non_adjacent_pairs_have_no_weight(
        (order, left, right) in (4_usize..256).prop_flat_map(|n| {
            (Just(n), 0..n, 0..n)
        })
    ) {
        let graph = ring(order);
        let adjacent = (left + 1) % order == right || (right + 1) % order == left;
        let weight = graph.weight(Edge::new(left, right));
        if adjacent {
            prop_assert_eq!(weight, Ok(UNIT_WEIGHT));
        } else {
            prop_assert_eq!(weight, Err(GraphError::InvalidEdge { left, right, order }));
        }
    }
}
