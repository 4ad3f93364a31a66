//! Shortest-path search over ring graphs.

mod common;

use common::{ring, suite_proptest_config};
use proptest::{
    prop_assert_eq, proptest,
    strategy::{Just, Strategy},
};
use ringgraph_core::{GraphErrorCode, SearchError, SearchErrorCode, shortest_paths};
use ringgraph_test_support::scenarios::{self, RingScenario};
use rstest::rstest;

#[rstest]
#[case::self_loop(scenarios::SELF_LOOP)]
#[case::digon(scenarios::DIGON)]
#[case::triangle(scenarios::TRIANGLE)]
#[case::pentagon(scenarios::PENTAGON)]
fn search_from_zero_matches_scenario(#[case] scenario: RingScenario) {
    let paths = shortest_paths(&ring(scenario.order), 0).expect("origin is in range");
    assert_eq!(paths.source(), 0);
    assert_eq!(paths.distances(), scenario.distances);
    assert_eq!(paths.parents(), scenario.parents);
}

#[rstest]
fn pentagon_paths_follow_parents() {
    let paths = shortest_paths(&ring(5), 0).expect("origin is in range");
    assert_eq!(paths.path_to(0), Some(vec![0]));
    assert_eq!(paths.path_to(2), Some(vec![0, 1, 2]));
    assert_eq!(paths.path_to(3), Some(vec![0, 4, 3]));
    assert_eq!(paths.path_to(5), None);
    assert_eq!(
        paths.iter().collect::<Vec<_>>(),
        [
            (0, 0.0, 0),
            (1, 1.0, 0),
            (2, 2.0, 1),
            (3, 2.0, 4),
            (4, 1.0, 0),
        ]
    );
}

#[rstest]
fn search_from_other_origin_rotates_results() {
    let paths = shortest_paths(&ring(5), 2).expect("origin is in range");
    assert_eq!(paths.distances(), [2.0, 1.0, 0.0, 1.0, 2.0]);
    assert_eq!(paths.parents(), [1, 2, 2, 2, 3]);
}

#[rstest]
fn out_of_range_origin_is_rejected() {
    let err = shortest_paths(&ring(3), 3).expect_err("origin 3 is outside a triangle");
    assert_eq!(err, SearchError::SourceOutOfRange { origin: 3, order: 3 });
    assert_eq!(err.code(), SearchErrorCode::SourceOutOfRange);
    assert_eq!(err.code().as_str(), "SEARCH_SOURCE_OUT_OF_RANGE");
    assert_eq!(err.graph_code(), None::<GraphErrorCode>);
}

proptest! {
    #![proptest_config(suite_proptest_config(48))]

    #[test]
    fn distances_are_shortest_way_round(
        (order, origin) in (1_usize..400).prop_flat_map(|n| (Just(n), 0..n))
    ) {
        let paths = shortest_paths(&ring(order), origin).expect("origin is in range");
        for vertex in 0..order {
            let clockwise = (vertex + order - origin) % order;
            let expected = clockwise.min(order - clockwise);
            prop_assert_eq!(paths.distance(vertex), Some(expected as f32));
            let path = paths.path_to(vertex).expect("every vertex is reachable");
            prop_assert_eq!(path.len(), expected + 1);
            prop_assert_eq!(path.first().copied(), Some(origin));
            prop_assert_eq!(path.last().copied(), Some(vertex));
        }
    }
}
