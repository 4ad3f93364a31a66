use proptest::test_runner::Config as ProptestConfig;
use ringgraph_core::RingGraph;
use ringgraph_test_support::proptest_profile::ProptestRunProfile;

/// Builds the proptest configuration shared by the property suites.
#[must_use]
pub fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases);
    ProptestConfig {
        cases: profile.cases(),
        ..ProptestConfig::default()
    }
}

#[must_use]
pub fn ring(order: usize) -> RingGraph {
    RingGraph::new(order).expect("test orders are non-zero")
}
