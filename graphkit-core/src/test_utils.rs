//! Shared test utilities for `graphkit-core`.

use graphkit_test_support::ci::property_test_profile::ProptestRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::graph::{WeightedEdge, WeightedGraph};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `PROPTEST_CASES` and
/// `GRAPHKIT_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Builds a graph over `0..vertex_count` from `(source, target, weight)`
/// triples.
///
/// # Panics
/// Panics when an edge fails validation.
pub(crate) fn index_graph(
    vertex_count: usize,
    edges: &[(usize, usize, f64)],
) -> WeightedGraph<usize, WeightedEdge<usize>> {
    WeightedGraph::new(
        0..vertex_count,
        edges
            .iter()
            .map(|&(source, target, weight)| WeightedEdge::new(source, target, weight)),
    )
    .expect("fixture edges must be valid")
}
