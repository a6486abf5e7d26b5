//! Forest weight equivalence with the brute-force oracle.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use super::oracle::brute_force_forest_weight;
use super::types::GraphFixture;

/// Checks that Kruskal's forest weighs the same as the lightest spanning
/// forest found by exhaustive search.
pub(super) fn run_forest_equivalence_property(fixture: &GraphFixture) -> TestCaseResult {
    let forest = fixture.graph().minimum_spanning_tree();
    let expected = brute_force_forest_weight(fixture.vertex_count, &fixture.edges);
    let actual = forest.total_weight();

    if (actual - expected).abs() > f64::EPSILON {
        return Err(TestCaseError::fail(format!(
            "total weight mismatch: kruskal={actual}, oracle={expected} \
             (distribution={:?}, vertices={}, edges={})",
            fixture.distribution,
            fixture.vertex_count,
            fixture.edges.len(),
        )));
    }
    Ok(())
}
