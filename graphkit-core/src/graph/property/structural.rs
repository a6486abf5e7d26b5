//! Structural invariants of the spanning forest.
//!
//! - **Acyclicity**: no selected edge closes a cycle.
//! - **Edge count**: `V - C` edges for `C` connected components.
//! - **Provenance**: every selected edge was supplied to the graph.
//! - **Tree flag**: `is_tree` holds exactly when the input is connected.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::graph::{Edge, WeightedEdge};

use super::oracle::{component_count, is_acyclic};
use super::types::GraphFixture;

/// Runs the structural invariant property for the given fixture.
pub(super) fn run_structural_invariants_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = fixture.graph();
    let forest = graph.minimum_spanning_tree();
    let triples: Vec<(usize, usize, f64)> = forest.edges().iter().map(triple).collect();

    if !is_acyclic(fixture.vertex_count, &triples) {
        return Err(fail("forest contains a cycle", fixture));
    }

    let components = component_count(fixture.vertex_count, &fixture.edges);
    if forest.component_count() != components {
        return Err(fail(
            &format!(
                "component count mismatch: kruskal={}, oracle={components}",
                forest.component_count()
            ),
            fixture,
        ));
    }
    if triples.len() != fixture.vertex_count - components {
        return Err(fail(
            &format!(
                "edge count {} is not V - C = {}",
                triples.len(),
                fixture.vertex_count - components
            ),
            fixture,
        ));
    }
    if forest.is_tree() != (components == 1) {
        return Err(fail("is_tree disagrees with connectivity", fixture));
    }

    for edge in forest.edges() {
        if !graph.edges().contains(edge) {
            return Err(fail(&format!("forest invented edge {edge:?}"), fixture));
        }
    }
    Ok(())
}

fn triple(edge: &WeightedEdge<usize>) -> (usize, usize, f64) {
    (*edge.vertex1(), *edge.vertex2(), edge.weight())
}

fn fail(message: &str, fixture: &GraphFixture) -> TestCaseError {
    TestCaseError::fail(format!(
        "{message} (distribution={:?}, vertices={}, edges={})",
        fixture.distribution,
        fixture.vertex_count,
        fixture.edges.len(),
    ))
}
