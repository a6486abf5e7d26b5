//! Shortest path agreement with Bellman-Ford.
//!
//! For every ordered vertex pair the returned path must walk from start to
//! end over supplied edges and weigh exactly the oracle distance. Pairs the
//! oracle cannot connect must report `NoPathExists`.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::error::GraphError;
use crate::graph::{Edge, path_weight};

use super::oracle::bellman_ford;
use super::types::GraphFixture;

/// Runs the shortest path property across all vertex pairs.
pub(super) fn run_shortest_path_property(fixture: &GraphFixture) -> TestCaseResult {
    let graph = fixture.graph();

    for start in 0..fixture.vertex_count {
        let distances = bellman_ford(fixture.vertex_count, &fixture.edges, start);
        for (end, &expected) in distances.iter().enumerate() {
            let result = graph.shortest_path(&start, &end);
            let context = format!(
                "{start} -> {end} (distribution={:?}, vertices={}, edges={:?})",
                fixture.distribution, fixture.vertex_count, fixture.edges,
            );

            if start == end {
                if result != Ok(Vec::new()) {
                    return Err(TestCaseError::fail(format!(
                        "path to self is not empty: {result:?} for {context}"
                    )));
                }
                continue;
            }

            if expected.is_infinite() {
                if result != Err(GraphError::NoPathExists) {
                    return Err(TestCaseError::fail(format!(
                        "expected NoPathExists, got {result:?} for {context}"
                    )));
                }
                continue;
            }

            let path = result.map_err(|error| {
                TestCaseError::fail(format!("unexpected {error} for {context}"))
            })?;

            let mut current = start;
            for edge in &path {
                current = *edge.other_vertex(&current).ok_or_else(|| {
                    TestCaseError::fail(format!("path breaks at {current} for {context}"))
                })?;
            }
            if current != end {
                return Err(TestCaseError::fail(format!(
                    "path ends at {current} for {context}"
                )));
            }

            let weight = path_weight(&path);
            if (weight - expected).abs() > f64::EPSILON {
                return Err(TestCaseError::fail(format!(
                    "path weight {weight} differs from oracle {expected} for {context}"
                )));
            }
        }
    }
    Ok(())
}
