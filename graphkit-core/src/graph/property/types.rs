//! Type definitions for graph property-based tests.

use crate::{
    graph::{WeightedEdge, WeightedGraph},
    test_utils::index_graph,
};

/// Weight distribution strategy for generated graphs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightDistribution {
    /// Each edge has a distinct weight.
    Unique,
    /// Edges draw from a pool of one or two weights, stressing tie-breaks.
    ManyIdentical,
    /// A random spanning path plus a few extra edges and self-loops.
    Sparse,
    /// Several components with no edges between them.
    Disconnected,
}

/// Fixture for graph property tests.
///
/// Weights are whole numbers so sums compare exactly.
#[derive(Clone, Debug)]
pub(super) struct GraphFixture {
    /// Number of vertices, labelled `0..vertex_count`.
    pub vertex_count: usize,
    /// Generated `(source, target, weight)` triples.
    pub edges: Vec<(usize, usize, f64)>,
    /// Weight distribution used during generation.
    pub distribution: WeightDistribution,
}

impl GraphFixture {
    /// Builds the graph described by the fixture.
    pub(super) fn graph(&self) -> WeightedGraph<usize, WeightedEdge<usize>> {
        index_graph(self.vertex_count, &self.edges)
    }
}
