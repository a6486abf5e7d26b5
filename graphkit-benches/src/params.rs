//! Benchmark parameter types.
//!
//! Each type renders as the Criterion benchmark id, so reports group runs
//! by input size.

use std::fmt;

/// Parameters for a graph benchmark run.
#[derive(Clone, Debug)]
pub struct GraphBenchParams {
    /// Number of vertices in the graph.
    pub vertex_count: usize,
    /// Number of edges supplied to the graph.
    pub edge_count: usize,
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},m={}", self.vertex_count, self.edge_count)
    }
}

/// Parameters for a top-k selection benchmark run.
#[derive(Clone, Debug)]
pub struct SelectionBenchParams {
    /// Number of input items.
    pub item_count: usize,
    /// Number of items kept.
    pub k: usize,
}

impl fmt::Display for SelectionBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},k={}", self.item_count, self.k)
    }
}
