//! Seeded synthetic inputs for benchmarking.
//!
//! Graphs are built from a random spanning tree plus extra random edges, so
//! every generated graph is connected and shortest-path queries between any
//! two vertices succeed.

use graphkit_core::{GraphError, WeightedEdge, WeightedGraph};
use rand::{Rng, SeedableRng, rngs::SmallRng};
use thiserror::Error;

/// Graph type produced by [`generate_graph`].
pub type IndexGraph = WeightedGraph<usize, WeightedEdge<usize>>;

/// Configuration for a synthetic graph.
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of vertices, labelled `0..vertex_count`.
    pub vertex_count: usize,
    /// Random edges added on top of the spanning tree.
    pub extra_edges: usize,
    /// Exclusive upper bound for edge weights.
    pub max_weight: f64,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// Errors raised while generating synthetic inputs.
#[derive(Debug, Error, PartialEq)]
pub enum SyntheticError {
    /// The graph would have no vertices.
    #[error("vertex_count must be greater than zero")]
    ZeroVertices,
    /// The weight bound is not a positive finite number.
    #[error("max_weight must be positive and finite, got {max_weight}")]
    InvalidMaxWeight {
        /// The rejected bound.
        max_weight: f64,
    },
    /// The graph rejected a generated edge.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

/// Generates a connected graph described by `config`.
///
/// # Errors
/// Returns [`SyntheticError`] when the configuration is degenerate.
///
/// # Examples
/// ```
/// use graphkit_benches::source::{SyntheticGraphConfig, generate_graph};
///
/// let graph = generate_graph(&SyntheticGraphConfig {
///     vertex_count: 10,
///     extra_edges: 5,
///     max_weight: 100.0,
///     seed: 3,
/// })?;
/// assert_eq!(graph.num_edges(), 14);
/// # Ok::<(), graphkit_benches::source::SyntheticError>(())
/// ```
pub fn generate_graph(config: &SyntheticGraphConfig) -> Result<IndexGraph, SyntheticError> {
    if config.vertex_count == 0 {
        return Err(SyntheticError::ZeroVertices);
    }
    if !config.max_weight.is_finite() || config.max_weight <= 0.0 {
        return Err(SyntheticError::InvalidMaxWeight {
            max_weight: config.max_weight,
        });
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let vertex_count = config.vertex_count;
    let mut edges = Vec::with_capacity(vertex_count.saturating_sub(1) + config.extra_edges);

    for vertex in 1..vertex_count {
        let parent = rng.gen_range(0..vertex);
        edges.push(WeightedEdge::new(
            parent,
            vertex,
            rng.gen_range(0.0..config.max_weight),
        ));
    }
    for _ in 0..config.extra_edges {
        edges.push(WeightedEdge::new(
            rng.gen_range(0..vertex_count),
            rng.gen_range(0..vertex_count),
            rng.gen_range(0.0..config.max_weight),
        ));
    }

    Ok(WeightedGraph::new(0..vertex_count, edges)?)
}

/// Generates `count` seeded values for selection benchmarks.
#[must_use]
pub fn generate_values(count: usize, seed: u64) -> Vec<u64> {
    let mut rng = SmallRng::seed_from_u64(seed);
    (0..count).map(|_| rng.gen_range(0..u64::MAX)).collect()
}
