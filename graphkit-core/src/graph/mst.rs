//! Kruskal minimum spanning tree construction.
//!
//! Edges are ordered by the top-k selector (with `k` equal to the edge count)
//! and accepted greedily whenever their endpoints sit in different disjoint
//! set components.

use std::hash::Hash;

use tracing::{debug, instrument};

use crate::{disjoint_set::DisjointSet, select::sort_ascending};

use super::{Edge, WeightedGraph, path_weight};

/// The output of a minimum spanning forest computation.
///
/// When the input graph is connected, the forest is a minimum spanning tree.
#[derive(Clone, Debug, PartialEq)]
pub struct MinimumSpanningForest<E> {
    edges: Vec<E>,
    component_count: usize,
}

impl<E: Edge> MinimumSpanningForest<E> {
    /// Returns the accepted edges in ascending order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[E] { &self.edges }

    /// Consumes the forest and returns its edges.
    #[must_use]
    #[rustfmt::skip]
    pub fn into_edges(self) -> Vec<E> { self.edges }

    /// Returns the number of connected components spanned by the forest.
    #[must_use]
    #[rustfmt::skip]
    pub fn component_count(&self) -> usize { self.component_count }

    /// Returns `true` when the forest spans a single connected component.
    #[must_use]
    pub fn is_tree(&self) -> bool {
        self.component_count == 1
    }

    /// Returns the summed weight of the accepted edges.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        path_weight(&self.edges)
    }
}

impl<V, E> WeightedGraph<V, E>
where
    V: Eq + Hash,
    E: Edge<Vertex = V> + Ord + Clone,
{
    /// Computes a minimum spanning tree using Kruskal's algorithm.
    ///
    /// The graph is expected to be connected. On a disconnected graph the
    /// result is a minimum spanning forest and
    /// [`MinimumSpanningForest::component_count`] reports more than one
    /// component. When several minimum trees exist, any one of them is
    /// returned.
    #[must_use]
    #[instrument(
        name = "graph.minimum_spanning_tree",
        skip(self),
        fields(vertices = self.vertices.len(), edges = self.edges.len()),
    )]
    pub fn minimum_spanning_tree(&self) -> MinimumSpanningForest<E> {
        let vertex_count = self.vertices.len();
        let target_edges = vertex_count.saturating_sub(1);
        // Tie-breaks never change the accepted edges; the seed is fixed.
        let mut components = DisjointSet::with_seed(0);
        for vertex in 0..vertex_count {
            // Vertex indices are unique, so registration cannot collide.
            let _slot = components.make_set(vertex);
        }

        let ordered: Vec<(&E, usize)> = self.edges.iter().zip(0..).collect();
        let mut forest = Vec::with_capacity(target_edges);
        for (edge, id) in sort_ascending(&ordered) {
            if forest.len() == target_edges {
                break;
            }
            let (first, second) = self.endpoints[id];
            // `union` fails exactly when both endpoints already share a
            // component, which also rejects self-loops.
            if components.union(&first, &second).is_ok() {
                forest.push(edge.clone());
            }
        }

        debug!(
            accepted = forest.len(),
            components = components.component_count(),
            "minimum spanning forest built"
        );
        MinimumSpanningForest {
            edges: forest,
            component_count: components.component_count(),
        }
    }
}
