//! Immutable weighted undirected graph.
//!
//! A [`WeightedGraph`] is built once from a vertex collection and an edge
//! collection. Construction validates every edge, drops exact duplicates and
//! indexes each vertex's incident edges. Queries such as
//! [`WeightedGraph::minimum_spanning_tree`] and
//! [`WeightedGraph::shortest_path`] allocate their own working state and
//! never modify the graph.
//!
//! Self-loops and parallel edges are accepted. Weights must be finite and
//! non-negative.

mod mst;
mod shortest_path;

use std::{
    cmp::Ordering,
    collections::{HashMap, HashSet},
    hash::{Hash, Hasher},
};

use tracing::{Span, debug, field, instrument};

use crate::error::{GraphError, InvalidEdgeReason};

pub use self::mst::MinimumSpanningForest;

/// An undirected weighted edge between two vertices.
pub trait Edge {
    /// Vertex type joined by the edge.
    type Vertex: Eq + Hash + Clone;

    /// Returns the first endpoint.
    fn vertex1(&self) -> &Self::Vertex;

    /// Returns the second endpoint.
    fn vertex2(&self) -> &Self::Vertex;

    /// Returns the edge weight.
    fn weight(&self) -> f64;

    /// Returns the endpoint opposite `vertex`, or `None` when `vertex` is not
    /// an endpoint of this edge.
    fn other_vertex(&self, vertex: &Self::Vertex) -> Option<&Self::Vertex> {
        if vertex == self.vertex1() {
            Some(self.vertex2())
        } else if vertex == self.vertex2() {
            Some(self.vertex1())
        } else {
            None
        }
    }

    /// Returns `true` when both endpoints are the same vertex.
    fn is_self_loop(&self) -> bool {
        self.vertex1() == self.vertex2()
    }
}

/// A plain edge carrying its endpoints and weight.
///
/// Edges order by weight first (using [`f64::total_cmp`]) and then by
/// endpoints, so sorting a slice of them yields ascending weights with a
/// deterministic tie-break. Equality is structural: `(a, b, w)` and
/// `(b, a, w)` are distinct parallel edges.
#[derive(Clone, Debug)]
pub struct WeightedEdge<V> {
    vertex1: V,
    vertex2: V,
    weight: f64,
}

impl<V> WeightedEdge<V> {
    /// Creates an edge joining `vertex1` and `vertex2`.
    #[must_use]
    pub fn new(vertex1: V, vertex2: V, weight: f64) -> Self {
        Self {
            vertex1,
            vertex2,
            weight,
        }
    }
}

impl<V: Eq + Hash + Clone> Edge for WeightedEdge<V> {
    type Vertex = V;

    #[rustfmt::skip]
    fn vertex1(&self) -> &V { &self.vertex1 }

    #[rustfmt::skip]
    fn vertex2(&self) -> &V { &self.vertex2 }

    #[rustfmt::skip]
    fn weight(&self) -> f64 { self.weight }
}

impl<V: PartialEq> PartialEq for WeightedEdge<V> {
    fn eq(&self, other: &Self) -> bool {
        self.weight.to_bits() == other.weight.to_bits()
            && self.vertex1 == other.vertex1
            && self.vertex2 == other.vertex2
    }
}

impl<V: Eq> Eq for WeightedEdge<V> {}

impl<V: Hash> Hash for WeightedEdge<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.vertex1.hash(state);
        self.vertex2.hash(state);
        self.weight.to_bits().hash(state);
    }
}

impl<V: Ord> Ord for WeightedEdge<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.vertex1.cmp(&other.vertex1))
            .then_with(|| self.vertex2.cmp(&other.vertex2))
    }
}

impl<V: Ord> PartialOrd for WeightedEdge<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sums the weights along a path.
#[must_use]
pub fn path_weight<E: Edge>(path: &[E]) -> f64 {
    path.iter().map(Edge::weight).sum()
}

/// An immutable weighted graph with a per-vertex adjacency index.
///
/// # Examples
/// ```
/// use graphkit_core::{WeightedEdge, WeightedGraph};
///
/// let graph = WeightedGraph::new(
///     ['a', 'b', 'c'],
///     [
///         WeightedEdge::new('a', 'b', 1.0),
///         WeightedEdge::new('b', 'c', 2.0),
///         WeightedEdge::new('a', 'c', 5.0),
///     ],
/// )?;
/// assert_eq!(graph.num_vertices(), 3);
/// assert_eq!(graph.minimum_spanning_tree().total_weight(), 3.0);
/// assert_eq!(graph.shortest_path(&'a', &'c')?.len(), 2);
/// # Ok::<(), graphkit_core::GraphError>(())
/// ```
#[derive(Clone, Debug)]
pub struct WeightedGraph<V, E> {
    vertices: Vec<V>,
    vertex_index: HashMap<V, usize>,
    edges: Vec<E>,
    endpoints: Vec<(usize, usize)>,
    adjacency: Vec<Vec<usize>>,
    supplied_edges: usize,
}

impl<V, E> WeightedGraph<V, E>
where
    V: Eq + Hash + Clone,
    E: Edge<Vertex = V> + Eq + Hash,
{
    /// Builds a graph from `vertices` and `edges`.
    ///
    /// Repeated vertices are kept once. Edges equal to an earlier edge are
    /// counted by [`Self::num_edges`] but dropped from the working edge list.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidEdge`] when an edge has a negative or
    /// non-finite weight, or names an endpoint missing from `vertices`.
    #[instrument(
        name = "graph.new",
        err,
        skip_all,
        fields(vertices = field::Empty, edges = field::Empty),
    )]
    pub fn new(
        vertices: impl IntoIterator<Item = V>,
        edges: impl IntoIterator<Item = E>,
    ) -> Result<Self, GraphError> {
        let mut vertex_list = Vec::new();
        let mut vertex_index = HashMap::new();
        for vertex in vertices {
            if !vertex_index.contains_key(&vertex) {
                vertex_index.insert(vertex.clone(), vertex_list.len());
                vertex_list.push(vertex);
            }
        }

        let supplied: Vec<E> = edges.into_iter().collect();
        let kept_endpoints = {
            let mut seen = HashSet::with_capacity(supplied.len());
            let mut kept = Vec::with_capacity(supplied.len());
            for (index, edge) in supplied.iter().enumerate() {
                let ends = validate_edge(edge, index, &vertex_index)?;
                kept.push(seen.insert(edge).then_some(ends));
            }
            kept
        };

        let supplied_edges = supplied.len();
        let mut adjacency = vec![Vec::new(); vertex_list.len()];
        let mut endpoints = Vec::with_capacity(supplied_edges);
        let mut unique_edges = Vec::with_capacity(supplied_edges);
        for (edge, ends) in supplied.into_iter().zip(kept_endpoints) {
            let Some((first, second)) = ends else {
                continue;
            };
            let id = unique_edges.len();
            adjacency[first].push(id);
            if first != second {
                adjacency[second].push(id);
            }
            endpoints.push((first, second));
            unique_edges.push(edge);
        }

        let span = Span::current();
        span.record("vertices", vertex_list.len());
        span.record("edges", supplied_edges);
        debug!(
            unique_edges = unique_edges.len(),
            duplicates = supplied_edges - unique_edges.len(),
            "graph indexed"
        );

        Ok(Self {
            vertices: vertex_list,
            vertex_index,
            edges: unique_edges,
            endpoints,
            adjacency,
            supplied_edges,
        })
    }
}

impl<V, E> WeightedGraph<V, E>
where
    V: Eq + Hash,
{
    /// Returns the number of distinct vertices.
    #[must_use]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges supplied at construction, duplicates
    /// included.
    #[must_use]
    pub fn num_edges(&self) -> usize {
        self.supplied_edges
    }

    /// Returns the distinct vertices in first-seen order.
    #[must_use]
    #[rustfmt::skip]
    pub fn vertices(&self) -> &[V] { &self.vertices }

    /// Returns the deduplicated edges in first-seen order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[E] { &self.edges }

    /// Returns `true` when `vertex` belongs to the graph.
    #[must_use]
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.vertex_index.contains_key(vertex)
    }

    /// Returns the edges touching `vertex`, each self-loop once.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when `vertex` is not in the graph.
    pub fn incident_edges(&self, vertex: &V) -> Result<Vec<&E>, GraphError> {
        let index = self.index_of(vertex)?;
        Ok(self
            .adjacency
            .get(index)
            .into_iter()
            .flatten()
            .filter_map(|&id| self.edges.get(id))
            .collect())
    }

    fn index_of(&self, vertex: &V) -> Result<usize, GraphError> {
        self.vertex_index
            .get(vertex)
            .copied()
            .ok_or(GraphError::UnknownVertex)
    }
}

fn validate_edge<V, E>(
    edge: &E,
    index: usize,
    vertex_index: &HashMap<V, usize>,
) -> Result<(usize, usize), GraphError>
where
    V: Eq + Hash,
    E: Edge<Vertex = V>,
{
    let invalid = |reason| GraphError::InvalidEdge { index, reason };

    let weight = edge.weight();
    if !weight.is_finite() {
        return Err(invalid(InvalidEdgeReason::NonFiniteWeight));
    }
    if weight < 0.0 {
        return Err(invalid(InvalidEdgeReason::NegativeWeight));
    }

    let first = vertex_index.get(edge.vertex1());
    let second = vertex_index.get(edge.vertex2());
    match (first, second) {
        (Some(&first), Some(&second)) => Ok((first, second)),
        _ => Err(invalid(InvalidEdgeReason::UnknownEndpoint)),
    }
}

#[cfg(test)]
mod property;
