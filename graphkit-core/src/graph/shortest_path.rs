//! Label-correcting single-source shortest paths.
//!
//! Each vertex keeps its best-known distance as a scalar. A shared
//! [`MinHeap`] frontier receives a new candidate every time a distance
//! improves; entries that no longer match the best-known distance, or that
//! point at an already settled vertex, are skipped when popped. The search
//! stops as soon as the target vertex is popped.

use std::{cmp::Ordering, hash::Hash};

use tracing::{Span, debug, field, instrument};

use crate::{error::GraphError, heap::MinHeap};

use super::{Edge, WeightedGraph};

#[derive(Clone, Copy, Debug)]
struct Candidate {
    distance: f64,
    vertex: usize,
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V, E> WeightedGraph<V, E>
where
    V: Eq + Hash,
    E: Edge<Vertex = V> + Clone,
{
    /// Returns the edges of a shortest path from `start` to `end`.
    ///
    /// The first edge leaves `start` and the last edge reaches `end`. An
    /// empty path is returned when `start == end`.
    ///
    /// # Errors
    /// Returns [`GraphError::UnknownVertex`] when either vertex is missing
    /// from the graph, or [`GraphError::NoPathExists`] when `end` cannot be
    /// reached from `start`.
    #[instrument(
        name = "graph.shortest_path",
        err,
        skip_all,
        fields(vertices = self.vertices.len(), settled = field::Empty, hops = field::Empty),
    )]
    pub fn shortest_path(&self, start: &V, end: &V) -> Result<Vec<E>, GraphError> {
        if start == end {
            return Ok(Vec::new());
        }
        let source = self.index_of(start)?;
        let target = self.index_of(end)?;

        if !self.has_outgoing_edge(source) {
            debug!("start vertex has no edges to other vertices");
            return Err(GraphError::NoPathExists);
        }

        let vertex_count = self.vertices.len();
        let mut best = vec![f64::INFINITY; vertex_count];
        let mut predecessor: Vec<Option<usize>> = vec![None; vertex_count];
        let mut settled = vec![false; vertex_count];
        let mut settled_count = 0_usize;
        let mut frontier = MinHeap::new();

        best[source] = 0.0;
        frontier.insert(Candidate {
            distance: 0.0,
            vertex: source,
        });

        while let Ok(Candidate { distance, vertex }) = frontier.remove_min() {
            if settled[vertex] || distance > best[vertex] {
                continue;
            }
            if vertex == target {
                let path = self.trace_back(source, target, &predecessor)?;
                let span = Span::current();
                span.record("settled", settled_count);
                span.record("hops", path.len());
                return Ok(path);
            }
            settled[vertex] = true;
            settled_count += 1;

            for &id in &self.adjacency[vertex] {
                let (first, second) = self.endpoints[id];
                if first == second {
                    continue;
                }
                let neighbour = if first == vertex { second } else { first };
                if settled[neighbour] {
                    continue;
                }
                let improved = distance + self.edges[id].weight();
                // The first route to a vertex is kept even if its sum overflows.
                if improved < best[neighbour] || predecessor[neighbour].is_none() {
                    best[neighbour] = improved;
                    predecessor[neighbour] = Some(id);
                    frontier.insert(Candidate {
                        distance: improved,
                        vertex: neighbour,
                    });
                }
            }
        }

        Span::current().record("settled", settled_count);
        Err(GraphError::NoPathExists)
    }

    fn has_outgoing_edge(&self, vertex: usize) -> bool {
        self.adjacency[vertex].iter().any(|&id| {
            let (first, second) = self.endpoints[id];
            first != second
        })
    }

    /// Follows predecessor edges from `target` back to `source`.
    fn trace_back(
        &self,
        source: usize,
        target: usize,
        predecessor: &[Option<usize>],
    ) -> Result<Vec<E>, GraphError> {
        let mut path = Vec::new();
        let mut current = target;
        while current != source {
            let id = predecessor[current].ok_or(GraphError::NoPathExists)?;
            let (first, second) = self.endpoints[id];
            path.push(self.edges[id].clone());
            current = if first == current { second } else { first };
        }
        path.reverse();
        Ok(path)
    }
}
