//! Sequential oracles for the graph property tests.
//!
//! Both oracles work on raw `(source, target, weight)` triples so they share
//! no code with the implementations under test.

/// Finds the root of `node` in a parent array without compression.
fn find_root(parent: &[usize], mut node: usize) -> usize {
    while parent[node] != node {
        node = parent[node];
    }
    node
}

/// Counts connected components, treating every edge as undirected.
pub(super) fn component_count(vertex_count: usize, edges: &[(usize, usize, f64)]) -> usize {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    let mut components = vertex_count;
    for &(source, target, _) in edges {
        let left = find_root(&parent, source);
        let right = find_root(&parent, target);
        if left != right {
            parent[left] = right;
            components -= 1;
        }
    }
    components
}

/// Returns `true` when the edges contain no cycle, self-loops included.
pub(super) fn is_acyclic(vertex_count: usize, edges: &[(usize, usize, f64)]) -> bool {
    let mut parent: Vec<usize> = (0..vertex_count).collect();
    for &(source, target, _) in edges {
        let left = find_root(&parent, source);
        let right = find_root(&parent, target);
        if left == right {
            return false;
        }
        parent[left] = right;
    }
    true
}

/// Computes the minimum spanning forest weight by enumerating edge subsets.
///
/// A forest spanning `c` components of an `n`-vertex graph has exactly
/// `n - c` edges, so only acyclic subsets of that size are weighed.
pub(super) fn brute_force_forest_weight(
    vertex_count: usize,
    edges: &[(usize, usize, f64)],
) -> f64 {
    let target_size = vertex_count - component_count(vertex_count, edges);
    let mut best = f64::INFINITY;
    let mut subset = Vec::with_capacity(target_size);

    for mask in 0_u32..(1 << edges.len()) {
        if mask.count_ones() as usize != target_size {
            continue;
        }
        subset.clear();
        subset.extend(
            edges
                .iter()
                .enumerate()
                .filter(|(index, _)| mask & (1 << index) != 0)
                .map(|(_, edge)| *edge),
        );
        if is_acyclic(vertex_count, &subset) {
            let weight: f64 = subset.iter().map(|&(_, _, weight)| weight).sum();
            best = best.min(weight);
        }
    }
    best
}

/// Computes single-source distances with Bellman-Ford over undirected edges.
///
/// Unreachable vertices keep a distance of infinity.
pub(super) fn bellman_ford(
    vertex_count: usize,
    edges: &[(usize, usize, f64)],
    source: usize,
) -> Vec<f64> {
    let mut distance = vec![f64::INFINITY; vertex_count];
    distance[source] = 0.0;

    for _ in 1..vertex_count.max(2) {
        let mut changed = false;
        for &(first, second, weight) in edges {
            for (from, to) in [(first, second), (second, first)] {
                let candidate = distance[from] + weight;
                if candidate < distance[to] {
                    distance[to] = candidate;
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    distance
}
