//! Strategy builders for graph property-based tests.
//!
//! Each generator is driven by a seeded [`SmallRng`] so rstest cases can
//! replay a specific fixture. Graphs stay at or below [`MAX_EDGES`] edges to
//! keep the brute-force oracle cheap.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use super::types::{GraphFixture, WeightDistribution};

/// Maximum vertex count for generated graphs.
const MAX_NODES: usize = 7;
/// Maximum edge count for generated graphs.
const MAX_EDGES: u8 = 12;

/// Generates fixtures covering every weight distribution.
pub(super) fn graph_fixture_strategy() -> impl Strategy<Value = GraphFixture> {
    (weight_distribution_strategy(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

fn weight_distribution_strategy() -> impl Strategy<Value = WeightDistribution> {
    prop_oneof![
        2 => Just(WeightDistribution::Unique),
        3 => Just(WeightDistribution::ManyIdentical),
        2 => Just(WeightDistribution::Sparse),
        2 => Just(WeightDistribution::Disconnected),
    ]
}

/// Generates a fixture for a specific weight distribution.
pub(super) fn generate_fixture(
    distribution: WeightDistribution,
    rng: &mut SmallRng,
) -> GraphFixture {
    match distribution {
        WeightDistribution::Unique => generate_unique_weights(rng),
        WeightDistribution::ManyIdentical => generate_identical_weights(rng),
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Disconnected => generate_disconnected(rng),
    }
}

fn random_pairs(rng: &mut SmallRng, vertex_count: usize, count: usize) -> Vec<(usize, usize)> {
    (0..count)
        .map(|_| (rng.gen_range(0..vertex_count), rng.gen_range(0..vertex_count)))
        .collect()
}

fn generate_unique_weights(rng: &mut SmallRng) -> GraphFixture {
    let vertex_count = rng.gen_range(2..=MAX_NODES);
    let edge_count = rng.gen_range(1..=usize::from(MAX_EDGES));
    let mut weights: Vec<u8> = (1..=MAX_EDGES).collect();
    weights.shuffle(rng);

    let edges = random_pairs(rng, vertex_count, edge_count)
        .into_iter()
        .zip(weights)
        .map(|((source, target), weight)| (source, target, f64::from(weight)))
        .collect();

    GraphFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Unique,
    }
}

fn generate_identical_weights(rng: &mut SmallRng) -> GraphFixture {
    let vertex_count = rng.gen_range(2..=MAX_NODES);
    let edge_count = rng.gen_range(1..=usize::from(MAX_EDGES));
    let pool = [f64::from(rng.gen_range(0_u8..5)), f64::from(rng.gen_range(0_u8..5))];
    let pool_size = rng.gen_range(1..=pool.len());

    let edges = random_pairs(rng, vertex_count, edge_count)
        .into_iter()
        .map(|(source, target)| (source, target, pool[rng.gen_range(0..pool_size)]))
        .collect();

    GraphFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::ManyIdentical,
    }
}

fn generate_sparse(rng: &mut SmallRng) -> GraphFixture {
    let vertex_count = rng.gen_range(1..=MAX_NODES);
    let mut order: Vec<usize> = (0..vertex_count).collect();
    order.shuffle(rng);

    let mut edges: Vec<(usize, usize, f64)> = order
        .windows(2)
        .map(|pair| (pair[0], pair[1], f64::from(rng.gen_range(0_u8..10))))
        .collect();

    let extra = rng.gen_range(0..=usize::from(MAX_EDGES) - edges.len());
    for (source, target) in random_pairs(rng, vertex_count, extra) {
        edges.push((source, target, f64::from(rng.gen_range(0_u8..10))));
    }

    GraphFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Sparse,
    }
}

fn generate_disconnected(rng: &mut SmallRng) -> GraphFixture {
    let sizes: Vec<usize> = (0..rng.gen_range(2..=3))
        .map(|_| rng.gen_range(1..=3))
        .collect();
    let vertex_count = sizes.iter().sum();
    let mut edges = Vec::new();
    let mut offset = 0;

    for size in sizes {
        for local in 1..size {
            let weight = f64::from(rng.gen_range(0_u8..10));
            edges.push((offset + rng.gen_range(0..local), offset + local, weight));
        }
        if size > 1 && rng.gen_bool(0.5) {
            let weight = f64::from(rng.gen_range(0_u8..10));
            edges.push((offset, offset + size - 1, weight));
        }
        offset += size;
    }

    GraphFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Disconnected,
    }
}
