//! Strategy builders for MST property-based tests.
//!
//! Each generator builds an [`Edge`] list from a seeded [`SmallRng`]. Edge
//! orientation is randomised so canonicalisation is always exercised.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Edge;

use super::types::{MstFixture, WeightDistribution};

/// Minimum vertex count for most generated graphs.
const MIN_VERTICES: usize = 2;
/// Maximum vertex count for most generated graphs.
const MAX_VERTICES: usize = 48;
/// Maximum vertex count for dense graphs.
const DENSE_MAX_VERTICES: usize = 24;

/// Generates MST fixtures covering every weight distribution.
///
/// Biased towards `ManyIdentical`, the main stress case for tie-breaking.
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    let distribution = prop_oneof![
        2 => Just(WeightDistribution::Unique),
        3 => Just(WeightDistribution::ManyIdentical),
        2 => Just(WeightDistribution::Sparse),
        2 => Just(WeightDistribution::Dense),
        2 => Just(WeightDistribution::Disconnected),
        2 => Just(WeightDistribution::Signed),
    ];
    (distribution, any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for a specific weight distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    match distribution {
        WeightDistribution::Unique => generate_unique_weights(rng),
        WeightDistribution::ManyIdentical => generate_identical_weights(rng),
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => {
            generate_probabilistic_graph(rng, DENSE_MAX_VERTICES, (0.7, 0.95), distribution, |r| {
                r.gen_range(1..=1_000)
            })
        }
        WeightDistribution::Disconnected => generate_disconnected(rng),
        WeightDistribution::Signed => {
            generate_probabilistic_graph(rng, MAX_VERTICES, (0.1, 0.5), distribution, |r| {
                r.gen_range(-50..=50)
            })
        }
    }
}

/// Adds an edge between every unique vertex pair with a sampled probability.
fn generate_probabilistic_graph(
    rng: &mut SmallRng,
    max_vertices: usize,
    edge_prob_range: (f64, f64),
    distribution: WeightDistribution,
    mut weight_generator: impl FnMut(&mut SmallRng) -> i64,
) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=max_vertices);
    let edge_probability: f64 = rng.gen_range(edge_prob_range.0..=edge_prob_range.1);
    let mut edges = Vec::new();

    for i in 0..vertex_count {
        for j in (i + 1)..vertex_count {
            if rng.gen_bool(edge_probability) {
                let weight = weight_generator(rng);
                edges.push(oriented(i, j, weight, rng));
            }
        }
    }

    if edges.is_empty() {
        let weight = weight_generator(rng);
        edges.push(Edge::new(0, 1, weight));
    }

    MstFixture {
        vertex_count,
        edges,
        distribution,
    }
}

/// Distinct weights: a shuffled run of consecutive integers.
fn generate_unique_weights(rng: &mut SmallRng) -> MstFixture {
    let mut fixture = generate_probabilistic_graph(
        rng,
        MAX_VERTICES,
        (0.2, 0.6),
        WeightDistribution::Unique,
        |_| 0,
    );
    let mut weights: Vec<i64> = (1..).take(fixture.edges.len()).collect();
    shuffle(&mut weights, rng);
    for (edge, weight) in fixture.edges.iter_mut().zip(weights) {
        *edge = Edge::new(edge.source(), edge.target(), weight);
    }
    fixture
}

/// Weights drawn from a pool of one to three values.
fn generate_identical_weights(rng: &mut SmallRng) -> MstFixture {
    let pool_size = rng.gen_range(1..=3);
    let pool: Vec<i64> = (0..pool_size).map(|_| rng.gen_range(1..=10)).collect();
    generate_probabilistic_graph(
        rng,
        MAX_VERTICES,
        (0.3, 0.7),
        WeightDistribution::ManyIdentical,
        move |r| pool[r.gen_range(0..pool.len())],
    )
}

/// Random spanning path (guaranteeing connectivity) plus a few extra edges,
/// some of them parallel or self-loops.
fn generate_sparse(rng: &mut SmallRng) -> MstFixture {
    let vertex_count = rng.gen_range(MIN_VERTICES..=MAX_VERTICES);
    let mut edges = Vec::new();

    let mut perm: Vec<usize> = (0..vertex_count).collect();
    shuffle(&mut perm, rng);
    for pair in perm.windows(2) {
        let weight = rng.gen_range(1..=100);
        edges.push(oriented(pair[0], pair[1], weight, rng));
    }

    let extra_count = rng.gen_range(vertex_count / 2..=vertex_count);
    for _ in 0..extra_count {
        let i = rng.gen_range(0..vertex_count);
        let j = rng.gen_range(0..vertex_count);
        edges.push(Edge::new(i, j, rng.gen_range(1..=100)));
    }

    MstFixture {
        vertex_count,
        edges,
        distribution: WeightDistribution::Sparse,
    }
}

/// Two to five components with no cross-component edges, plus an
/// occasional isolated vertex.
fn generate_disconnected(rng: &mut SmallRng) -> MstFixture {
    let component_count = rng.gen_range(2..=5);
    let mut edges = Vec::new();
    let mut offset = 0;

    for _ in 0..component_count {
        let size = rng.gen_range(2..=10);
        let edge_probability: f64 = rng.gen_range(0.3..=0.8);
        for i in offset..offset + size {
            // Link each vertex to its predecessor so the component is connected.
            if i > offset {
                let weight = rng.gen_range(1..=100);
                edges.push(oriented(i - 1, i, weight, rng));
            }
            for j in (i + 2)..offset + size {
                if rng.gen_bool(edge_probability) {
                    let weight = rng.gen_range(1..=100);
                    edges.push(oriented(i, j, weight, rng));
                }
            }
        }
        offset += size;
    }

    let isolated = rng.gen_range(0..=2);
    MstFixture {
        vertex_count: offset + isolated,
        edges,
        distribution: WeightDistribution::Disconnected,
    }
}

/// Returns the edge with a random orientation.
fn oriented(a: usize, b: usize, weight: i64, rng: &mut SmallRng) -> Edge {
    if rng.gen_bool(0.5) {
        Edge::new(a, b, weight)
    } else {
        Edge::new(b, a, weight)
    }
}

/// Fisher-Yates shuffle using the provided RNG.
fn shuffle<T>(slice: &mut [T], rng: &mut SmallRng) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}
