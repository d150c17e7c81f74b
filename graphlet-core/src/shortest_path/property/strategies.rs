//! Graph generators for shortest-path property tests.
//!
//! Fixtures are produced from a seeded [`SmallRng`] so the same generator
//! serves both proptest (seed drawn by proptest) and rstest (fixed seeds).

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::Edge;

/// Maximum vertex count; the Floyd-Warshall oracle is cubic.
const MAX_VERTICES: usize = 14;

/// Weight profile for generated graphs.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum WeightProfile {
    /// Weights in `0..=20`; both algorithms apply.
    NonNegative,
    /// Weights in `-6..=20`; negative cycles occur regularly.
    Signed,
    /// Weights in `0..=2`; many equal-length paths.
    Flat,
}

/// Directed graph fixture for a single-source query.
#[derive(Clone, Debug)]
pub(super) struct PathFixture {
    pub vertex_count: usize,
    pub source: usize,
    pub edges: Vec<Edge>,
    pub profile: WeightProfile,
}

/// Generates fixtures with non-negative weights.
pub(super) fn non_negative_fixture_strategy() -> impl Strategy<Value = PathFixture> {
    (
        prop_oneof![Just(WeightProfile::NonNegative), Just(WeightProfile::Flat)],
        any::<u64>(),
    )
        .prop_map(|(profile, seed)| generate_fixture(profile, &mut SmallRng::seed_from_u64(seed)))
}

/// Generates fixtures that may contain negative weights and cycles.
pub(super) fn signed_fixture_strategy() -> impl Strategy<Value = PathFixture> {
    any::<u64>().prop_map(|seed| {
        generate_fixture(WeightProfile::Signed, &mut SmallRng::seed_from_u64(seed))
    })
}

/// Generates a fixture for a specific weight profile.
pub(super) fn generate_fixture(profile: WeightProfile, rng: &mut SmallRng) -> PathFixture {
    let vertex_count = rng.gen_range(1..=MAX_VERTICES);
    let source = rng.gen_range(0..vertex_count);
    let edge_probability: f64 = rng.gen_range(0.05..=0.45);

    let mut edges = Vec::new();
    for from in 0..vertex_count {
        for to in 0..vertex_count {
            if from != to && rng.gen_bool(edge_probability) {
                edges.push(Edge::new(from, to, sample_weight(profile, rng)));
            }
        }
    }

    // Occasional parallel edges exercise duplicate heap entries.
    if let Some(&edge) = edges.first() {
        if rng.gen_bool(0.5) {
            let weight = sample_weight(profile, rng);
            edges.push(Edge::new(edge.source(), edge.target(), weight));
        }
    }

    PathFixture {
        vertex_count,
        source,
        edges,
        profile,
    }
}

fn sample_weight(profile: WeightProfile, rng: &mut SmallRng) -> i64 {
    match profile {
        WeightProfile::NonNegative => rng.gen_range(0..=20),
        WeightProfile::Signed => rng.gen_range(-6..=20),
        WeightProfile::Flat => rng.gen_range(0..=2),
    }
}
