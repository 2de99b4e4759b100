//! Seeded graph generators for the MST property suites.
//!
//! Each generator draws from a [`SmallRng`] so that a failing case can be
//! replayed from its distribution and seed alone.

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::types::{FixtureEdge, MstFixture, WeightDistribution};

const MIN_NODES: usize = 2;
const MAX_NODES: usize = 48;
const DENSE_MAX_NODES: usize = 24;
const MAX_WEIGHT: u64 = 1_000_000;

/// Generates fixtures across every [`WeightDistribution`].
pub(super) fn mst_fixture_strategy() -> impl Strategy<Value = MstFixture> {
    (any::<WeightDistribution>(), any::<u64>()).prop_map(|(distribution, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(distribution, &mut rng)
    })
}

/// Generates a fixture for one explicit distribution.
pub(super) fn generate_fixture(distribution: WeightDistribution, rng: &mut SmallRng) -> MstFixture {
    match distribution {
        WeightDistribution::Unique => {
            let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
            random_pairs(rng, node_count, (0.2, 0.6), distribution, |rng| {
                rng.gen_range(0..MAX_WEIGHT)
            })
        }
        WeightDistribution::ManyIdentical => {
            let pool: Vec<u64> = (0..rng.gen_range(1..=3))
                .map(|_| rng.gen_range(0..10))
                .collect();
            let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
            random_pairs(rng, node_count, (0.3, 0.7), distribution, move |rng| {
                pool[rng.gen_range(0..pool.len())]
            })
        }
        WeightDistribution::Sparse => generate_sparse(rng),
        WeightDistribution::Dense => {
            let node_count = rng.gen_range(MIN_NODES..=DENSE_MAX_NODES);
            random_pairs(rng, node_count, (0.7, 0.95), distribution, |rng| {
                rng.gen_range(0..MAX_WEIGHT)
            })
        }
        WeightDistribution::Disconnected => generate_disconnected(rng),
    }
}

/// Adds each unordered pair with a probability drawn from `probability`.
fn random_pairs(
    rng: &mut SmallRng,
    node_count: usize,
    probability: (f64, f64),
    distribution: WeightDistribution,
    mut weight: impl FnMut(&mut SmallRng) -> u64,
) -> MstFixture {
    let edge_probability = rng.gen_range(probability.0..=probability.1);
    let mut edges = Vec::new();
    for source in 0..node_count {
        for target in (source + 1)..node_count {
            if rng.gen_bool(edge_probability) {
                // Orientation is randomised so engines see both directions.
                let edge = if rng.gen_bool(0.5) {
                    FixtureEdge::new(source, target, weight(rng))
                } else {
                    FixtureEdge::new(target, source, weight(rng))
                };
                edges.push(edge);
            }
        }
    }
    MstFixture {
        node_count,
        edges,
        distribution,
    }
}

/// Builds a random spanning tree, then adds extra edges that may repeat a
/// pair or loop back onto a single node.
fn generate_sparse(rng: &mut SmallRng) -> MstFixture {
    let node_count = rng.gen_range(MIN_NODES..=MAX_NODES);
    let mut order: Vec<usize> = (0..node_count).collect();
    shuffle(&mut order, rng);

    let mut edges: Vec<FixtureEdge> = order
        .windows(2)
        .map(|pair| FixtureEdge::new(pair[0], pair[1], rng.gen_range(0..MAX_WEIGHT)))
        .collect();

    for _ in 0..rng.gen_range(node_count / 2..=node_count) {
        let source = rng.gen_range(0..node_count);
        let target = rng.gen_range(0..node_count);
        edges.push(FixtureEdge::new(source, target, rng.gen_range(0..MAX_WEIGHT)));
    }
    shuffle(&mut edges, rng);

    MstFixture {
        node_count,
        edges,
        distribution: WeightDistribution::Sparse,
    }
}

/// Builds two to five components, singletons included, and interleaves
/// their node indices so that node 0 is not always in the largest one.
fn generate_disconnected(rng: &mut SmallRng) -> MstFixture {
    let sizes: Vec<usize> = (0..rng.gen_range(2..=5))
        .map(|_| rng.gen_range(1..=10))
        .collect();
    let node_count: usize = sizes.iter().sum();
    let mut relabel: Vec<usize> = (0..node_count).collect();
    shuffle(&mut relabel, rng);

    let mut edges = Vec::new();
    let mut offset = 0;
    for size in sizes {
        let component = random_pairs(
            rng,
            size,
            (0.4, 0.8),
            WeightDistribution::Disconnected,
            |rng| rng.gen_range(0..MAX_WEIGHT),
        );
        // Chain the component first so it stays internally connected.
        for local in 1..size {
            edges.push(FixtureEdge::new(
                relabel[offset + local - 1],
                relabel[offset + local],
                rng.gen_range(0..MAX_WEIGHT),
            ));
        }
        edges.extend(component.edges.into_iter().map(|edge| {
            FixtureEdge::new(
                relabel[offset + edge.source],
                relabel[offset + edge.target],
                edge.weight,
            )
        }));
        offset += size;
    }

    MstFixture {
        node_count,
        edges,
        distribution: WeightDistribution::Disconnected,
    }
}

/// Fisher-Yates shuffle driven by `rng`.
fn shuffle<T>(items: &mut [T], rng: &mut SmallRng) {
    for index in (1..items.len()).rev() {
        let other = rng.gen_range(0..=index);
        items.swap(index, other);
    }
}

impl Arbitrary for WeightDistribution {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with((): Self::Parameters) -> Self::Strategy {
        prop_oneof![
            2 => Just(Self::Unique),
            3 => Just(Self::ManyIdentical),
            2 => Just(Self::Sparse),
            2 => Just(Self::Dense),
            2 => Just(Self::Disconnected),
        ]
        .boxed()
    }
}
