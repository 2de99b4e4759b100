//! Seeded synthetic graph generators.
//!
//! Every generated graph is connected: node `i` is first linked to a random
//! earlier node, then `extra_edges_per_node * node_count` random edges are
//! layered on top. Extra edges may repeat a pair or form a self-loop, which
//! exercises the engines' duplicate handling the same way real input does.

mod errors;

use arbor_core::{EdgeSpec, GraphSpec};
use rand::{Rng, SeedableRng, rngs::SmallRng};

pub use errors::SyntheticError;

/// Configuration for a synthetic connected graph.
#[derive(Clone, Debug)]
pub struct SyntheticGraphConfig {
    /// Number of nodes to generate.
    pub node_count: usize,
    /// Extra random edges per node beyond the spanning tree.
    pub extra_edges_per_node: usize,
    /// Inclusive upper bound for edge weights.
    pub max_weight: i64,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

impl SyntheticGraphConfig {
    fn validate(&self) -> Result<usize, SyntheticError> {
        if self.node_count == 0 {
            return Err(SyntheticError::ZeroNodes);
        }
        if self.max_weight < 0 {
            return Err(SyntheticError::NegativeMaxWeight {
                max_weight: self.max_weight,
            });
        }
        let extra = self
            .node_count
            .checked_mul(self.extra_edges_per_node)
            .ok_or(SyntheticError::Overflow)?;
        extra
            .checked_add(self.node_count - 1)
            .ok_or(SyntheticError::Overflow)
    }
}

/// Name given to the node at `index`.
#[must_use]
pub fn node_name(index: usize) -> String {
    format!("v{index}")
}

/// Generates one connected graph description with the given `id`.
///
/// # Errors
/// Returns [`SyntheticError`] when the configuration is invalid.
pub fn generate_graph(
    config: &SyntheticGraphConfig,
    id: i64,
) -> Result<GraphSpec, SyntheticError> {
    let edge_count = config.validate()?;
    let mut rng = SmallRng::seed_from_u64(config.seed);
    Ok(build(config, id, edge_count, &mut rng))
}

/// Generates `graph_count` graphs with ids `1..=graph_count`.
///
/// Each graph draws from the same seeded stream, so graphs differ from one
/// another while the batch as a whole is reproducible.
///
/// # Errors
/// Returns [`SyntheticError`] when the configuration is invalid or
/// `graph_count` is zero.
pub fn generate_batch(
    config: &SyntheticGraphConfig,
    graph_count: usize,
) -> Result<Vec<GraphSpec>, SyntheticError> {
    if graph_count == 0 {
        return Err(SyntheticError::ZeroGraphs);
    }
    let edge_count = config.validate()?;
    let mut rng = SmallRng::seed_from_u64(config.seed);
    (1..=graph_count)
        .map(|position| {
            let id = i64::try_from(position).map_err(|_| SyntheticError::Overflow)?;
            Ok(build(config, id, edge_count, &mut rng))
        })
        .collect()
}

fn build(
    config: &SyntheticGraphConfig,
    id: i64,
    edge_count: usize,
    rng: &mut SmallRng,
) -> GraphSpec {
    let nodes: Vec<String> = (0..config.node_count).map(node_name).collect();
    let mut edges = Vec::with_capacity(edge_count);
    let weight = |rng: &mut SmallRng| rng.gen_range(0..=config.max_weight);

    for child in 1..config.node_count {
        let parent = rng.gen_range(0..child);
        let w = weight(rng);
        edges.push(EdgeSpec::new(node_name(parent), node_name(child), w));
    }
    for _ in 0..edge_count - (config.node_count - 1) {
        let from = rng.gen_range(0..config.node_count);
        let to = rng.gen_range(0..config.node_count);
        let w = weight(rng);
        edges.push(EdgeSpec::new(node_name(from), node_name(to), w));
    }

    GraphSpec { id, nodes, edges }
}
