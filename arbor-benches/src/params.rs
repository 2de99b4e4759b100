//! Benchmark parameter types.
//!
//! Each type renders as a compact `BenchmarkId` parameter.

use std::fmt;

/// Parameters for a single-graph engine benchmark.
#[derive(Clone, Debug)]
pub struct MstBenchParams {
    /// Number of nodes in the graph.
    pub node_count: usize,
    /// Extra random edges added per node on top of the spanning tree.
    pub extra_edges_per_node: usize,
}

impl fmt::Display for MstBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},d={}", self.node_count, self.extra_edges_per_node)
    }
}

/// Parameters for a batch runner benchmark.
#[derive(Clone, Debug)]
pub struct BatchBenchParams {
    /// Number of graphs in the batch.
    pub graph_count: usize,
    /// Number of nodes in each graph.
    pub node_count: usize,
}

impl fmt::Display for BatchBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "g={},n={}", self.graph_count, self.node_count)
    }
}
