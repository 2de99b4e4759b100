//! Per-graph and per-batch reports.
//!
//! Reports carry node names rather than indices so they can be serialised
//! without access to the originating [`Graph`].

use std::{sync::Arc, time::Duration};

use crate::{
    error::{GraphError, GraphErrorCode},
    graph::{Graph, Weight},
    mst::{Algorithm, MstResult},
};

/// A selected edge expressed with the node names given in the input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedEdge {
    /// Name of the first endpoint.
    pub from: Arc<str>,
    /// Name of the second endpoint.
    pub to: Arc<str>,
    /// Edge weight.
    pub weight: Weight,
}

/// Size of an input graph.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputStats {
    /// Number of nodes.
    pub vertices: usize,
    /// Number of edges, self-loops and parallel edges included.
    pub edges: usize,
}

impl InputStats {
    /// Reads the node and edge counts of `graph`.
    #[must_use]
    pub fn of(graph: &Graph) -> Self {
        Self {
            vertices: graph.node_count(),
            edges: graph.edge_count(),
        }
    }
}

/// One engine's outcome on one graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlgorithmReport {
    /// Engine that produced the report.
    pub algorithm: Algorithm,
    /// Selected edges in selection order.
    pub mst_edges: Vec<NamedEdge>,
    /// Sum of the selected weights.
    pub total_cost: Weight,
    /// Deterministic operation count.
    pub operations_count: u64,
    /// Wall-clock time spent in the engine.
    pub execution_time: Duration,
}

impl AlgorithmReport {
    /// Resolves the node indices in `result` against `graph`'s name table.
    /// `result` must come from an engine run over `graph`.
    pub(crate) fn from_result(graph: &Graph, result: MstResult) -> Self {
        let names = graph.node_names();
        let mst_edges = result
            .edges()
            .iter()
            .map(|edge| NamedEdge {
                from: Arc::clone(&names[edge.source()]),
                to: Arc::clone(&names[edge.target()]),
                weight: edge.weight(),
            })
            .collect();
        Self {
            algorithm: result.algorithm(),
            mst_edges,
            total_cost: result.total_weight(),
            operations_count: result.operations(),
            execution_time: result.elapsed(),
        }
    }

    /// Returns the execution time in fractional milliseconds.
    #[must_use]
    pub fn execution_time_ms(&self) -> f64 {
        self.execution_time.as_nanos() as f64 / 1_000_000.0
    }
}

/// Both engines' outcomes on one graph.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphReport {
    /// Identifier copied from the input graph.
    pub graph_id: i64,
    /// Size of the input graph.
    pub input_stats: InputStats,
    /// Prim's partial or full tree.
    pub prim: AlgorithmReport,
    /// Kruskal's spanning forest.
    pub kruskal: AlgorithmReport,
}

/// A graph left out of the batch under [`crate::FailurePolicy::Skip`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SkippedGraph {
    /// Identifier of the skipped graph.
    pub graph_id: i64,
    /// Construction failure that caused the skip.
    pub error: GraphError,
}

impl SkippedGraph {
    /// Returns the stable code of the construction failure.
    #[must_use]
    pub const fn code(&self) -> GraphErrorCode {
        self.error.code()
    }
}

/// Reports for every processed graph, in input order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Reports for graphs that were analysed.
    pub reports: Vec<GraphReport>,
    /// Graphs skipped because they could not be built.
    pub skipped: Vec<SkippedGraph>,
}

impl BatchReport {
    /// Returns `true` when no graph was analysed or skipped.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reports.is_empty() && self.skipped.is_empty()
    }
}
