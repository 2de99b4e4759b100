//! Minimum spanning forest engines.
//!
//! Two independent engines compute spanning edges over the same immutable
//! [`Graph`]: [`prim`] grows a single tree from node 0 through a lazy-deletion
//! heap, and [`kruskal`] scans a stable weight sort with an instrumented
//! [`UnionFind`]. Each call owns its own operation counter and working
//! structures, so the two engines can run concurrently over a shared graph.
//!
//! On a connected graph both engines return the same total weight. On a
//! disconnected graph Kruskal returns one tree per component while Prim only
//! covers node 0's component.

mod lazy_prim;
mod sorted_kruskal;
mod union_find;

use std::{fmt, time::Duration};

use tracing::{debug, instrument};

use crate::{
    graph::{Edge, Graph, Weight},
    metrics::{OperationCounter, measure},
};

pub use self::union_find::UnionFind;

/// The MST engines available for comparison.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Algorithm {
    /// Frontier growth from node 0.
    Prim,
    /// Global weight sort with cycle rejection.
    Kruskal,
}

impl Algorithm {
    /// Every engine, in reporting order.
    pub const ALL: [Self; 2] = [Self::Prim, Self::Kruskal];

    /// Returns the lowercase label used in logs and documents.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Prim => "prim",
            Self::Kruskal => "kruskal",
        }
    }

    /// Runs this engine over `graph`.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{Algorithm, EdgeSpec, Graph};
    ///
    /// let graph = Graph::new(["A", "B"], [EdgeSpec::new("A", "B", 7)])?;
    /// for algorithm in Algorithm::ALL {
    ///     assert_eq!(algorithm.run(&graph).total_weight(), 7);
    /// }
    /// # Ok::<(), arbor_core::GraphError>(())
    /// ```
    #[must_use]
    pub fn run(self, graph: &Graph) -> MstResult {
        match self {
            Self::Prim => prim(graph),
            Self::Kruskal => kruskal(graph),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Spanning edges accumulated by an engine before measurement is attached.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct SpanningEdges {
    pub(crate) edges: Vec<Edge>,
    pub(crate) total_weight: Weight,
}

impl SpanningEdges {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            edges: Vec::with_capacity(capacity),
            total_weight: 0,
        }
    }

    fn push(&mut self, edge: Edge) {
        self.total_weight = self.total_weight.saturating_add(edge.weight());
        self.edges.push(edge);
    }
}

/// The measured output of one engine run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MstResult {
    algorithm: Algorithm,
    edges: Vec<Edge>,
    total_weight: Weight,
    operations: u64,
    elapsed: Duration,
}

impl MstResult {
    /// Returns the engine that produced this result.
    #[must_use]
    #[rustfmt::skip]
    pub const fn algorithm(&self) -> Algorithm { self.algorithm }

    /// Returns the selected edges in selection order.
    ///
    /// Prim lists edges as `(parent, child)` ordered by child index. Kruskal
    /// lists edges in acceptance order with their input orientation.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns the sum of the selected edge weights.
    ///
    /// The sum is exact: [`Graph::new`] rejects graphs whose edge weights
    /// together exceed [`Weight::MAX`].
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_weight(&self) -> Weight { self.total_weight }

    /// Returns the deterministic operation count of the run.
    #[must_use]
    #[rustfmt::skip]
    pub const fn operations(&self) -> u64 { self.operations }

    /// Returns the wall-clock time spent in the engine.
    #[must_use]
    #[rustfmt::skip]
    pub const fn elapsed(&self) -> Duration { self.elapsed }

    fn measured(
        algorithm: Algorithm,
        graph: &Graph,
        engine: fn(&Graph, &mut OperationCounter) -> SpanningEdges,
    ) -> Self {
        let measured = measure(|counter| engine(graph, counter));
        let result = Self {
            algorithm,
            edges: measured.value.edges,
            total_weight: measured.value.total_weight,
            operations: measured.operations,
            elapsed: measured.elapsed,
        };
        debug!(
            algorithm = algorithm.as_str(),
            edges = result.edges.len(),
            total_weight = result.total_weight,
            operations = result.operations,
            elapsed_us = u64::try_from(result.elapsed.as_micros()).unwrap_or(u64::MAX),
            "engine finished"
        );
        result
    }
}

/// Computes the spanning tree of node 0's component with Prim's algorithm.
///
/// Nodes unreachable from node 0 are not covered; the result is a partial
/// forest on disconnected graphs.
///
/// # Examples
/// ```
/// use arbor_core::{EdgeSpec, Graph, prim};
///
/// let graph = Graph::new(
///     ["A", "B", "C", "D"],
///     [EdgeSpec::new("A", "B", 5), EdgeSpec::new("C", "D", 7)],
/// )?;
/// let result = prim(&graph);
/// assert_eq!(result.edges().len(), 1);
/// assert_eq!(result.total_weight(), 5);
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[must_use]
#[instrument(
    name = "mst.prim",
    level = "debug",
    skip(graph),
    fields(nodes = graph.node_count(), edges = graph.edge_count()),
)]
pub fn prim(graph: &Graph) -> MstResult {
    MstResult::measured(Algorithm::Prim, graph, lazy_prim::spanning_edges)
}

/// Computes a minimum spanning forest with Kruskal's algorithm.
///
/// # Examples
/// ```
/// use arbor_core::{EdgeSpec, Graph, kruskal};
///
/// let graph = Graph::new(
///     ["A", "B", "C", "D"],
///     [EdgeSpec::new("A", "B", 5), EdgeSpec::new("C", "D", 7)],
/// )?;
/// let result = kruskal(&graph);
/// assert_eq!(result.edges().len(), 2);
/// assert_eq!(result.total_weight(), 12);
/// # Ok::<(), arbor_core::GraphError>(())
/// ```
#[must_use]
#[instrument(
    name = "mst.kruskal",
    level = "debug",
    skip(graph),
    fields(nodes = graph.node_count(), edges = graph.edge_count()),
)]
pub fn kruskal(graph: &Graph) -> MstResult {
    MstResult::measured(Algorithm::Kruskal, graph, sorted_kruskal::spanning_edges)
}

#[cfg(test)]
mod property;
