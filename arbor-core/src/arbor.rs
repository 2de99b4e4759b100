//! Batch orchestration for the arbor library.
//!
//! Provides the [`Arbor`] runner that builds each graph, runs both engines
//! over it and collects the per-graph reports in input order.

use tracing::{debug, info, instrument, warn};

use crate::{
    Result,
    builder::{ExecutionStrategy, FailurePolicy},
    error::{ArborError, GraphError},
    graph::{Graph, GraphSpec},
    mst::{MstResult, kruskal, prim},
    report::{AlgorithmReport, BatchReport, GraphReport, InputStats, SkippedGraph},
};

type GraphOutcome = core::result::Result<GraphReport, GraphError>;

/// Entry point for comparing Prim and Kruskal over a batch of graphs.
///
/// # Examples
/// ```
/// use arbor_core::{ArborBuilder, EdgeSpec, GraphSpec};
///
/// let arbor = ArborBuilder::new().build()?;
/// let batch = arbor.run(&[GraphSpec {
///     id: 1,
///     nodes: vec!["A".into(), "B".into(), "C".into()],
///     edges: vec![
///         EdgeSpec::new("A", "B", 1),
///         EdgeSpec::new("B", "C", 2),
///         EdgeSpec::new("A", "C", 3),
///     ],
/// }])?;
/// let report = &batch.reports[0];
/// assert_eq!(report.prim.total_cost, 3);
/// assert_eq!(report.kruskal.total_cost, 3);
/// # Ok::<(), arbor_core::ArborError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Arbor {
    execution_strategy: ExecutionStrategy,
    failure_policy: FailurePolicy,
}

impl Arbor {
    pub(crate) fn new(
        execution_strategy: ExecutionStrategy,
        failure_policy: FailurePolicy,
    ) -> Self {
        Self {
            execution_strategy,
            failure_policy,
        }
    }

    /// Returns the execution strategy used by [`Self::run`].
    #[must_use]
    pub fn execution_strategy(&self) -> ExecutionStrategy {
        self.execution_strategy
    }

    /// Returns the policy applied to graphs that cannot be built.
    #[must_use]
    pub fn failure_policy(&self) -> FailurePolicy {
        self.failure_policy
    }

    /// Builds and analyses every graph in `graphs`.
    ///
    /// Reports appear in input order regardless of the execution strategy.
    ///
    /// # Errors
    /// Returns [`ArborError::Graph`] for the first graph, in input order,
    /// that cannot be built when the failure policy is
    /// [`FailurePolicy::Abort`].
    #[instrument(
        name = "arbor.run",
        err,
        skip(self, graphs),
        fields(
            graphs = graphs.len(),
            strategy = ?self.execution_strategy,
            policy = ?self.failure_policy,
        ),
    )]
    pub fn run(&self, graphs: &[GraphSpec]) -> Result<BatchReport> {
        let batch = match self.execution_strategy {
            ExecutionStrategy::Sequential => {
                self.collect(graphs, graphs.iter().map(|spec| Self::process(spec, false)))?
            }
            #[cfg(feature = "parallel")]
            ExecutionStrategy::Parallel => {
                use rayon::prelude::*;

                let outcomes: Vec<GraphOutcome> = graphs
                    .par_iter()
                    .map(|spec| Self::process(spec, true))
                    .collect();
                self.collect(graphs, outcomes)?
            }
            #[cfg(not(feature = "parallel"))]
            ExecutionStrategy::Parallel => {
                return Err(ArborError::BackendUnavailable {
                    requested: ExecutionStrategy::Parallel,
                });
            }
        };

        info!(
            analysed = batch.reports.len(),
            skipped = batch.skipped.len(),
            "batch complete"
        );
        Ok(batch)
    }

    /// Runs both engines over an already built graph.
    ///
    /// # Examples
    /// ```
    /// use arbor_core::{Arbor, EdgeSpec, Graph};
    ///
    /// let graph = Graph::new(
    ///     ["A", "B", "C", "D"],
    ///     [EdgeSpec::new("A", "B", 5), EdgeSpec::new("C", "D", 7)],
    /// )?;
    /// let report = Arbor::analyse(7, &graph);
    /// assert_eq!(report.graph_id, 7);
    /// assert_eq!(report.prim.total_cost, 5);
    /// assert_eq!(report.kruskal.total_cost, 12);
    /// # Ok::<(), arbor_core::GraphError>(())
    /// ```
    #[must_use]
    pub fn analyse(graph_id: i64, graph: &Graph) -> GraphReport {
        let (prim_result, kruskal_result) = (prim(graph), kruskal(graph));
        Self::report(graph_id, graph, prim_result, kruskal_result)
    }

    #[instrument(
        name = "arbor.graph",
        level = "debug",
        skip(spec),
        fields(graph_id = spec.id, nodes = spec.nodes.len(), edges = spec.edges.len()),
    )]
    fn process(spec: &GraphSpec, concurrent_engines: bool) -> GraphOutcome {
        let graph = Graph::from_spec(spec)?;
        let (prim_result, kruskal_result) = if concurrent_engines {
            run_engines_concurrently(&graph)
        } else {
            (prim(&graph), kruskal(&graph))
        };
        Ok(Self::report(spec.id, &graph, prim_result, kruskal_result))
    }

    fn report(graph_id: i64, graph: &Graph, prim: MstResult, kruskal: MstResult) -> GraphReport {
        record_engine(&prim);
        record_engine(&kruskal);
        let report = GraphReport {
            graph_id,
            input_stats: InputStats::of(graph),
            prim: AlgorithmReport::from_result(graph, prim),
            kruskal: AlgorithmReport::from_result(graph, kruskal),
        };
        debug!(
            graph_id,
            prim_cost = report.prim.total_cost,
            kruskal_cost = report.kruskal.total_cost,
            "graph analysed"
        );
        report
    }

    /// Folds per-graph outcomes into a batch, stopping at the first failure
    /// under [`FailurePolicy::Abort`].
    fn collect(
        &self,
        graphs: &[GraphSpec],
        outcomes: impl IntoIterator<Item = GraphOutcome>,
    ) -> Result<BatchReport> {
        let mut batch = BatchReport::default();
        for (spec, outcome) in graphs.iter().zip(outcomes) {
            match outcome {
                Ok(report) => {
                    record_processed();
                    batch.reports.push(report);
                }
                Err(error) => match self.failure_policy {
                    FailurePolicy::Abort => {
                        return Err(ArborError::Graph {
                            graph_id: spec.id,
                            error,
                        });
                    }
                    FailurePolicy::Skip => {
                        warn!(
                            graph_id = spec.id,
                            code = error.code().as_str(),
                            %error,
                            "skipping invalid graph"
                        );
                        record_skipped();
                        batch.skipped.push(SkippedGraph {
                            graph_id: spec.id,
                            error,
                        });
                    }
                },
            }
        }
        Ok(batch)
    }
}

#[cfg(feature = "parallel")]
fn run_engines_concurrently(graph: &Graph) -> (MstResult, MstResult) {
    rayon::join(|| prim(graph), || kruskal(graph))
}

#[cfg(not(feature = "parallel"))]
fn run_engines_concurrently(graph: &Graph) -> (MstResult, MstResult) {
    (prim(graph), kruskal(graph))
}

#[cfg(feature = "metrics")]
fn record_engine(result: &MstResult) {
    let operations = result.operations() as f64;
    metrics::histogram!("arbor_operations", "algorithm" => result.algorithm().as_str())
        .record(operations);
}

#[cfg(not(feature = "metrics"))]
fn record_engine(_result: &MstResult) {}

#[cfg(feature = "metrics")]
fn record_processed() {
    metrics::counter!("arbor_graphs_processed").increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_processed() {}

#[cfg(feature = "metrics")]
fn record_skipped() {
    metrics::counter!("arbor_graphs_skipped").increment(1);
}

#[cfg(not(feature = "metrics"))]
fn record_skipped() {}
