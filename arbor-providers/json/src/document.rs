//! Serde mirrors of the input and output documents.

use arbor_core::{
    AlgorithmReport, BatchReport, EdgeSpec, GraphReport, GraphSpec, NamedEdge, SkippedGraph,
};
use serde::{Deserialize, Serialize};

/// Either accepted top-level shape of an input document.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum InputDocument {
    Bare(Vec<GraphDocument>),
    Wrapped { graphs: Vec<GraphDocument> },
}

impl InputDocument {
    pub(crate) fn into_specs(self) -> Vec<GraphSpec> {
        let (Self::Bare(graphs) | Self::Wrapped { graphs }) = self;
        graphs.into_iter().map(GraphSpec::from).collect()
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct GraphDocument {
    id: i64,
    nodes: Vec<String>,
    edges: Vec<EdgeDocument>,
}

#[derive(Debug, Deserialize)]
struct EdgeDocument {
    from: String,
    to: String,
    weight: i64,
}

impl From<GraphDocument> for GraphSpec {
    fn from(document: GraphDocument) -> Self {
        Self {
            id: document.id,
            nodes: document.nodes,
            edges: document
                .edges
                .into_iter()
                .map(|edge| EdgeSpec::new(edge.from, edge.to, edge.weight))
                .collect(),
        }
    }
}

/// Output document borrowing from a [`BatchReport`].
#[derive(Debug, Serialize)]
pub(crate) struct OutputDocument<'a> {
    results: Vec<ResultDocument<'a>>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    skipped: Vec<SkippedDocument>,
}

impl<'a> OutputDocument<'a> {
    pub(crate) fn new(batch: &'a BatchReport) -> Self {
        Self {
            results: batch.reports.iter().map(ResultDocument::new).collect(),
            skipped: batch.skipped.iter().map(SkippedDocument::new).collect(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ResultDocument<'a> {
    graph_id: i64,
    input_stats: InputStatsDocument,
    prim: AlgorithmDocument<'a>,
    kruskal: AlgorithmDocument<'a>,
}

impl<'a> ResultDocument<'a> {
    fn new(report: &'a GraphReport) -> Self {
        Self {
            graph_id: report.graph_id,
            input_stats: InputStatsDocument {
                vertices: report.input_stats.vertices,
                edges: report.input_stats.edges,
            },
            prim: AlgorithmDocument::new(&report.prim),
            kruskal: AlgorithmDocument::new(&report.kruskal),
        }
    }
}

#[derive(Debug, Serialize)]
struct InputStatsDocument {
    vertices: usize,
    edges: usize,
}

#[derive(Debug, Serialize)]
struct AlgorithmDocument<'a> {
    mst_edges: Vec<EdgeOutput<'a>>,
    total_cost: u64,
    operations_count: u64,
    execution_time_ms: f64,
}

impl<'a> AlgorithmDocument<'a> {
    fn new(report: &'a AlgorithmReport) -> Self {
        Self {
            mst_edges: report.mst_edges.iter().map(EdgeOutput::new).collect(),
            total_cost: report.total_cost,
            operations_count: report.operations_count,
            execution_time_ms: report.execution_time_ms(),
        }
    }
}

#[derive(Debug, Serialize)]
struct EdgeOutput<'a> {
    from: &'a str,
    to: &'a str,
    weight: u64,
}

impl<'a> EdgeOutput<'a> {
    fn new(edge: &'a NamedEdge) -> Self {
        Self {
            from: &edge.from,
            to: &edge.to,
            weight: edge.weight,
        }
    }
}

#[derive(Debug, Serialize)]
struct SkippedDocument {
    graph_id: i64,
    code: &'static str,
    message: String,
}

impl SkippedDocument {
    fn new(skipped: &SkippedGraph) -> Self {
        Self {
            graph_id: skipped.graph_id,
            code: skipped.code().as_str(),
            message: skipped.error.to_string(),
        }
    }
}
