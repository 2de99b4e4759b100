//! Arbor core library.
//!
//! Builds weighted undirected graphs from named nodes and edges, then
//! compares Prim's and Kruskal's minimum spanning forest engines on them.
//! Every engine run reports its selected edges, total weight, a
//! deterministic operation count and its wall-clock time.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod arbor;
mod builder;
mod error;
mod graph;
mod metrics;
mod mst;
mod report;
#[cfg(test)]
pub(crate) mod test_utils;

pub use crate::{
    arbor::Arbor,
    builder::{ArborBuilder, ExecutionStrategy, FailurePolicy},
    error::{ArborError, ArborErrorCode, GraphError, GraphErrorCode, Result},
    graph::{Edge, EdgeSpec, Graph, GraphSpec, Weight},
    metrics::{Measured, OperationCounter, measure},
    mst::{Algorithm, MstResult, UnionFind, kruskal, prim},
    report::{AlgorithmReport, BatchReport, GraphReport, InputStats, NamedEdge, SkippedGraph},
};
