//! Kruskal's algorithm over a stable weight sort.
//!
//! Every comparator call made by the sort counts as one operation, and the
//! sort pass adds one more per edge. Equal weights keep their input order.
//! The scan stops once `n - 1` edges are accepted; on a disconnected graph
//! that threshold is never met and every edge is examined.

use crate::{graph::Graph, metrics::OperationCounter};

use super::{SpanningEdges, union_find::UnionFind};

pub(super) fn spanning_edges(graph: &Graph, counter: &mut OperationCounter) -> SpanningEdges {
    let mut ordered = graph.edges().to_vec();
    ordered.sort_by(|left, right| {
        counter.tick();
        left.weight().cmp(&right.weight())
    });
    counter.add(u64::try_from(ordered.len()).unwrap_or(u64::MAX));

    let node_count = graph.node_count();
    let tree_size = node_count.saturating_sub(1);
    let mut sets = UnionFind::new(node_count);
    let mut tree = SpanningEdges::with_capacity(tree_size);

    for edge in ordered {
        counter.tick();
        if sets.union(edge.source(), edge.target(), counter) {
            tree.push(edge);
        }
        counter.tick();
        if tree.edges.len() == tree_size {
            break;
        }
    }
    tree
}
