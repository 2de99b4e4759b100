//! Prim's algorithm over a lazy-deletion binary heap.
//!
//! The frontier holds `(weight, node)` entries. Improving a node's best known
//! link pushes a fresh entry and leaves the stale one in place; stale entries
//! are discarded when popped. Growth starts at node 0 and never restarts, so
//! nodes outside node 0's component get no link and are left out of the
//! result.

use std::{cmp::Reverse, collections::BinaryHeap};

use crate::{
    graph::{Edge, Graph, Weight},
    metrics::OperationCounter,
};

use super::SpanningEdges;

const START: usize = 0;

#[derive(Clone, Copy, Debug)]
struct Link {
    parent: usize,
    weight: Weight,
}

pub(super) fn spanning_edges(graph: &Graph, counter: &mut OperationCounter) -> SpanningEdges {
    let node_count = graph.node_count();
    if node_count == 0 {
        return SpanningEdges::default();
    }

    let mut finalized = vec![false; node_count];
    let mut best: Vec<Option<Link>> = vec![None; node_count];
    let mut frontier = BinaryHeap::new();
    frontier.push(Reverse((0, START)));
    counter.tick();

    while let Some(Reverse((_, node))) = frontier.pop() {
        counter.tick();
        if finalized[node] {
            continue;
        }
        finalized[node] = true;

        for edge in graph.incident_edges(node) {
            let neighbour = edge.opposite(node);
            counter.tick();
            let improves = !finalized[neighbour]
                && best[neighbour].is_none_or(|link| edge.weight() < link.weight);
            if improves {
                best[neighbour] = Some(Link {
                    parent: node,
                    weight: edge.weight(),
                });
                frontier.push(Reverse((edge.weight(), neighbour)));
            }
            // Accepted and rejected relaxations cost the same.
            counter.tick();
        }
    }

    let mut tree = SpanningEdges::default();
    for (node, link) in best.iter().enumerate().skip(START + 1) {
        let Some(link) = link else {
            continue;
        };
        tree.push(Edge::new(link.parent, node, link.weight));
        counter.tick();
    }
    tree
}
