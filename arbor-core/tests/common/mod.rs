//! Graph fixtures shared by the integration tests.
#![allow(dead_code, reason = "each test binary uses a different subset")]

use arbor_core::{EdgeSpec, GraphSpec};

/// Builds a graph description from borrowed names and weights.
pub fn spec(id: i64, nodes: &[&str], edges: &[(&str, &str, i64)]) -> GraphSpec {
    GraphSpec {
        id,
        nodes: nodes.iter().map(|&node| node.to_owned()).collect(),
        edges: edges
            .iter()
            .map(|&(from, to, weight)| EdgeSpec::new(from, to, weight))
            .collect(),
    }
}

/// The three-node graph whose minimum spanning tree is `A-B:1, B-C:2`.
pub fn triangle(id: i64) -> GraphSpec {
    spec(
        id,
        &["A", "B", "C"],
        &[("A", "B", 1), ("B", "C", 2), ("A", "C", 3)],
    )
}

/// Two disconnected pairs, `A-B:5` and `C-D:7`.
pub fn two_pairs(id: i64) -> GraphSpec {
    spec(id, &["A", "B", "C", "D"], &[("A", "B", 5), ("C", "D", 7)])
}

/// A graph with an edge to an undeclared node.
pub fn dangling(id: i64) -> GraphSpec {
    spec(id, &["A", "B"], &[("A", "Z", 1)])
}

/// A mixed batch: valid, invalid, valid.
pub fn mixed_batch() -> Vec<GraphSpec> {
    vec![triangle(1), dangling(2), two_pairs(3)]
}
