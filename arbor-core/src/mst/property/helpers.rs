//! Graph construction and reachability helpers for the property suites.

use crate::graph::{EdgeSpec, Graph};

use super::types::MstFixture;

/// Returns the generated name of node `index`.
pub(super) fn node_name(index: usize) -> String {
    format!("n{index}")
}

/// Builds the validated [`Graph`] described by `fixture`.
///
/// # Panics
/// Panics if the generated fixture is not a valid graph.
pub(super) fn build_graph(fixture: &MstFixture) -> Graph {
    let names: Vec<String> = (0..fixture.node_count).map(node_name).collect();
    let edges = fixture.edges.iter().map(|edge| {
        let weight = i64::try_from(edge.weight).expect("generated weights fit in i64");
        EdgeSpec::new(node_name(edge.source), node_name(edge.target), weight)
    });
    Graph::new(&names, edges).expect("generated fixtures are valid graphs")
}

/// Marks every node reachable from node 0.
pub(super) fn reachable_from_first(fixture: &MstFixture) -> Vec<bool> {
    let mut adjacency = vec![Vec::new(); fixture.node_count];
    for edge in &fixture.edges {
        adjacency[edge.source].push(edge.target);
        adjacency[edge.target].push(edge.source);
    }

    let mut seen = vec![false; fixture.node_count];
    let Some(first) = seen.first_mut() else {
        return seen;
    };
    *first = true;
    let mut stack = vec![0];
    while let Some(node) = stack.pop() {
        for &next in &adjacency[node] {
            if !seen[next] {
                seen[next] = true;
                stack.push(next);
            }
        }
    }
    seen
}

/// Walks parent links until reaching a self-parented node.
pub(super) fn find_root(parent: &[usize], mut node: usize) -> usize {
    while parent[node] != node {
        node = parent[node];
    }
    node
}
