//! Uninstrumented sequential Kruskal used as the reference result.

use super::helpers::find_root;
use super::types::FixtureEdge;

/// Summary of the reference minimum spanning forest.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(super) struct OracleForest {
    /// Sum of accepted edge weights over every component.
    pub total_weight: u64,
    /// Number of accepted edges.
    pub edge_count: usize,
    /// Number of connected components, isolated nodes included.
    pub component_count: usize,
    /// Sum of accepted edge weights inside node 0's component.
    pub first_component_weight: u64,
}

/// Computes the minimum spanning forest of the fixture edges.
///
/// Uses an unstable sort and a union-find without rank or compression so
/// that nothing is shared with the engines under test.
pub(super) fn sequential_kruskal(node_count: usize, edges: &[FixtureEdge]) -> OracleForest {
    let mut ordered: Vec<&FixtureEdge> = edges
        .iter()
        .filter(|edge| edge.source < node_count && edge.target < node_count)
        .collect();
    ordered.sort_unstable_by_key(|edge| edge.weight);

    let mut parent: Vec<usize> = (0..node_count).collect();
    let mut accepted = Vec::new();
    for edge in ordered {
        let left = find_root(&parent, edge.source);
        let right = find_root(&parent, edge.target);
        if left != right {
            parent[right] = left;
            accepted.push(*edge);
        }
    }

    let first_root = (node_count > 0).then(|| find_root(&parent, 0));
    let first_component_weight = accepted
        .iter()
        .filter(|edge| Some(find_root(&parent, edge.source)) == first_root)
        .map(|edge| edge.weight)
        .sum();

    OracleForest {
        total_weight: accepted.iter().map(|edge| edge.weight).sum(),
        edge_count: accepted.len(),
        component_count: node_count - accepted.len(),
        first_component_weight,
    }
}
