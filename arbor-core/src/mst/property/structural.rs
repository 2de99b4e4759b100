//! Structural checks on the selected edge sets.
//!
//! Kruskal output must be acyclic with `n - c` edges drawn from the input.
//! Prim output must give each node reachable from node 0, apart from node 0
//! itself, exactly one incoming tree edge whose parent is also reachable.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::{
    graph::{Edge, Graph},
    mst::{kruskal, prim},
};

use super::helpers::{build_graph, find_root, reachable_from_first};
use super::oracle::sequential_kruskal;
use super::types::MstFixture;

pub(super) fn check_forest_shape(fixture: &MstFixture) -> TestCaseResult {
    let graph = build_graph(fixture);
    check_kruskal_forest(fixture, &graph)?;
    check_prim_tree(fixture, &graph)
}

fn check_kruskal_forest(fixture: &MstFixture, graph: &Graph) -> TestCaseResult {
    let context = fixture.context();
    let forest = kruskal(graph);
    let mut parent: Vec<usize> = (0..fixture.node_count).collect();

    for edge in forest.edges() {
        if edge.is_self_loop() {
            return Err(TestCaseError::fail(format!(
                "kruskal selected self-loop {edge:?} ({context})"
            )));
        }
        ensure_input_edge(graph, edge, &context)?;
        let left = find_root(&parent, edge.source());
        let right = find_root(&parent, edge.target());
        if left == right {
            return Err(TestCaseError::fail(format!(
                "kruskal edge {edge:?} closes a cycle ({context})"
            )));
        }
        parent[right] = left;
    }

    let components = sequential_kruskal(fixture.node_count, &fixture.edges).component_count;
    let expected = fixture.node_count - components;
    if forest.edges().len() != expected {
        return Err(TestCaseError::fail(format!(
            "kruskal selected {} edges, expected n - c = {expected} ({context})",
            forest.edges().len(),
        )));
    }
    Ok(())
}

fn check_prim_tree(fixture: &MstFixture, graph: &Graph) -> TestCaseResult {
    let context = fixture.context();
    let tree = prim(graph);
    let reachable = reachable_from_first(fixture);
    let mut has_parent = vec![false; fixture.node_count];

    for edge in tree.edges() {
        ensure_input_edge(graph, edge, &context)?;
        let child = edge.target();
        if child == 0 || has_parent[child] {
            return Err(TestCaseError::fail(format!(
                "prim gave node {child} a second parent ({context})"
            )));
        }
        if !reachable[child] || !reachable[edge.source()] {
            return Err(TestCaseError::fail(format!(
                "prim edge {edge:?} leaves node 0's component ({context})"
            )));
        }
        has_parent[child] = true;
    }

    let expected = reachable.iter().filter(|&&seen| seen).count().saturating_sub(1);
    if tree.edges().len() != expected {
        return Err(TestCaseError::fail(format!(
            "prim selected {} edges, node 0 reaches {expected} others ({context})",
            tree.edges().len(),
        )));
    }
    Ok(())
}

fn ensure_input_edge(graph: &Graph, edge: &Edge, context: &str) -> TestCaseResult {
    let endpoints = (edge.source(), edge.target());
    let present = graph.edges().iter().any(|candidate| {
        candidate.weight() == edge.weight()
            && (endpoints == (candidate.source(), candidate.target())
                || endpoints == (candidate.target(), candidate.source()))
    });
    if present {
        Ok(())
    } else {
        Err(TestCaseError::fail(format!(
            "{edge:?} is not an input edge ({context})"
        )))
    }
}
