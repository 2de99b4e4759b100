//! Both engines agree with the sequential oracle on total weight.
//!
//! Kruskal must match the whole-forest weight and edge count. Prim only
//! covers node 0's component, so it must match the oracle's weight for that
//! component and equal the full weight whenever the graph is connected.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::mst::{kruskal, prim};

use super::helpers::build_graph;
use super::oracle::sequential_kruskal;
use super::types::MstFixture;

pub(super) fn check_totals_against_oracle(fixture: &MstFixture) -> TestCaseResult {
    let graph = build_graph(fixture);
    let oracle = sequential_kruskal(fixture.node_count, &fixture.edges);
    let context = fixture.context();

    let forest = kruskal(&graph);
    if forest.total_weight() != oracle.total_weight {
        return Err(TestCaseError::fail(format!(
            "kruskal weight {} differs from oracle {} ({context})",
            forest.total_weight(),
            oracle.total_weight,
        )));
    }
    if forest.edges().len() != oracle.edge_count {
        return Err(TestCaseError::fail(format!(
            "kruskal selected {} edges, oracle {} ({context})",
            forest.edges().len(),
            oracle.edge_count,
        )));
    }

    let tree = prim(&graph);
    if tree.total_weight() != oracle.first_component_weight {
        return Err(TestCaseError::fail(format!(
            "prim weight {} differs from oracle component weight {} ({context})",
            tree.total_weight(),
            oracle.first_component_weight,
        )));
    }
    if oracle.component_count == 1 && tree.total_weight() != forest.total_weight() {
        return Err(TestCaseError::fail(format!(
            "connected graph but prim={} and kruskal={} ({context})",
            tree.total_weight(),
            forest.total_weight(),
        )));
    }
    Ok(())
}
