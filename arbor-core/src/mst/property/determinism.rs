//! Repeated runs over one graph report identical results.
//!
//! Operation counts depend only on the graph, never on timing or on which
//! engine ran first, so every repetition must match the first run exactly.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::mst::Algorithm;

use super::helpers::build_graph;
use super::types::MstFixture;

const REPETITIONS: usize = 3;

pub(super) fn check_repeatability(fixture: &MstFixture) -> TestCaseResult {
    let graph = build_graph(fixture);
    for algorithm in Algorithm::ALL {
        let baseline = algorithm.run(&graph);
        for repetition in 1..=REPETITIONS {
            let rerun = algorithm.run(&graph);
            if rerun.edges() != baseline.edges() || rerun.operations() != baseline.operations() {
                return Err(TestCaseError::fail(format!(
                    "{algorithm} repetition {repetition} diverged: {} edges / {} ops vs \
                     {} edges / {} ops ({})",
                    rerun.edges().len(),
                    rerun.operations(),
                    baseline.edges().len(),
                    baseline.operations(),
                    fixture.context(),
                )));
            }
        }
    }
    Ok(())
}
