//! Benchmark setup error type.
//!
//! Aggregates the failures that can arise while preparing benchmark inputs
//! so that setup functions can propagate them with `?`.

use arbor_core::{ArborError, GraphError};

use crate::source::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// A generated graph did not resolve.
    #[error("graph construction failed: {0}")]
    Graph(#[from] GraphError),
    /// The batch runner could not be built or failed.
    #[error("batch run failed: {0}")]
    Arbor(#[from] ArborError),
}
