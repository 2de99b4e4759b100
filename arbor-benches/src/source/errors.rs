//! Error types for synthetic graph generation.

/// Errors that may occur while generating benchmark graphs.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested node count was zero.
    #[error("node count must be greater than zero")]
    ZeroNodes,
    /// The requested batch size was zero.
    #[error("graph count must be greater than zero")]
    ZeroGraphs,
    /// The requested maximum weight was negative.
    #[error("maximum weight must not be negative (got {max_weight})")]
    NegativeMaxWeight {
        /// Maximum weight requested.
        max_weight: i64,
    },
    /// The requested edge count overflowed `usize`.
    #[error("node_count * extra_edges_per_node overflows usize")]
    Overflow,
}
