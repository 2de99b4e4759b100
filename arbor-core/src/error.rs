//! Error types for the arbor core library.
//!
//! Graph construction failures are reported per graph through [`GraphError`];
//! batch-level failures wrap them in [`ArborError`] together with the id of
//! the graph that failed.

use std::{fmt, sync::Arc};

use thiserror::Error;

use crate::builder::ExecutionStrategy;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error raised while building a [`crate::Graph`] from named nodes and
/// edges.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An edge named a node that is absent from the node list.
    #[error("edge references unknown node `{node}`")]
    UnknownNodeReference {
        /// The unresolved node name.
        node: Arc<str>,
    },
    /// The node list contained the same name twice.
    #[error("node `{node}` is declared more than once")]
    DuplicateNode {
        /// The repeated node name.
        node: Arc<str>,
    },
    /// An edge carried a weight below zero.
    #[error("edge `{from}`-`{to}` has negative weight {weight}")]
    NegativeWeight {
        /// Name of the edge's first endpoint.
        from: Arc<str>,
        /// Name of the edge's second endpoint.
        to: Arc<str>,
        /// The rejected weight.
        weight: i64,
    },
    /// The sum of all edge weights does not fit in a [`crate::Weight`].
    #[error("total weight overflows at edge `{from}`-`{to}`")]
    WeightOverflow {
        /// Name of the first endpoint of the edge that overflowed the sum.
        from: Arc<str>,
        /// Name of the second endpoint of that edge.
        to: Arc<str>,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An edge named a node that is absent from the node list.
        UnknownNodeReference => UnknownNodeReference { .. } => "GRAPH_UNKNOWN_NODE_REFERENCE",
        /// The node list contained the same name twice.
        DuplicateNode => DuplicateNode { .. } => "GRAPH_DUPLICATE_NODE",
        /// An edge carried a weight below zero.
        NegativeWeight => NegativeWeight { .. } => "GRAPH_NEGATIVE_WEIGHT",
        /// The sum of all edge weights does not fit in a weight.
        WeightOverflow => WeightOverflow { .. } => "GRAPH_WEIGHT_OVERFLOW",
    }
}

/// Error type produced when constructing or running [`crate::Arbor`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum ArborError {
    /// A graph in the batch could not be built.
    #[error("graph {graph_id} is invalid: {error}")]
    Graph {
        /// Identifier of the failing graph.
        graph_id: i64,
        #[source]
        /// Underlying construction failure.
        error: GraphError,
    },
    /// The requested execution strategy is unavailable in the current build.
    #[error("the requested execution strategy {requested:?} is not available in this build")]
    BackendUnavailable {
        /// Strategy that could not be satisfied by the current build.
        requested: ExecutionStrategy,
    },
}

define_error_codes! {
    /// Stable codes describing [`ArborError`] variants.
    enum ArborErrorCode for ArborError {
        /// A graph in the batch could not be built.
        InvalidGraph => Graph { .. } => "ARBOR_INVALID_GRAPH",
        /// The requested execution strategy is unavailable in the current build.
        BackendUnavailable => BackendUnavailable { .. } => "ARBOR_BACKEND_UNAVAILABLE",
    }
}

impl ArborError {
    /// Retrieve the inner [`GraphErrorCode`] when a graph failed to build.
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph { error, .. } => Some(error.code()),
            Self::BackendUnavailable { .. } => None,
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, ArborError>;
