//! Error types for the graphmark core library.
//!
//! Defines the graph-store and benchmark error enums exposed by the public API
//! together with stable machine-readable codes and a convenient result alias.

use std::fmt;

use thiserror::Error;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? $( ( $($tuple:tt)* ) )? => $code:expr
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
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Why an edge was refused by the graph store.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum InvalidEdgeKind {
    /// Source and target were the same node.
    SelfLoop,
    /// One of the endpoints was not a node of the graph.
    EndpointOutOfRange,
}

impl fmt::Display for InvalidEdgeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelfLoop => f.write_str("self-loop"),
            Self::EndpointOutOfRange => f.write_str("endpoint out of range"),
        }
    }
}

/// An error produced while mutating a [`crate::Graph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// The edge would be a self-loop or references a missing node.
    #[error("invalid edge {from} -> {to} ({kind}; node_count is {node_count})")]
    InvalidEdge {
        /// Requested source node.
        from: usize,
        /// Requested target node.
        to: usize,
        /// Number of nodes in the graph when the edge was refused.
        node_count: usize,
        /// Reason the edge was refused.
        kind: InvalidEdgeKind,
    },
    /// The graph was sealed and no longer accepts mutation.
    #[error("graph is sealed and cannot be mutated")]
    Sealed,
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// The edge would be a self-loop or references a missing node.
        InvalidEdge => InvalidEdge { .. } => "GRAPH_INVALID_EDGE",
        /// The graph was sealed and no longer accepts mutation.
        Sealed => Sealed => "GRAPH_SEALED",
    }
}

/// Error type produced when configuring or running a benchmark.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphmarkError {
    /// A generation or kernel parameter was rejected.
    #[error("invalid configuration for `{parameter}`: {reason}")]
    InvalidConfig {
        /// Name of the offending parameter.
        parameter: &'static str,
        /// Human-readable explanation of the constraint that failed.
        reason: String,
    },
    /// The graph store refused a mutation.
    #[error("graph store failed: {0}")]
    Graph(#[from] GraphError),
    /// A kernel was asked to start from a node outside the graph.
    #[error("source node {node} is out of range (node_count is {node_count})")]
    InvalidSource {
        /// Requested source node.
        node: usize,
        /// Number of nodes in the graph.
        node_count: usize,
    },
    /// Bellman-Ford still relaxed an edge after `node_count - 1` passes.
    #[error("negative-weight cycle detected through edge {from} -> {to}")]
    NegativeCycleDetected {
        /// Source of the edge that could still be relaxed.
        from: usize,
        /// Target of the edge that could still be relaxed.
        to: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphmarkError`] variants.
    enum GraphmarkErrorCode for GraphmarkError {
        /// A generation or kernel parameter was rejected.
        InvalidConfig => InvalidConfig { .. } => "GRAPHMARK_INVALID_CONFIG",
        /// The graph store refused a mutation.
        GraphFailure => Graph(..) => "GRAPHMARK_GRAPH_FAILURE",
        /// A kernel was asked to start from a node outside the graph.
        InvalidSource => InvalidSource { .. } => "GRAPHMARK_INVALID_SOURCE",
        /// Bellman-Ford detected a negative-weight cycle.
        NegativeCycleDetected => NegativeCycleDetected { .. } => "GRAPHMARK_NEGATIVE_CYCLE",
    }
}

impl GraphmarkError {
    /// Retrieve the inner [`GraphErrorCode`] when the error originated in the graph store.
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph(error) => Some(error.code()),
            _ => None,
        }
    }

    pub(crate) fn invalid_config(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            parameter,
            reason: reason.into(),
        }
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, GraphmarkError>;
