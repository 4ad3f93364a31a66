//! Error types for the ring graph core library.
//!
//! Defines the error enum exposed by the graph queries, the stable codes
//! attached to each variant, and a convenient result alias.

use thiserror::Error;

/// Generates a `Copy` code enum mirroring the variants of an error enum.
///
/// Each code carries a stable machine-readable string so logs and exit paths
/// can report failures without depending on `Display` text.
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

        impl ::std::fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
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

pub(crate) use define_error_codes;

/// Error type produced when constructing or querying a [`crate::RingGraph`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A ring needs at least one vertex.
    #[error("a ring graph needs at least one vertex (got {order})")]
    InvalidTopology {
        /// The vertex count supplied by the caller.
        order: usize,
    },
    /// A vertex id fell outside `[0, order)`.
    #[error("vertex {vertex} is out of range for a ring of {order} vertices")]
    OutOfRange {
        /// The offending vertex id.
        vertex: usize,
        /// Number of vertices in the ring.
        order: usize,
    },
    /// The endpoints of an edge are not neighbours on the ring.
    #[error("<{left}, {right}> is not an edge of a ring of {order} vertices")]
    InvalidEdge {
        /// First endpoint of the rejected pair.
        left: usize,
        /// Second endpoint of the rejected pair.
        right: usize,
        /// Number of vertices in the ring.
        order: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A ring needs at least one vertex.
        InvalidTopology => InvalidTopology { .. } => "RING_GRAPH_INVALID_TOPOLOGY",
        /// A vertex id fell outside `[0, order)`.
        OutOfRange => OutOfRange { .. } => "RING_GRAPH_VERTEX_OUT_OF_RANGE",
        /// The endpoints of an edge are not neighbours on the ring.
        InvalidEdge => InvalidEdge { .. } => "RING_GRAPH_INVALID_EDGE",
    }
}

impl GraphError {
    /// Returns the offending vertex when the error concerns a single vertex.
    #[must_use]
    pub const fn vertex(&self) -> Option<usize> {
        match self {
            Self::OutOfRange { vertex, .. } => Some(*vertex),
            _ => None,
        }
    }
}

/// Convenient alias for results returned by the graph queries.
pub type Result<T> = core::result::Result<T, GraphError>;
