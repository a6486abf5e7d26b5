//! Error types for the graphkit core library.
//!
//! Each component owns one error enum. Every enum exposes a stable,
//! machine-readable code through `code()` so callers can log or match on
//! failures without depending on message text.

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
                    $(Self::$ErrVariant $( { $($pattern)* } )? $( ( $($tuple)* ) )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced by [`crate::DisjointSet`] operations.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum DisjointSetError {
    /// The item was already registered with `make_set`.
    #[error("item is already registered in the disjoint set")]
    DuplicateElement,
    /// The item was never registered with `make_set`.
    #[error("item is not registered in the disjoint set")]
    UnknownElement,
    /// Both items already share a representative.
    #[error("items already belong to the component rooted at slot {representative}")]
    SameComponent {
        /// Representative slot shared by both items.
        representative: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`DisjointSetError`] variants.
    enum DisjointSetErrorCode for DisjointSetError {
        /// The item was already registered.
        DuplicateElement => DuplicateElement => "DISJOINT_SET_DUPLICATE_ELEMENT",
        /// The item was never registered.
        UnknownElement => UnknownElement => "DISJOINT_SET_UNKNOWN_ELEMENT",
        /// Both items already share a representative.
        SameComponent => SameComponent { .. } => "DISJOINT_SET_SAME_COMPONENT",
    }
}

/// An error produced by [`crate::MinHeap`] operations.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum HeapError {
    /// `peek_min` or `remove_min` was called on an empty heap.
    #[error("heap is empty")]
    Empty,
}

define_error_codes! {
    /// Stable codes describing [`HeapError`] variants.
    enum HeapErrorCode for HeapError {
        /// The heap held no elements.
        Empty => Empty => "HEAP_EMPTY",
    }
}

/// An error produced by [`crate::top_k`].
#[non_exhaustive]
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum SelectionError {
    /// The requested element count was negative.
    #[error("selection count must be non-negative (got {k})")]
    NegativeCount {
        /// The count supplied by the caller.
        k: isize,
    },
}

define_error_codes! {
    /// Stable codes describing [`SelectionError`] variants.
    enum SelectionErrorCode for SelectionError {
        /// The requested element count was negative.
        NegativeCount => NegativeCount { .. } => "SELECTION_NEGATIVE_COUNT",
    }
}

/// Reason an edge was rejected while building a [`crate::WeightedGraph`].
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum InvalidEdgeReason {
    /// The weight was below zero.
    NegativeWeight,
    /// The weight was NaN or infinite.
    NonFiniteWeight,
    /// An endpoint was missing from the vertex collection.
    UnknownEndpoint,
}

impl fmt::Display for InvalidEdgeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::NegativeWeight => "weight is negative",
            Self::NonFiniteWeight => "weight is not finite",
            Self::UnknownEndpoint => "endpoint is not a graph vertex",
        })
    }
}

/// An error produced by [`crate::WeightedGraph`] construction or queries.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An input edge failed validation.
    #[error("edge {index} is invalid: {reason}")]
    InvalidEdge {
        /// Position of the edge in the caller's edge collection.
        index: usize,
        /// Why the edge was rejected.
        reason: InvalidEdgeReason,
    },
    /// A query named a vertex the graph does not contain.
    #[error("vertex is not part of the graph")]
    UnknownVertex,
    /// No route connects the requested vertices.
    #[error("no path exists between the requested vertices")]
    NoPathExists,
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// An input edge failed validation.
        InvalidEdge => InvalidEdge { .. } => "GRAPH_INVALID_EDGE",
        /// A query named a vertex the graph does not contain.
        UnknownVertex => UnknownVertex => "GRAPH_UNKNOWN_VERTEX",
        /// No route connects the requested vertices.
        NoPathExists => NoPathExists => "GRAPH_NO_PATH_EXISTS",
    }
}

/// An error produced while carving or solving a [`crate::maze::Maze`].
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum MazeError {
    /// The grid had zero width or zero height.
    #[error("maze grid must be non-empty (got {width}x{height})")]
    EmptyGrid {
        /// Requested number of columns.
        width: usize,
        /// Requested number of rows.
        height: usize,
    },
    /// A room outside the grid was requested.
    #[error("room ({row}, {col}) lies outside the maze")]
    RoomOutOfBounds {
        /// Row of the requested room.
        row: usize,
        /// Column of the requested room.
        col: usize,
    },
    /// The underlying graph rejected the request.
    #[error(transparent)]
    Graph(#[from] GraphError),
}

define_error_codes! {
    /// Stable codes describing [`MazeError`] variants.
    enum MazeErrorCode for MazeError {
        /// The grid had zero width or zero height.
        EmptyGrid => EmptyGrid { .. } => "MAZE_EMPTY_GRID",
        /// A room outside the grid was requested.
        RoomOutOfBounds => RoomOutOfBounds { .. } => "MAZE_ROOM_OUT_OF_BOUNDS",
        /// The underlying graph rejected the request.
        GraphFailure => Graph(..) => "MAZE_GRAPH_FAILURE",
    }
}

impl MazeError {
    /// Retrieve the inner [`GraphErrorCode`] when the error originated in the graph.
    #[must_use]
    pub const fn graph_code(&self) -> Option<GraphErrorCode> {
        match self {
            Self::Graph(error) => Some(error.code()),
            _ => None,
        }
    }
}
