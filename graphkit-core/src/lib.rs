//! Graphkit core library.
//!
//! In-memory graph algorithms over caller-supplied vertex and edge types:
//!
//! - [`DisjointSet`]: union-find with path compression and union by rank.
//! - [`MinHeap`] and [`top_k`]: a binary min-heap and heap-backed selection.
//! - [`WeightedGraph`]: Kruskal minimum spanning trees and label-correcting
//!   shortest paths.
//! - [`maze`]: grid mazes carved from a randomly weighted spanning tree.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod disjoint_set;
mod error;
mod graph;
mod heap;
pub mod maze;
mod select;

#[cfg(test)]
mod test_utils;

pub use crate::{
    disjoint_set::DisjointSet,
    error::{
        DisjointSetError, DisjointSetErrorCode, GraphError, GraphErrorCode, HeapError,
        HeapErrorCode, InvalidEdgeReason, MazeError, MazeErrorCode, SelectionError,
        SelectionErrorCode,
    },
    graph::{Edge, MinimumSpanningForest, WeightedEdge, WeightedGraph, path_weight},
    heap::MinHeap,
    select::top_k,
};
