//! Benchmark support crate for graphkit.
//!
//! Provides seeded synthetic graphs and parameter labels for the Criterion
//! benchmarks covering Kruskal, shortest paths and top-k selection.

pub mod error;
pub mod params;
pub mod source;
