//! Property-based tests for Kruskal and shortest paths.
//!
//! Generated graphs are small enough for exhaustive oracles: spanning
//! forests are checked against brute-force subset enumeration and paths
//! against Bellman-Ford distances.

mod equivalence;
mod oracle;
mod paths;
mod strategies;
mod structural;
mod types;
