//! Shared test utilities used across graphkit crates.

pub mod ci;
pub mod tracing;
