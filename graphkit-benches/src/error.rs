//! Benchmark setup error type.
//!
//! Setup functions propagate failures with `?` and the bench entry points
//! turn them into a single panic message.

use graphkit_core::GraphError;

use crate::source::SyntheticError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic graph generation failed.
    #[error("synthetic graph generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// A graph query used as setup failed.
    #[error("graph operation failed: {0}")]
    Graph(#[from] GraphError),
}
