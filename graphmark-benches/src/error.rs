//! Benchmark setup error type.
//!
//! Lets setup code propagate core failures with `?` instead of `.expect()`.

use graphmark_core::GraphmarkError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Configuration, generation or a kernel failed.
    #[error("graphmark operation failed: {0}")]
    Core(#[from] GraphmarkError),
}
