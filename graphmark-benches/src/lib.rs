//! Benchmark support crate for graphmark.
//!
//! Provides the parameter grid and fixture helpers shared by the Criterion
//! benchmarks for graph generation and the three kernels.

pub mod error;
pub mod params;
