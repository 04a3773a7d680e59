//! Benchmark parameter types and fixtures.

use std::fmt;

use graphmark_core::{GeneratorConfig, Graph, generate_graph};

use crate::error::BenchSetupError;

/// Seed used for every benchmark graph.
pub const BENCH_SEED: u64 = 42;

/// Graph shapes swept by the benchmarks, smallest first.
pub const GRAPH_SHAPES: &[GraphBenchParams] = &[
    GraphBenchParams {
        node_count: 100,
        component_count: 4,
        max_component_outdegree: 10,
    },
    GraphBenchParams {
        node_count: 1_000,
        component_count: 8,
        max_component_outdegree: 10,
    },
    GraphBenchParams {
        node_count: 10_000,
        component_count: 16,
        max_component_outdegree: 10,
    },
];

/// Shape of a generated benchmark graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GraphBenchParams {
    /// Number of nodes.
    pub node_count: usize,
    /// Number of components.
    pub component_count: usize,
    /// Cross-component outdegree cap.
    pub max_component_outdegree: usize,
}

impl GraphBenchParams {
    /// Generator configuration for this shape, seeded with [`BENCH_SEED`].
    #[must_use]
    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            seed: BENCH_SEED,
            node_count: self.node_count,
            component_count: self.component_count,
            max_component_outdegree: self.max_component_outdegree,
            ..GeneratorConfig::default()
        }
    }

    /// Generates the sealed graph for this shape.
    ///
    /// # Errors
    /// Returns [`BenchSetupError::Core`] when the shape is invalid.
    pub fn graph(&self) -> Result<Graph, BenchSetupError> {
        Ok(generate_graph(&self.generator_config())?)
    }
}

impl fmt::Display for GraphBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n={},k={},d={}",
            self.node_count, self.component_count, self.max_component_outdegree
        )
    }
}
