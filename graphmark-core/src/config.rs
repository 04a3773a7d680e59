//! Benchmark parameters.
//!
//! Each stage of the benchmark receives its parameters as an explicit value
//! so several configurations can run side by side in one process. The
//! defaults reproduce the reference benchmark shape.

use crate::error::{GraphmarkError, Result};

/// Seed used when none is supplied.
pub const DEFAULT_SEED: u64 = 0;
/// Number of generated nodes.
pub const DEFAULT_NODE_COUNT: usize = 100;
/// Number of generated components.
pub const DEFAULT_COMPONENT_COUNT: usize = 4;
/// Upper bound on cross-component edges drawn per node.
pub const DEFAULT_MAX_COMPONENT_OUTDEGREE: usize = 10;
/// Inclusive upper bound on generated edge weights.
pub const DEFAULT_MAX_WEIGHT: i32 = 10;
/// Extra random intra-component edges drawn per component node.
pub const DEFAULT_EXTRA_INTRA_EDGES_PER_NODE: usize = 1;
/// Hard cap on BFS expansion rounds.
pub const DEFAULT_BFS_MAX_ITERATIONS: usize = 10;
/// Hard cap on PageRank power iterations.
pub const DEFAULT_PAGERANK_MAX_ITERATIONS: usize = 100;
/// L1 error below which PageRank is considered converged.
pub const DEFAULT_PAGERANK_MAX_ERROR: f64 = 0.001;
/// PageRank damping factor. The benchmark header never fixes one; 0.85 is
/// the conventional choice.
pub const DEFAULT_PAGERANK_DAMPING: f64 = 0.85;

/// Parameters for the synthetic graph generator.
///
/// # Examples
/// ```
/// use graphmark_core::GeneratorConfig;
///
/// let config = GeneratorConfig {
///     node_count: 10,
///     component_count: 2,
///     ..GeneratorConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Seed for every random draw taken during generation.
    pub seed: u64,
    /// Number of nodes `N`.
    pub node_count: usize,
    /// Number of components `K`, with `1 <= K <= N`.
    pub component_count: usize,
    /// Maximum cross-component outdegree drawn per node.
    pub max_component_outdegree: usize,
    /// Inclusive upper bound on edge weights; weights are drawn from
    /// `1..=max_weight`.
    pub max_weight: i32,
    /// Random intra-component edges added per component node on top of the
    /// spanning structure.
    pub extra_intra_edges_per_node: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            node_count: DEFAULT_NODE_COUNT,
            component_count: DEFAULT_COMPONENT_COUNT,
            max_component_outdegree: DEFAULT_MAX_COMPONENT_OUTDEGREE,
            max_weight: DEFAULT_MAX_WEIGHT,
            extra_intra_edges_per_node: DEFAULT_EXTRA_INTRA_EDGES_PER_NODE,
        }
    }
}

impl GeneratorConfig {
    /// Checks the structural constraints on the generator parameters.
    ///
    /// # Errors
    /// Returns [`GraphmarkError::InvalidConfig`] when there are no nodes, no
    /// components, more components than nodes, or `max_weight < 1`.
    pub fn validate(&self) -> Result<()> {
        if self.node_count == 0 {
            return Err(GraphmarkError::invalid_config(
                "node_count",
                "the graph must contain at least one node",
            ));
        }
        if self.component_count == 0 {
            return Err(GraphmarkError::invalid_config(
                "component_count",
                "the graph must contain at least one component",
            ));
        }
        if self.component_count > self.node_count {
            return Err(GraphmarkError::invalid_config(
                "component_count",
                format!(
                    "{} components cannot be formed from {} nodes",
                    self.component_count, self.node_count
                ),
            ));
        }
        if self.max_weight < 1 {
            return Err(GraphmarkError::invalid_config(
                "max_weight",
                format!("must be at least 1 (got {})", self.max_weight),
            ));
        }
        Ok(())
    }
}

/// Parameters for the bounded breadth-first search kernel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BfsConfig {
    /// Hard cap on expansion rounds.
    pub max_iterations: usize,
}

impl Default for BfsConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_BFS_MAX_ITERATIONS,
        }
    }
}

impl BfsConfig {
    /// Checks that at least one expansion round is allowed.
    ///
    /// # Errors
    /// Returns [`GraphmarkError::InvalidConfig`] when `max_iterations` is zero.
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(GraphmarkError::invalid_config(
                "bfs.max_iterations",
                "must allow at least one round",
            ));
        }
        Ok(())
    }
}

/// Parameters for the PageRank power iteration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageRankConfig {
    /// Probability of following an outgoing edge rather than teleporting.
    pub damping: f64,
    /// Hard cap on power iterations.
    pub max_iterations: usize,
    /// L1 error threshold below which the iteration stops.
    pub max_error: f64,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping: DEFAULT_PAGERANK_DAMPING,
            max_iterations: DEFAULT_PAGERANK_MAX_ITERATIONS,
            max_error: DEFAULT_PAGERANK_MAX_ERROR,
        }
    }
}

impl PageRankConfig {
    /// Checks the damping factor, iteration cap and error threshold.
    ///
    /// # Errors
    /// Returns [`GraphmarkError::InvalidConfig`] when `damping` is outside
    /// `[0, 1)`, `max_iterations` is zero, or `max_error` is not a positive
    /// finite number.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.damping) {
            return Err(GraphmarkError::invalid_config(
                "pagerank.damping",
                format!("must lie in [0, 1) (got {})", self.damping),
            ));
        }
        if self.max_iterations == 0 {
            return Err(GraphmarkError::invalid_config(
                "pagerank.max_iterations",
                "must allow at least one iteration",
            ));
        }
        if !self.max_error.is_finite() || self.max_error <= 0.0 {
            return Err(GraphmarkError::invalid_config(
                "pagerank.max_error",
                format!("must be a positive finite number (got {})", self.max_error),
            ));
        }
        Ok(())
    }
}

/// Complete parameter set for one benchmark run.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BenchmarkConfig {
    /// Graph generation parameters.
    pub generator: GeneratorConfig,
    /// Node the Bellman-Ford and BFS kernels start from.
    pub source: usize,
    /// BFS parameters.
    pub bfs: BfsConfig,
    /// PageRank parameters.
    pub pagerank: PageRankConfig,
}

impl BenchmarkConfig {
    /// Validates every section and checks that `source` names a node.
    ///
    /// # Errors
    /// Returns the first [`GraphmarkError::InvalidConfig`] encountered.
    pub fn validate(&self) -> Result<()> {
        self.generator.validate()?;
        self.bfs.validate()?;
        self.pagerank.validate()?;
        if self.source >= self.generator.node_count {
            return Err(GraphmarkError::invalid_config(
                "source",
                format!(
                    "node {} does not exist in a graph of {} nodes",
                    self.source, self.generator.node_count
                ),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    use crate::error::GraphmarkErrorCode;

    fn rejected_parameter(result: Result<()>) -> &'static str {
        match result {
            Err(GraphmarkError::InvalidConfig { parameter, .. }) => parameter,
            other => panic!("expected InvalidConfig, got {other:?}"),
        }
    }

    #[test]
    fn defaults_match_reference_shape() {
        let config = BenchmarkConfig::default();
        assert_eq!(config.generator.seed, 0);
        assert_eq!(config.generator.node_count, 100);
        assert_eq!(config.generator.component_count, 4);
        assert_eq!(config.generator.max_component_outdegree, 10);
        assert_eq!(config.generator.max_weight, 10);
        assert_eq!(config.bfs.max_iterations, 10);
        assert_eq!(config.pagerank.max_iterations, 100);
        assert!((config.pagerank.max_error - 0.001).abs() < f64::EPSILON);
        assert!((config.pagerank.damping - 0.85).abs() < f64::EPSILON);
        assert_eq!(config.source, 0);
        config.validate().expect("defaults must validate");
    }

    #[rstest]
    #[case::zero_nodes(0, 1, 10, "node_count")]
    #[case::zero_components(5, 0, 10, "component_count")]
    #[case::excess_components(3, 4, 10, "component_count")]
    #[case::zero_weight(5, 2, 0, "max_weight")]
    fn generator_rejects_malformed_shapes(
        #[case] node_count: usize,
        #[case] component_count: usize,
        #[case] max_weight: i32,
        #[case] expected: &str,
    ) {
        let config = GeneratorConfig {
            node_count,
            component_count,
            max_weight,
            ..GeneratorConfig::default()
        };
        assert_eq!(rejected_parameter(config.validate()), expected);
    }

    #[test]
    fn generator_accepts_one_node_per_component() {
        let config = GeneratorConfig {
            node_count: 4,
            component_count: 4,
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn bfs_rejects_zero_rounds() {
        let config = BfsConfig { max_iterations: 0 };
        assert_eq!(rejected_parameter(config.validate()), "bfs.max_iterations");
    }

    #[rstest]
    #[case::negative_damping(-0.1, 10, 0.001, "pagerank.damping")]
    #[case::unit_damping(1.0, 10, 0.001, "pagerank.damping")]
    #[case::zero_iterations(0.85, 0, 0.001, "pagerank.max_iterations")]
    #[case::zero_error(0.85, 10, 0.0, "pagerank.max_error")]
    #[case::nan_error(0.85, 10, f64::NAN, "pagerank.max_error")]
    fn pagerank_rejects_invalid_parameters(
        #[case] damping: f64,
        #[case] max_iterations: usize,
        #[case] max_error: f64,
        #[case] expected: &str,
    ) {
        let config = PageRankConfig {
            damping,
            max_iterations,
            max_error,
        };
        assert_eq!(rejected_parameter(config.validate()), expected);
    }

    #[test]
    fn benchmark_rejects_missing_source() {
        let config = BenchmarkConfig {
            source: 100,
            ..BenchmarkConfig::default()
        };
        let err = config.validate().expect_err("source 100 is out of range");
        assert_eq!(err.code(), GraphmarkErrorCode::InvalidConfig);
    }
}
