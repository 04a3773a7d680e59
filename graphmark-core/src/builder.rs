//! Builder utilities for configuring benchmark runs.
//!
//! Collects generator and kernel parameters and validates them before a
//! [`Graphmark`] is constructed.

use crate::{Result, config::BenchmarkConfig, graphmark::Graphmark};

/// Configures and constructs [`Graphmark`] instances.
///
/// # Examples
/// ```
/// use graphmark_core::GraphmarkBuilder;
///
/// let graphmark = GraphmarkBuilder::new()
///     .with_node_count(10)
///     .with_component_count(2)
///     .with_max_component_outdegree(3)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(graphmark.config().generator.node_count, 10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphmarkBuilder {
    config: BenchmarkConfig,
}

impl GraphmarkBuilder {
    /// Creates a builder populated with the reference benchmark parameters.
    ///
    /// # Examples
    /// ```
    /// use graphmark_core::GraphmarkBuilder;
    ///
    /// let builder = GraphmarkBuilder::new();
    /// assert_eq!(builder.config().generator.node_count, 100);
    /// assert_eq!(builder.config().generator.component_count, 4);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces every parameter at once.
    #[must_use]
    pub fn with_config(mut self, config: BenchmarkConfig) -> Self {
        self.config = config;
        self
    }

    /// Overrides the generator seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.generator.seed = seed;
        self
    }

    /// Overrides the number of generated nodes.
    #[must_use]
    pub fn with_node_count(mut self, node_count: usize) -> Self {
        self.config.generator.node_count = node_count;
        self
    }

    /// Overrides the number of generated components.
    #[must_use]
    pub fn with_component_count(mut self, component_count: usize) -> Self {
        self.config.generator.component_count = component_count;
        self
    }

    /// Overrides the per-node cap on cross-component edges.
    #[must_use]
    pub fn with_max_component_outdegree(mut self, max_outdegree: usize) -> Self {
        self.config.generator.max_component_outdegree = max_outdegree;
        self
    }

    /// Overrides the inclusive upper bound on edge weights.
    #[must_use]
    pub fn with_max_weight(mut self, max_weight: i32) -> Self {
        self.config.generator.max_weight = max_weight;
        self
    }

    /// Overrides the number of extra intra-component edges per node.
    #[must_use]
    pub fn with_extra_intra_edges_per_node(mut self, extra: usize) -> Self {
        self.config.generator.extra_intra_edges_per_node = extra;
        self
    }

    /// Overrides the node the Bellman-Ford and BFS kernels start from.
    #[must_use]
    pub fn with_source(mut self, source: usize) -> Self {
        self.config.source = source;
        self
    }

    /// Overrides the BFS round cap.
    #[must_use]
    pub fn with_bfs_max_iterations(mut self, max_iterations: usize) -> Self {
        self.config.bfs.max_iterations = max_iterations;
        self
    }

    /// Overrides the PageRank iteration cap.
    #[must_use]
    pub fn with_pagerank_max_iterations(mut self, max_iterations: usize) -> Self {
        self.config.pagerank.max_iterations = max_iterations;
        self
    }

    /// Overrides the PageRank convergence threshold.
    #[must_use]
    pub fn with_pagerank_max_error(mut self, max_error: f64) -> Self {
        self.config.pagerank.max_error = max_error;
        self
    }

    /// Overrides the PageRank damping factor.
    #[must_use]
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.config.pagerank.damping = damping;
        self
    }

    /// Returns the parameters collected so far.
    #[must_use]
    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Validates the configuration and constructs a [`Graphmark`] instance.
    ///
    /// # Errors
    /// Returns [`crate::GraphmarkError::InvalidConfig`] naming the first
    /// parameter that fails validation.
    ///
    /// # Examples
    /// ```
    /// use graphmark_core::{GraphmarkBuilder, GraphmarkErrorCode};
    ///
    /// let err = GraphmarkBuilder::new()
    ///     .with_node_count(3)
    ///     .with_component_count(4)
    ///     .build()
    ///     .expect_err("more components than nodes");
    /// assert_eq!(err.code(), GraphmarkErrorCode::InvalidConfig);
    /// ```
    pub fn build(self) -> Result<Graphmark> {
        self.config.validate()?;
        Ok(Graphmark::new(self.config))
    }
}
