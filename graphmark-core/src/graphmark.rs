//! Benchmark orchestration for the graphmark library.
//!
//! Provides the [`Graphmark`] entry point, which generates the synthetic
//! graph and then runs the three kernels in parallel over the sealed result.

use tracing::{info, instrument};

use crate::{
    Graph, Result,
    config::BenchmarkConfig,
    generator::generate_graph,
    kernels::{
        BfsTraversal, PageRank, ShortestPaths, bellman_ford, breadth_first_search, pagerank,
    },
};

/// Results of the three kernels over one graph.
///
/// Each kernel reports independently: a failure in one slot leaves the others
/// intact.
#[derive(Debug, Clone)]
pub struct KernelReport {
    shortest_paths: Result<ShortestPaths>,
    bfs: Result<BfsTraversal>,
    pagerank: PageRank,
}

impl KernelReport {
    /// Bellman-Ford distances or the error that stopped it.
    #[must_use]
    #[rustfmt::skip]
    pub fn shortest_paths(&self) -> &Result<ShortestPaths> { &self.shortest_paths }

    /// BFS levels or the error that stopped it.
    #[must_use]
    #[rustfmt::skip]
    pub fn bfs(&self) -> &Result<BfsTraversal> { &self.bfs }

    /// PageRank iterate and convergence status.
    #[must_use]
    #[rustfmt::skip]
    pub fn pagerank(&self) -> &PageRank { &self.pagerank }
}

/// A generated graph together with the kernel results computed over it.
#[derive(Debug, Clone)]
pub struct BenchmarkRun {
    graph: Graph,
    report: KernelReport,
}

impl BenchmarkRun {
    /// The sealed graph the kernels ran over.
    #[must_use]
    #[rustfmt::skip]
    pub fn graph(&self) -> &Graph { &self.graph }

    /// Per-kernel results for [`Self::graph`].
    #[must_use]
    #[rustfmt::skip]
    pub fn report(&self) -> &KernelReport { &self.report }

    /// Splits the run into its graph and report.
    #[must_use]
    pub fn into_parts(self) -> (Graph, KernelReport) {
        (self.graph, self.report)
    }
}

/// Entry point for running the benchmark.
///
/// # Examples
/// ```
/// use graphmark_core::{GraphmarkBuilder, PageRankStatus};
///
/// let graphmark = GraphmarkBuilder::new()
///     .with_node_count(10)
///     .with_component_count(2)
///     .with_max_component_outdegree(3)
///     .build()?;
/// let run = graphmark.execute()?;
/// assert_eq!(run.graph().node_count(), 10);
/// assert!(run.report().shortest_paths().is_ok());
/// assert!((run.report().pagerank().rank_sum() - 1.0).abs() < 1e-9);
/// # Ok::<(), graphmark_core::GraphmarkError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Graphmark {
    config: BenchmarkConfig,
}

impl Graphmark {
    pub(crate) fn new(config: BenchmarkConfig) -> Self {
        Self { config }
    }

    /// Returns the validated parameters of this instance.
    #[must_use]
    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Generates the synthetic graph described by the configuration.
    ///
    /// # Errors
    /// Propagates generator failures.
    pub fn generate(&self) -> Result<Graph> {
        generate_graph(&self.config.generator)
    }

    /// Runs Bellman-Ford, BFS and PageRank concurrently over `graph`.
    ///
    /// The graph may come from any source; kernels that need a start node
    /// report [`crate::GraphmarkError::InvalidSource`] in their own slot when
    /// the configured source is not a node of `graph`.
    #[must_use]
    pub fn run_kernels(&self, graph: &Graph) -> KernelReport {
        let source = self.config.source;
        let (shortest_paths, (bfs, pagerank)) = rayon::join(
            || bellman_ford(graph, source),
            || {
                rayon::join(
                    || breadth_first_search(graph, source, &self.config.bfs),
                    || pagerank(graph, &self.config.pagerank),
                )
            },
        );
        KernelReport {
            shortest_paths,
            bfs,
            pagerank,
        }
    }

    /// Generates the graph and runs every kernel over it.
    ///
    /// # Errors
    /// Returns an error only when generation fails; kernel failures are
    /// recorded in the [`KernelReport`].
    #[instrument(
        name = "core.execute",
        err,
        skip(self),
        fields(
            seed = self.config.generator.seed,
            nodes = self.config.generator.node_count,
            components = self.config.generator.component_count,
            source = self.config.source,
        ),
    )]
    pub fn execute(&self) -> Result<BenchmarkRun> {
        let graph = self.generate()?;
        let report = self.run_kernels(&graph);
        info!(
            edges = graph.edge_count(),
            shortest_paths_ok = report.shortest_paths.is_ok(),
            bfs_ok = report.bfs.is_ok(),
            pagerank_status = ?report.pagerank.status(),
            "benchmark run completed"
        );
        Ok(BenchmarkRun { graph, report })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{ComponentId, GraphmarkBuilder, GraphmarkError, PageRankStatus};

    #[test]
    fn kernel_failures_stay_in_their_slot() {
        let graphmark = GraphmarkBuilder::new()
            .with_node_count(10)
            .with_component_count(2)
            .with_source(5)
            .build()
            .expect("configuration is valid");

        let mut graph = Graph::new();
        for _ in 0..3 {
            graph
                .add_node(ComponentId::new(0))
                .expect("unsealed graph accepts nodes");
        }
        graph.add_edge(0, 1, 1).expect("edge is valid");
        graph.seal();

        let report = graphmark.run_kernels(&graph);
        let missing = GraphmarkError::InvalidSource {
            node: 5,
            node_count: 3,
        };
        assert_eq!(report.shortest_paths().as_ref().err(), Some(&missing));
        assert_eq!(report.bfs().as_ref().err(), Some(&missing));
        assert_eq!(report.pagerank().ranks().len(), 3);
    }

    #[test]
    fn negative_cycle_does_not_disturb_siblings() {
        let graphmark = GraphmarkBuilder::new()
            .with_node_count(3)
            .with_component_count(1)
            .build()
            .expect("configuration is valid");

        let mut graph = Graph::new();
        for _ in 0..3 {
            graph
                .add_node(ComponentId::new(0))
                .expect("unsealed graph accepts nodes");
        }
        graph.add_edge(0, 1, 1).expect("edge is valid");
        graph.add_edge(1, 2, -4).expect("edge is valid");
        graph.add_edge(2, 0, 1).expect("edge is valid");
        graph.seal();

        let report = graphmark.run_kernels(&graph);
        assert!(matches!(
            report.shortest_paths(),
            Err(GraphmarkError::NegativeCycleDetected { .. })
        ));
        let bfs = report.bfs().as_ref().expect("bfs ignores weights");
        assert_eq!(bfs.visited_count(), 3);
        assert_eq!(report.pagerank().status(), PageRankStatus::Converged);
    }

    #[test]
    fn execute_is_reproducible() {
        let graphmark = GraphmarkBuilder::new()
            .with_seed(21)
            .build()
            .expect("defaults are valid");
        let first = graphmark.execute().expect("generation succeeds");
        let second = graphmark.execute().expect("generation succeeds");
        assert_eq!(first.graph().edge_count(), second.graph().edge_count());
        assert_eq!(
            first.report().shortest_paths(),
            second.report().shortest_paths()
        );
        assert_eq!(first.report().bfs(), second.report().bfs());
        assert_eq!(first.report().pagerank(), second.report().pagerank());
    }
}
