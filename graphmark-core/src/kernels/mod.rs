//! Graph-analytics kernels run over a sealed [`crate::Graph`].
//!
//! Each kernel reads the graph by shared reference and owns its own result
//! storage, so the three can run concurrently over the same graph.

mod bellman_ford;
mod bfs;
mod pagerank;

pub use self::{
    bellman_ford::{ShortestPaths, bellman_ford},
    bfs::{BfsTraversal, breadth_first_search},
    pagerank::{PageRank, PageRankStatus, pagerank},
};

use crate::{Graph, Result, error::GraphmarkError};

pub(crate) fn ensure_source(graph: &Graph, source: usize) -> Result<()> {
    let node_count = graph.node_count();
    if source >= node_count {
        return Err(GraphmarkError::InvalidSource {
            node: source,
            node_count,
        });
    }
    Ok(())
}

#[cfg(feature = "metrics")]
pub(crate) fn record_iterations(kernel: &'static str, iterations: usize) {
    metrics::counter!("graphmark_kernel_iterations_total", "kernel" => kernel)
        .increment(iterations as u64);
}

#[cfg(not(feature = "metrics"))]
pub(crate) fn record_iterations(_kernel: &'static str, _iterations: usize) {}

#[cfg(feature = "metrics")]
pub(crate) fn record_not_converged() {
    metrics::counter!("graphmark_pagerank_not_converged_total").increment(1);
}

#[cfg(not(feature = "metrics"))]
pub(crate) fn record_not_converged() {}
