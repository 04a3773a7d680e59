//! PageRank by capped power iteration.
//!
//! Rank held by nodes without outgoing edges is spread evenly over every node
//! each iteration, so the ranks always sum to one. Hitting the iteration cap
//! is not an error: the last iterate is returned with
//! [`PageRankStatus::NotConverged`].

use tracing::{info, instrument, warn};

use super::{record_iterations, record_not_converged};
use crate::{Graph, config::PageRankConfig};

/// Outcome of the power iteration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageRankStatus {
    /// The L1 change between iterates fell below `max_error`.
    Converged,
    /// `max_iterations` iterations ran without reaching `max_error`.
    NotConverged,
}

/// Ranks computed by [`pagerank`].
#[derive(Clone, Debug, PartialEq)]
pub struct PageRank {
    ranks: Vec<f64>,
    iterations: usize,
    error: f64,
    status: PageRankStatus,
}

impl PageRank {
    /// Rank per node.
    #[must_use]
    #[rustfmt::skip]
    pub fn ranks(&self) -> &[f64] { &self.ranks }

    /// Number of power iterations performed.
    #[must_use]
    #[rustfmt::skip]
    pub fn iterations(&self) -> usize { self.iterations }

    /// L1 distance between the final two iterates.
    #[must_use]
    #[rustfmt::skip]
    pub fn error(&self) -> f64 { self.error }

    /// Whether the error fell below the threshold within the iteration cap.
    #[must_use]
    #[rustfmt::skip]
    pub fn status(&self) -> PageRankStatus { self.status }

    /// Sum of all ranks; one up to rounding for any non-empty graph.
    #[must_use]
    pub fn rank_sum(&self) -> f64 {
        self.ranks.iter().sum()
    }
}

/// Approximates stationary ranks for every node of `graph`.
///
/// Each iteration computes
/// `next[v] = (1 - d) / n + d * (sum(rank[u] / out_degree(u)) + dangling / n)`
/// over the edges `u -> v`, where `dangling` is the rank held by nodes with
/// no outgoing edges.
///
/// # Examples
/// ```
/// use graphmark_core::{ComponentId, Graph, PageRankConfig, PageRankStatus, pagerank};
///
/// let mut graph = Graph::new();
/// for _ in 0..2 {
///     graph.add_node(ComponentId::new(0))?;
/// }
/// graph.add_edge(0, 1, 1)?;
/// graph.add_edge(1, 0, 1)?;
/// graph.seal();
///
/// let ranks = pagerank(&graph, &PageRankConfig::default());
/// assert_eq!(ranks.status(), PageRankStatus::Converged);
/// assert!((ranks.ranks()[0] - 0.5).abs() < 1e-9);
/// # Ok::<(), graphmark_core::GraphError>(())
/// ```
#[instrument(
    name = "kernel.pagerank",
    skip(graph, config),
    fields(
        nodes = graph.node_count(),
        damping = config.damping,
        max_iterations = config.max_iterations,
        max_error = config.max_error,
    ),
)]
pub fn pagerank(graph: &Graph, config: &PageRankConfig) -> PageRank {
    let node_count = graph.node_count();
    if node_count == 0 {
        return PageRank {
            ranks: Vec::new(),
            iterations: 0,
            error: 0.0,
            status: PageRankStatus::Converged,
        };
    }

    let n = node_count as f64;
    let damping = config.damping;
    let out_degrees: Vec<usize> = (0..node_count).map(|node| graph.out_degree(node)).collect();
    let mut ranks = vec![1.0 / n; node_count];
    let mut error = f64::INFINITY;
    let mut iterations = 0;
    let mut status = PageRankStatus::NotConverged;

    while iterations < config.max_iterations {
        iterations += 1;
        let dangling: f64 = ranks
            .iter()
            .zip(&out_degrees)
            .filter(|(_, degree)| **degree == 0)
            .map(|(rank, _)| rank)
            .sum();
        let base = (1.0 - damping) / n + damping * dangling / n;
        let mut next = vec![base; node_count];
        for (from, edge) in graph.edges() {
            next[edge.target()] += damping * ranks[from] / out_degrees[from] as f64;
        }

        error = next
            .iter()
            .zip(&ranks)
            .map(|(new, old)| (new - old).abs())
            .sum();
        ranks = next;
        if error < config.max_error {
            status = PageRankStatus::Converged;
            break;
        }
    }
    record_iterations("pagerank", iterations);

    if status == PageRankStatus::NotConverged {
        record_not_converged();
        warn!(iterations, error, "pagerank stopped before converging");
    }
    info!(iterations, error, status = ?status, "pagerank completed");
    PageRank {
        ranks,
        iterations,
        error,
        status,
    }
}
