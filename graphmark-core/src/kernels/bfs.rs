//! Breadth-first search with a hard cap on expansion rounds.
//!
//! The cap trades completeness for predictable termination: nodes further
//! than `max_iterations` hops from the source stay unvisited, and the result
//! reports whether the cap cut the traversal short.

use tracing::{info, instrument, warn};

use super::{ensure_source, record_iterations};
use crate::{Graph, Result, config::BfsConfig};

/// Levels computed by [`breadth_first_search`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BfsTraversal {
    levels: Vec<Option<usize>>,
    rounds: usize,
    capped: bool,
}

impl BfsTraversal {
    /// Hop distance per node; `None` marks unvisited nodes.
    #[must_use]
    #[rustfmt::skip]
    pub fn levels(&self) -> &[Option<usize>] { &self.levels }

    /// Level of `node`, or `None` when unvisited or out of range.
    #[must_use]
    pub fn level(&self, node: usize) -> Option<usize> {
        self.levels.get(node).copied().flatten()
    }

    /// Whether `node` was visited.
    #[must_use]
    pub fn visited(&self, node: usize) -> bool {
        self.level(node).is_some()
    }

    /// Number of visited nodes, the source included.
    #[must_use]
    pub fn visited_count(&self) -> usize {
        self.levels.iter().filter(|level| level.is_some()).count()
    }

    /// Number of expansion rounds performed.
    #[must_use]
    #[rustfmt::skip]
    pub fn rounds(&self) -> usize { self.rounds }

    /// True when the round cap stopped the search while unvisited nodes were
    /// still adjacent to the frontier.
    #[must_use]
    #[rustfmt::skip]
    pub fn capped(&self) -> bool { self.capped }
}

/// Visits nodes level by level from `source` for at most
/// `config.max_iterations` rounds.
///
/// Round `r` assigns level `r` to every unvisited out-neighbour of the nodes
/// at level `r - 1`. The search stops early once the frontier empties.
///
/// # Errors
/// Returns [`crate::GraphmarkError::InvalidSource`] when `source` is not a
/// node.
///
/// # Examples
/// ```
/// use graphmark_core::{BfsConfig, ComponentId, Graph, breadth_first_search};
///
/// let mut graph = Graph::new();
/// for _ in 0..4 {
///     graph.add_node(ComponentId::new(0))?;
/// }
/// graph.add_edge(0, 1, 1)?;
/// graph.add_edge(1, 2, 1)?;
/// graph.add_edge(2, 3, 1)?;
/// graph.seal();
///
/// let traversal = breadth_first_search(&graph, 0, &BfsConfig { max_iterations: 2 })?;
/// assert_eq!(traversal.levels(), &[Some(0), Some(1), Some(2), None]);
/// assert!(traversal.capped());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "kernel.bfs",
    err,
    skip(graph, config),
    fields(nodes = graph.node_count(), max_iterations = config.max_iterations),
)]
pub fn breadth_first_search(
    graph: &Graph,
    source: usize,
    config: &BfsConfig,
) -> Result<BfsTraversal> {
    ensure_source(graph, source)?;

    let mut levels: Vec<Option<usize>> = vec![None; graph.node_count()];
    levels[source] = Some(0);
    let mut frontier = vec![source];
    let mut rounds = 0;

    while !frontier.is_empty() && rounds < config.max_iterations {
        rounds += 1;
        let mut next = Vec::new();
        for &node in &frontier {
            for edge in graph.outgoing_edges(node) {
                let slot = &mut levels[edge.target()];
                if slot.is_none() {
                    *slot = Some(rounds);
                    next.push(edge.target());
                }
            }
        }
        frontier = next;
    }
    record_iterations("bfs", rounds);

    let capped = frontier.iter().any(|&node| {
        graph
            .outgoing_edges(node)
            .iter()
            .any(|edge| levels[edge.target()].is_none())
    });

    let traversal = BfsTraversal {
        levels,
        rounds,
        capped,
    };
    if capped {
        warn!(
            rounds,
            visited = traversal.visited_count(),
            "bfs stopped at the round cap with an unexplored frontier"
        );
    }
    info!(
        visited = traversal.visited_count(),
        rounds, "bfs completed"
    );
    Ok(traversal)
}
