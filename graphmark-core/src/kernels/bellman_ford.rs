//! Single-source shortest paths by Bellman-Ford relaxation.

use tracing::{info, instrument, warn};

use super::{ensure_source, record_iterations};
use crate::{Graph, Result, error::GraphmarkError};

/// Distances computed by [`bellman_ford`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShortestPaths {
    distances: Vec<Option<i64>>,
    passes: usize,
    converged: bool,
}

impl ShortestPaths {
    /// Distance per node; `None` marks nodes the source cannot reach.
    #[must_use]
    #[rustfmt::skip]
    pub fn distances(&self) -> &[Option<i64>] { &self.distances }

    /// Distance to `node`, or `None` when unreached or out of range.
    #[must_use]
    pub fn distance(&self, node: usize) -> Option<i64> {
        self.distances.get(node).copied().flatten()
    }

    /// Number of full relaxation passes performed.
    #[must_use]
    #[rustfmt::skip]
    pub fn passes(&self) -> usize { self.passes }

    /// Whether relaxation reached a fixed point.
    #[must_use]
    #[rustfmt::skip]
    pub fn converged(&self) -> bool { self.converged }

    /// Number of nodes with a finite distance, the source included.
    #[must_use]
    pub fn reached_count(&self) -> usize {
        self.distances.iter().filter(|distance| distance.is_some()).count()
    }
}

/// Computes weighted shortest-path distances from `source`.
///
/// Runs at most `node_count - 1` passes over [`Graph::edges`], stopping after
/// the first pass that changes nothing. When every pass changed something an
/// extra pass checks whether any edge can still be relaxed.
///
/// # Errors
/// Returns [`GraphmarkError::InvalidSource`] when `source` is not a node and
/// [`GraphmarkError::NegativeCycleDetected`] when a negative-weight cycle is
/// reachable from `source`.
///
/// # Examples
/// ```
/// use graphmark_core::{ComponentId, Graph, bellman_ford};
///
/// let mut graph = Graph::new();
/// for _ in 0..3 {
///     graph.add_node(ComponentId::new(0))?;
/// }
/// graph.add_edge(0, 1, 4)?;
/// graph.add_edge(0, 2, 9)?;
/// graph.add_edge(1, 2, 2)?;
/// graph.seal();
///
/// let paths = bellman_ford(&graph, 0)?;
/// assert_eq!(paths.distances(), &[Some(0), Some(4), Some(6)]);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[instrument(
    name = "kernel.bellman_ford",
    err,
    skip(graph),
    fields(nodes = graph.node_count(), edges = graph.edge_count()),
)]
pub fn bellman_ford(graph: &Graph, source: usize) -> Result<ShortestPaths> {
    ensure_source(graph, source)?;

    let node_count = graph.node_count();
    let mut distances: Vec<Option<i64>> = vec![None; node_count];
    distances[source] = Some(0);

    let max_passes = node_count.saturating_sub(1);
    let mut passes = 0;
    let mut converged = false;
    while passes < max_passes {
        passes += 1;
        if !relax_pass(graph, &mut distances) {
            converged = true;
            break;
        }
    }
    record_iterations("bellman_ford", passes);

    if !converged {
        if let Some((from, to)) = first_relaxable(graph, &distances) {
            warn!(from, to, passes, "negative-weight cycle detected");
            return Err(GraphmarkError::NegativeCycleDetected { from, to });
        }
        converged = true;
    }

    let paths = ShortestPaths {
        distances,
        passes,
        converged,
    };
    info!(
        reached = paths.reached_count(),
        passes, "shortest paths computed"
    );
    Ok(paths)
}

/// Relaxes every edge once, returning whether any distance changed.
fn relax_pass(graph: &Graph, distances: &mut [Option<i64>]) -> bool {
    let mut updated = false;
    for (from, edge) in graph.edges() {
        let Some(base) = distances[from] else {
            continue;
        };
        let candidate = base + i64::from(edge.weight());
        let slot = &mut distances[edge.target()];
        if slot.is_none_or(|current| candidate < current) {
            *slot = Some(candidate);
            updated = true;
        }
    }
    updated
}

fn first_relaxable(graph: &Graph, distances: &[Option<i64>]) -> Option<(usize, usize)> {
    graph.edges().find_map(|(from, edge)| {
        let base = distances[from]?;
        let candidate = base + i64::from(edge.weight());
        distances[edge.target()]
            .is_none_or(|current| candidate < current)
            .then_some((from, edge.target()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use proptest::prelude::*;
    use rstest::rstest;

    use crate::{
        ComponentId, GraphmarkErrorCode, Weight, config::GeneratorConfig, generate_graph,
        test_utils::suite_proptest_config,
    };

    fn graph_from(nodes: usize, edges: &[(usize, usize, Weight)]) -> Graph {
        let mut graph = Graph::new();
        for _ in 0..nodes {
            graph
                .add_node(ComponentId::new(0))
                .expect("unsealed graph accepts nodes");
        }
        for &(from, to, weight) in edges {
            graph.add_edge(from, to, weight).expect("edge is valid");
        }
        graph.seal();
        graph
    }

    #[test]
    fn finds_cheaper_indirect_route() {
        let graph = graph_from(4, &[(0, 1, 5), (0, 2, 1), (2, 1, 1), (1, 3, 2)]);
        let paths = bellman_ford(&graph, 0).expect("graph has no negative cycle");
        assert_eq!(paths.distances(), &[Some(0), Some(2), Some(1), Some(4)]);
        assert!(paths.converged());
        assert_eq!(paths.reached_count(), 4);
    }

    #[test]
    fn unreachable_nodes_stay_unreached() {
        let graph = graph_from(3, &[(1, 2, 1)]);
        let paths = bellman_ford(&graph, 0).expect("graph has no negative cycle");
        assert_eq!(paths.distances(), &[Some(0), None, None]);
        assert_eq!(paths.distance(1), None);
        assert_eq!(paths.distance(42), None);
        assert_eq!(paths.passes(), 1);
    }

    #[test]
    fn single_node_needs_no_passes() {
        let graph = graph_from(1, &[]);
        let paths = bellman_ford(&graph, 0).expect("trivial graph");
        assert_eq!(paths.distances(), &[Some(0)]);
        assert_eq!(paths.passes(), 0);
        assert!(paths.converged());
    }

    #[test]
    fn negative_edges_without_cycles_are_supported() {
        let graph = graph_from(3, &[(0, 1, 4), (1, 2, -3), (0, 2, 2)]);
        let paths = bellman_ford(&graph, 0).expect("no negative cycle");
        assert_eq!(paths.distance(2), Some(1));
    }

    #[test]
    fn reachable_negative_cycle_is_reported() {
        let graph = graph_from(3, &[(0, 1, 1), (1, 2, -2), (2, 1, 1)]);
        let err = bellman_ford(&graph, 0).expect_err("cycle 1 -> 2 -> 1 weighs -1");
        assert_eq!(err.code(), GraphmarkErrorCode::NegativeCycleDetected);
        assert!(matches!(
            err,
            GraphmarkError::NegativeCycleDetected { from, to }
                if (from, to) == (1, 2) || (from, to) == (2, 1)
        ));
    }

    #[test]
    fn unreachable_negative_cycle_is_ignored() {
        let graph = graph_from(4, &[(0, 1, 3), (2, 3, -5), (3, 2, 1)]);
        let paths = bellman_ford(&graph, 0).expect("cycle is not reachable");
        assert_eq!(paths.distances(), &[Some(0), Some(3), None, None]);
    }

    #[rstest]
    #[case::past_end(3)]
    #[case::far_past_end(usize::MAX)]
    fn rejects_missing_source(#[case] source: usize) {
        let graph = graph_from(3, &[(0, 1, 1)]);
        let err = bellman_ford(&graph, source).expect_err("source is not a node");
        assert_eq!(
            err,
            GraphmarkError::InvalidSource {
                node: source,
                node_count: 3
            }
        );
    }

    #[test]
    fn extra_relaxation_changes_nothing_for_positive_weights() {
        let graph = graph_from(
            5,
            &[(0, 1, 2), (1, 2, 2), (2, 3, 2), (3, 4, 2), (0, 4, 20), (4, 0, 1)],
        );
        let paths = bellman_ford(&graph, 0).expect("positive weights");
        let mut distances = paths.distances().to_vec();
        assert!(!relax_pass(&graph, &mut distances));
        assert_eq!(distances, paths.distances());
    }

    proptest! {
        #![proptest_config(suite_proptest_config(64))]

        #[test]
        fn generated_graphs_admit_no_further_relaxation(
            nodes in 1usize..48,
            components in 1usize..5,
            max_weight in 1i32..20,
            seed in any::<u64>(),
        ) {
            let graph = generate_graph(&GeneratorConfig {
                seed,
                node_count: nodes,
                component_count: components.min(nodes),
                max_component_outdegree: 3,
                max_weight,
                ..GeneratorConfig::default()
            })
            .map_err(|err| TestCaseError::fail(err.to_string()))?;
            let paths = bellman_ford(&graph, 0)
                .map_err(|err| TestCaseError::fail(err.to_string()))?;

            prop_assert!(paths.converged());
            prop_assert_eq!(paths.distance(0), Some(0));
            let mut distances = paths.distances().to_vec();
            prop_assert!(!relax_pass(&graph, &mut distances));
            prop_assert_eq!(distances.as_slice(), paths.distances());
            for (from, edge) in graph.edges() {
                if let Some(base) = paths.distance(from) {
                    let bound = base + i64::from(edge.weight());
                    prop_assert!(paths.distance(edge.target()).is_some_and(|d| d <= bound));
                }
            }
        }
    }
}
