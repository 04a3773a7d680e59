//! Synthetic multi-component graph generator.
//!
//! Nodes are split into sequential component blocks. Each block receives a
//! random spanning structure that makes it strongly connected, a number of
//! extra random intra-component edges, and finally a bounded number of edges
//! leading into other components. All randomness comes from a single
//! [`BenchRng`] seeded from the configuration, so one seed always yields the
//! same edge list and weights.

use std::{collections::HashSet, ops::Range};

use tracing::{debug, info, instrument};

use crate::{
    Result,
    config::GeneratorConfig,
    graph::{ComponentId, Graph, Weight},
    rng::BenchRng,
};

/// Splits `node_count` node indices into `component_count` contiguous blocks.
///
/// The first `node_count % component_count` blocks hold one extra node so
/// block sizes differ by at most one. Callers must pass a non-zero
/// `component_count`; a zero count yields no blocks.
#[must_use]
pub(crate) fn partition(node_count: usize, component_count: usize) -> Vec<Range<usize>> {
    if component_count == 0 {
        return Vec::new();
    }
    let base = node_count / component_count;
    let remainder = node_count % component_count;
    let mut start = 0;
    (0..component_count)
        .map(|component| {
            let size = base + usize::from(component < remainder);
            let block = start..start + size;
            start = block.end;
            block
        })
        .collect()
}

/// Builds and seals a synthetic graph described by `config`.
///
/// # Errors
/// Returns [`crate::GraphmarkError::InvalidConfig`] when `config` fails
/// [`GeneratorConfig::validate`].
///
/// # Examples
/// ```
/// use graphmark_core::{GeneratorConfig, generate_graph};
///
/// let graph = generate_graph(&GeneratorConfig {
///     node_count: 10,
///     component_count: 2,
///     max_component_outdegree: 3,
///     ..GeneratorConfig::default()
/// })?;
/// assert_eq!(graph.node_count(), 10);
/// assert_eq!(graph.component_count(), 2);
/// assert!(graph.is_sealed());
/// # Ok::<(), graphmark_core::GraphmarkError>(())
/// ```
#[instrument(
    name = "generator.generate",
    err,
    skip(config),
    fields(
        seed = config.seed,
        nodes = config.node_count,
        components = config.component_count,
        max_component_outdegree = config.max_component_outdegree,
    ),
)]
pub fn generate_graph(config: &GeneratorConfig) -> Result<Graph> {
    config.validate()?;

    let blocks = partition(config.node_count, config.component_count);
    let mut builder = EdgeBuilder::new(config);
    for (component, block) in blocks.iter().enumerate() {
        for _ in block.clone() {
            builder.graph.add_node(ComponentId::new(component))?;
        }
    }

    for block in &blocks {
        builder.link_component(block.clone(), config.extra_intra_edges_per_node)?;
    }
    debug!(
        intra_edges = builder.graph.edge_count(),
        "intra-component structure built"
    );

    if blocks.len() > 1 {
        for block in &blocks {
            builder.link_across(block.clone(), config.max_component_outdegree)?;
        }
    }
    debug!(
        cross_edges = builder.cross_edges,
        duplicates = builder.duplicates,
        "cross-component linking finished"
    );

    let mut graph = builder.graph;
    graph.seal();
    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "graph generated"
    );
    Ok(graph)
}

/// Mutable generation state shared by every phase.
struct EdgeBuilder {
    graph: Graph,
    rng: BenchRng,
    seen: HashSet<(usize, usize)>,
    max_weight: Weight,
    node_count: usize,
    cross_edges: usize,
    duplicates: usize,
}

impl EdgeBuilder {
    fn new(config: &GeneratorConfig) -> Self {
        // Dedup bounds what any node can realise, whatever the caps say.
        let reachable = config.node_count.saturating_sub(1);
        let edges_per_node = config
            .extra_intra_edges_per_node
            .saturating_add(config.max_component_outdegree.min(reachable))
            .saturating_add(2)
            .min(reachable);
        Self {
            graph: Graph::with_capacity(config.node_count, edges_per_node),
            rng: BenchRng::seed(config.seed),
            seen: HashSet::new(),
            max_weight: config.max_weight,
            node_count: config.node_count,
            cross_edges: 0,
            duplicates: 0,
        }
    }

    /// Inserts `from -> to` with a fresh weight unless the pair already exists.
    fn insert(&mut self, from: usize, to: usize) -> Result<bool> {
        if from == to || !self.seen.insert((from, to)) {
            self.duplicates += 1;
            return Ok(false);
        }
        let weight = self.rng.next_weight(self.max_weight);
        self.graph.add_edge(from, to, weight)?;
        Ok(true)
    }

    /// Makes `block` strongly connected, then densifies it.
    ///
    /// Offset `i` gains an edge from a random earlier offset and an edge back
    /// to a random earlier offset, so every node is reachable from the block
    /// root and reaches it in turn. Extra draws stop once the block is a
    /// complete digraph.
    fn link_component(&mut self, block: Range<usize>, extra_per_node: usize) -> Result<()> {
        let start = block.start;
        let size = block.len();
        let mut linked = 0;
        for offset in 1..size {
            let parent = self.rng.next_int(0, offset - 1);
            linked += usize::from(self.insert(start + parent, start + offset)?);
            let back = self.rng.next_int(0, offset - 1);
            linked += usize::from(self.insert(start + offset, start + back)?);
        }
        if size < 2 {
            return Ok(());
        }
        let complete = size.saturating_mul(size - 1);
        for _ in 0..extra_per_node.saturating_mul(size) {
            if linked == complete {
                break;
            }
            let from = self.rng.next_int(0, size - 1);
            let to = self.rng.next_int(0, size - 1);
            linked += usize::from(self.insert(start + from, start + to)?);
        }
        Ok(())
    }

    /// Adds up to `max_outdegree` edges from each node of `block` into other
    /// components.
    ///
    /// Targets are drawn from the `node_count - block.len()` nodes outside the
    /// block with a single draw that skips over the block's index range.
    /// Drawing stops early once a node links to every outside node.
    fn link_across(&mut self, block: Range<usize>, max_outdegree: usize) -> Result<()> {
        let outside = self.node_count - block.len();
        for node in block.clone() {
            let degree = self.rng.next_int(0, max_outdegree);
            let mut linked = 0;
            for _ in 0..degree {
                if linked == outside {
                    break;
                }
                let mut target = self.rng.next_int(0, outside - 1);
                if target >= block.start {
                    target += block.len();
                }
                if self.insert(node, target)? {
                    self.cross_edges += 1;
                    linked += 1;
                }
            }
        }
        Ok(())
    }
}
