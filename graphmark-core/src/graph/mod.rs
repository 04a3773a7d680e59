//! Weighted directed graph store shared by the generator and the kernels.
//!
//! The store is mutable while the generator builds it and frozen by
//! [`Graph::seal`] before it is handed to the kernels. Every mutation on a
//! sealed store fails with [`GraphError::Sealed`]; once sealed the graph is
//! only ever read, so it can be shared across threads by reference.

use std::fmt;

use crate::error::{GraphError, InvalidEdgeKind};

/// Edge weight carried by every stored edge.
pub type Weight = i32;

/// Identifier for a component of the generated graph.
///
/// # Examples
/// ```
/// use graphmark_core::ComponentId;
///
/// let id = ComponentId::new(3);
/// assert_eq!(id.get(), 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ComponentId(usize);

impl ComponentId {
    /// Creates a component identifier from its index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the component index.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for ComponentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An outgoing edge as stored in a node's adjacency list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Edge {
    target: usize,
    weight: Weight,
}

impl Edge {
    /// Returns the node the edge points at.
    #[must_use]
    #[rustfmt::skip]
    pub fn target(&self) -> usize { self.target }

    /// Returns the edge weight.
    #[must_use]
    #[rustfmt::skip]
    pub fn weight(&self) -> Weight { self.weight }
}

/// Node set, edge multiset and outgoing adjacency index.
///
/// # Examples
/// ```
/// use graphmark_core::{ComponentId, Graph, GraphError};
///
/// let mut graph = Graph::new();
/// let a = graph.add_node(ComponentId::new(0))?;
/// let b = graph.add_node(ComponentId::new(0))?;
/// graph.add_edge(a, b, 4)?;
/// graph.seal();
///
/// assert_eq!(graph.edge_count(), 1);
/// assert_eq!(graph.outgoing_edges(a)[0].target(), b);
/// assert_eq!(graph.add_node(ComponentId::new(0)), Err(GraphError::Sealed));
/// # Ok::<(), GraphError>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Graph {
    components: Vec<ComponentId>,
    outgoing: Vec<Vec<Edge>>,
    edges_per_node: usize,
    edge_count: usize,
    sealed: bool,
}

impl Graph {
    /// Creates an empty, unsealed graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-allocates room for `nodes` nodes, reserving `edges_per_node`
    /// adjacency slots for each node as it is added.
    ///
    /// The per-node hint is clamped to `nodes - 1`, the most distinct targets
    /// a node can have without self-loops.
    #[must_use]
    pub fn with_capacity(nodes: usize, edges_per_node: usize) -> Self {
        Self {
            components: Vec::with_capacity(nodes),
            outgoing: Vec::with_capacity(nodes),
            edges_per_node: edges_per_node.min(nodes.saturating_sub(1)),
            edge_count: 0,
            sealed: false,
        }
    }

    /// Appends a node tagged with `component` and returns its index.
    ///
    /// # Errors
    /// Returns [`GraphError::Sealed`] once the graph has been sealed.
    pub fn add_node(&mut self, component: ComponentId) -> Result<usize, GraphError> {
        self.ensure_unsealed()?;
        let index = self.components.len();
        self.components.push(component);
        self.outgoing.push(Vec::with_capacity(self.edges_per_node));
        Ok(index)
    }

    /// Adds a directed edge `from -> to` carrying `weight`.
    ///
    /// Parallel edges are accepted; deduplication is the caller's policy.
    ///
    /// # Errors
    /// Returns [`GraphError::Sealed`] once sealed, and
    /// [`GraphError::InvalidEdge`] for self-loops or endpoints outside the
    /// node range.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: Weight) -> Result<(), GraphError> {
        self.ensure_unsealed()?;
        let node_count = self.node_count();
        let invalid = |kind| GraphError::InvalidEdge {
            from,
            to,
            node_count,
            kind,
        };
        if from >= node_count || to >= node_count {
            return Err(invalid(InvalidEdgeKind::EndpointOutOfRange));
        }
        if from == to {
            return Err(invalid(InvalidEdgeKind::SelfLoop));
        }
        let adjacency = self
            .outgoing
            .get_mut(from)
            .ok_or_else(|| invalid(InvalidEdgeKind::EndpointOutOfRange))?;
        adjacency.push(Edge { target: to, weight });
        self.edge_count += 1;
        Ok(())
    }

    /// Freezes the graph. Calling this more than once has no further effect.
    pub fn seal(&mut self) {
        self.sealed = true;
    }

    /// Reports whether [`Self::seal`] has been called.
    #[must_use]
    pub fn is_sealed(&self) -> bool {
        self.sealed
    }

    /// Returns the outgoing edges of `node` in insertion order.
    ///
    /// Nodes outside the graph have no edges.
    #[must_use]
    pub fn outgoing_edges(&self, node: usize) -> &[Edge] {
        self.outgoing.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the number of edges leaving `node`.
    #[must_use]
    pub fn out_degree(&self, node: usize) -> usize {
        self.outgoing_edges(node).len()
    }

    /// Returns the number of nodes.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.components.len()
    }

    /// Returns the number of stored edges, counting parallel edges separately.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Returns the component tag of `node`, if the node exists.
    #[must_use]
    pub fn component_of(&self, node: usize) -> Option<ComponentId> {
        self.components.get(node).copied()
    }

    /// Returns the number of component tags in use (highest tag plus one).
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components
            .iter()
            .map(|component| component.get() + 1)
            .max()
            .unwrap_or(0)
    }

    /// Returns the nodes tagged with `component` in ascending order.
    #[must_use]
    pub fn component_members(&self, component: ComponentId) -> Vec<usize> {
        self.components
            .iter()
            .enumerate()
            .filter_map(|(node, tag)| (*tag == component).then_some(node))
            .collect()
    }

    /// Iterates over every edge as `(source, edge)`, by source node and then
    /// insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (usize, &Edge)> + '_ {
        self.outgoing
            .iter()
            .enumerate()
            .flat_map(|(source, edges)| edges.iter().map(move |edge| (source, edge)))
    }

    fn ensure_unsealed(&self) -> Result<(), GraphError> {
        if self.sealed {
            return Err(GraphError::Sealed);
        }
        Ok(())
    }
}
