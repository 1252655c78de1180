//! Contact network abstraction for epidemic simulations.
//!
//! The simulation engine never owns a graph; it borrows anything that
//! implements [`ContactGraph`]. [`AdjacencyGraph`] is the in-memory
//! adjacency-list implementation used by the rest of the workspace, but
//! callers with their own graph representation only need to expose node
//! count and O(1) neighbor iteration.

use thiserror::Error;

/// Dense node identifier in `[0, node_count)`.
pub type NodeId = usize;

/// Errors when constructing or mutating a graph.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GraphError {
    /// An edge endpoint is outside `[0, node_count)`.
    #[error("node {node} out of range (graph has {node_count} nodes)")]
    NodeOutOfRange {
        /// The offending node id.
        node: NodeId,
        /// Number of nodes in the graph.
        node_count: usize,
    },
}

/// Read-only view of an undirected contact network.
///
/// Node ids are dense and stable for the lifetime of the graph. Neighbor
/// slices may list a neighbor more than once if the underlying network has
/// parallel edges; the simulation treats each occurrence as its own edge.
pub trait ContactGraph {
    /// Number of nodes in the network.
    fn node_count(&self) -> usize;

    /// Neighbors of a node.
    fn neighbors(&self, node: NodeId) -> &[NodeId];

    /// Degree of a node.
    fn degree(&self, node: NodeId) -> usize {
        self.neighbors(node).len()
    }
}

/// Undirected graph stored as adjacency lists.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyGraph {
    adjacency: Vec<Vec<NodeId>>,
}

impl AdjacencyGraph {
    /// Create a graph with `node_count` nodes and no edges.
    pub fn new(node_count: usize) -> Self {
        Self {
            adjacency: vec![Vec::new(); node_count],
        }
    }

    /// Create a graph from an undirected edge list.
    pub fn from_edges(
        node_count: usize,
        edges: &[(NodeId, NodeId)],
    ) -> Result<Self, GraphError> {
        let mut graph = Self::new(node_count);
        for &(a, b) in edges {
            graph.add_edge(a, b)?;
        }
        Ok(graph)
    }

    /// Add an undirected edge between `a` and `b`.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) -> Result<(), GraphError> {
        let node_count = self.adjacency.len();
        for node in [a, b] {
            if node >= node_count {
                return Err(GraphError::NodeOutOfRange { node, node_count });
            }
        }
        self.adjacency[a].push(b);
        self.adjacency[b].push(a);
        Ok(())
    }

    /// Total number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }
}

impl ContactGraph for AdjacencyGraph {
    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn neighbors(&self, node: NodeId) -> &[NodeId] {
        &self.adjacency[node]
    }
}
