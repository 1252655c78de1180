//! The Susceptible-Infected edge frontier.
//!
//! For every currently infected node the frontier keeps the list of edges
//! reaching a still-susceptible neighbor, plus the running total of those
//! edges. The key set is the infected set; the engine never rediscovers
//! either by scanning the graph. Keeping the structure in lock-step with
//! every state change is what makes one simulation event O(degree) instead
//! of O(|E|).
//!
//! An `IndexMap` rather than `HashMap` backs the mapping: edge sampling
//! walks the entries in order, so iteration order has to be a pure function
//! of the event history for seeded runs to reproduce.

use indexmap::IndexMap;
use outbreak_graph::{ContactGraph, NodeId};
use rand::Rng;

use crate::state::{HealthState, StateStore};

/// Incrementally maintained index of all current S-I edges, keyed by
/// infected node.
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    edges: IndexMap<NodeId, Vec<NodeId>>,
    total_edges: usize,
}

impl Frontier {
    /// Create an empty frontier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of currently infected nodes.
    pub fn infected_count(&self) -> usize {
        self.edges.len()
    }

    /// Total number of S-I edges across all infected nodes.
    pub fn edge_count(&self) -> usize {
        self.total_edges
    }

    /// True when no node is infected.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Whether `node` is currently infected.
    pub fn contains(&self, node: NodeId) -> bool {
        self.edges.contains_key(&node)
    }

    /// The infected node at `index` in `[0, infected_count)`.
    pub fn node_at(&self, index: usize) -> NodeId {
        *self
            .edges
            .get_index(index)
            .expect("infected index out of range")
            .0
    }

    /// Register a newly infected node with its susceptible targets.
    pub fn insert(&mut self, node: NodeId, targets: Vec<NodeId>) {
        self.total_edges += targets.len();
        let previous = self.edges.insert(node, targets);
        debug_assert!(previous.is_none(), "node {node} was already infected");
    }

    /// Sample one S-I edge uniformly among all `edge_count()` edges.
    ///
    /// Returns `(infected, susceptible)`. Walks the per-node lists
    /// accumulating lengths, so the cost is O(infected nodes); the number
    /// of simultaneously infected nodes bounds the fragmentation.
    pub fn sample_edge(&self, rng: &mut impl Rng) -> (NodeId, NodeId) {
        assert!(self.total_edges > 0, "no S-I edge to sample");
        let mut index = rng.gen_range(0..self.total_edges);
        for (&node, targets) in &self.edges {
            if index < targets.len() {
                return (node, targets[index]);
            }
            index -= targets.len();
        }
        unreachable!("edge total out of sync with per-node lists")
    }

    /// Drop every edge pointing at `target` from the given infected
    /// neighbors' lists; `target` has just been infected and is no longer
    /// susceptible. Returns how many edges were removed.
    pub fn detach_target(
        &mut self,
        target: NodeId,
        infected_neighbors: impl IntoIterator<Item = NodeId>,
    ) -> usize {
        let mut removed = 0;
        for neighbor in infected_neighbors {
            let targets = self
                .edges
                .get_mut(&neighbor)
                .expect("infected neighbor missing from frontier");
            let before = targets.len();
            targets.retain(|&m| m != target);
            removed += before - targets.len();
        }
        self.total_edges -= removed;
        removed
    }

    /// Remove a recovering node and discard its edge list.
    ///
    /// Returns the length of the discarded list.
    pub fn remove(&mut self, node: NodeId) -> usize {
        let targets = self
            .edges
            .swap_remove(&node)
            .expect("recovering node missing from frontier");
        self.total_edges -= targets.len();
        targets.len()
    }
}

/// Recount S-I edges from scratch, straight off the graph and state store.
///
/// O(|E|); used to cross-check the frontier's incremental total in
/// debug assertions and tests, never to drive the simulation.
pub fn count_si_edges(graph: &impl ContactGraph, states: &StateStore) -> usize {
    (0..graph.node_count())
        .filter(|&node| states.get(node) == HealthState::Infected)
        .map(|node| {
            graph
                .neighbors(node)
                .iter()
                .filter(|&&m| states.get(m) == HealthState::Susceptible)
                .count()
        })
        .sum()
}
