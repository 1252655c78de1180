//! Per-node compartment state, layered over the graph.

use outbreak_graph::NodeId;

/// SIR compartment of a single node, plus the vaccinated compartment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HealthState {
    /// Can be infected across an S-I edge.
    Susceptible,
    /// Currently infectious.
    Infected,
    /// Was infected, no longer participates in transmission.
    Recovered,
    /// Immunized before seeding, never infected.
    Vaccinated,
}

/// Dense per-node state store.
///
/// A fresh store starts all-Susceptible; the engine builds one at the start
/// of every run, so no state leaks between runs.
#[derive(Debug, Clone)]
pub struct StateStore {
    states: Vec<HealthState>,
}

impl StateStore {
    /// Create a store for `node_count` nodes, all Susceptible.
    pub fn new(node_count: usize) -> Self {
        Self {
            states: vec![HealthState::Susceptible; node_count],
        }
    }

    /// Number of nodes tracked.
    pub fn node_count(&self) -> usize {
        self.states.len()
    }

    /// State of a node.
    pub fn get(&self, node: NodeId) -> HealthState {
        self.states[node]
    }

    /// Set the state of a node.
    pub fn set(&mut self, node: NodeId, state: HealthState) {
        self.states[node] = state;
    }

    /// Number of nodes currently in `state`.
    pub fn count(&self, state: HealthState) -> usize {
        self.states.iter().filter(|&&s| s == state).count()
    }

    /// Ids of all nodes currently in `state`, in ascending order.
    pub fn nodes_in(&self, state: HealthState) -> Vec<NodeId> {
        self.states
            .iter()
            .enumerate()
            .filter(|(_, &s)| s == state)
            .map(|(node, _)| node)
            .collect()
    }
}
