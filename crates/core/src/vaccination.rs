//! Pre-simulation vaccination protocols.
//!
//! A protocol marks `round(N * f)` nodes Vaccinated before the first
//! infection is seeded. Strategies differ only in how they choose those
//! nodes; the engine is generic over the trait and needs no changes to
//! admit a new one.

use outbreak_graph::{ContactGraph, NodeId};
use rand::Rng;
use tracing::debug;

use crate::state::{HealthState, StateStore};

/// Number of nodes a protocol must vaccinate for a given fraction.
pub fn vaccination_quota(node_count: usize, f: f64) -> usize {
    (node_count as f64 * f).round() as usize
}

/// A strategy for immunizing part of the population before seeding.
pub trait VaccinationProtocol {
    /// Short tag identifying the strategy in logs and reports.
    fn acronym(&self) -> &'static str;

    /// Vaccinate `round(node_count * f)` nodes, never the same node twice.
    ///
    /// Mutates the state store from Susceptible to Vaccinated and returns
    /// the realized vaccinated fraction (`quota / node_count`). Must run
    /// strictly before infection seeding; `f` has already been validated
    /// by the engine.
    fn vaccinate(
        &self,
        graph: &impl ContactGraph,
        states: &mut StateStore,
        f: f64,
        rng: &mut impl Rng,
    ) -> f64;
}

/// Acquaintance vaccination: immunize friends of random nodes.
///
/// Each round picks a uniformly random node and vaccinates a uniformly
/// random still-susceptible neighbor of it. A node with no susceptible
/// neighbors falls back to a uniform pick from the pool of not yet
/// vaccinated nodes, so the quota is always met. Targeting neighbors
/// exploits the friendship paradox: the neighbor of a random node has
/// higher expected degree than a random node.
#[derive(Debug, Clone, Copy, Default)]
pub struct Acquaintance;

impl VaccinationProtocol for Acquaintance {
    fn acronym(&self) -> &'static str {
        "AC"
    }

    fn vaccinate(
        &self,
        graph: &impl ContactGraph,
        states: &mut StateStore,
        f: f64,
        rng: &mut impl Rng,
    ) -> f64 {
        let node_count = graph.node_count();
        if node_count == 0 {
            return 0.0;
        }
        let quota = vaccination_quota(node_count, f);

        // Every round removes exactly one node, so the pool cannot run dry
        // while quota <= node_count.
        let mut pool: Vec<NodeId> = (0..node_count).collect();
        for _ in 0..quota {
            let picked = rng.gen_range(0..node_count);
            let susceptible_neighbors: Vec<NodeId> = graph
                .neighbors(picked)
                .iter()
                .copied()
                .filter(|&m| states.get(m) == HealthState::Susceptible)
                .collect();

            let chosen = if susceptible_neighbors.is_empty() {
                pool.swap_remove(rng.gen_range(0..pool.len()))
            } else {
                let chosen = susceptible_neighbors[rng.gen_range(0..susceptible_neighbors.len())];
                let slot = pool
                    .iter()
                    .position(|&n| n == chosen)
                    .expect("susceptible node missing from candidate pool");
                pool.swap_remove(slot);
                chosen
            };
            states.set(chosen, HealthState::Vaccinated);
        }

        debug!(protocol = self.acronym(), quota, "vaccination complete");
        quota as f64 / node_count as f64
    }
}

/// Uniform random vaccination: a without-replacement sample of the quota.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomVaccination;

impl VaccinationProtocol for RandomVaccination {
    fn acronym(&self) -> &'static str {
        "RND"
    }

    fn vaccinate(
        &self,
        graph: &impl ContactGraph,
        states: &mut StateStore,
        f: f64,
        rng: &mut impl Rng,
    ) -> f64 {
        let node_count = graph.node_count();
        if node_count == 0 {
            return 0.0;
        }
        let quota = vaccination_quota(node_count, f);

        let mut pool: Vec<NodeId> = (0..node_count).collect();
        for _ in 0..quota {
            let node = pool.swap_remove(rng.gen_range(0..pool.len()));
            states.set(node, HealthState::Vaccinated);
        }

        debug!(protocol = self.acronym(), quota, "vaccination complete");
        quota as f64 / node_count as f64
    }
}

/// Degree-targeted vaccination: immunize the highest-degree nodes first.
///
/// Deterministic; the rng is part of the protocol contract but unused.
/// Ties break toward the lower node id.
#[derive(Debug, Clone, Copy, Default)]
pub struct DegreeTargeted;

impl VaccinationProtocol for DegreeTargeted {
    fn acronym(&self) -> &'static str {
        "DEG"
    }

    fn vaccinate(
        &self,
        graph: &impl ContactGraph,
        states: &mut StateStore,
        f: f64,
        _rng: &mut impl Rng,
    ) -> f64 {
        let node_count = graph.node_count();
        if node_count == 0 {
            return 0.0;
        }
        let quota = vaccination_quota(node_count, f);

        let mut by_degree: Vec<NodeId> = (0..node_count).collect();
        by_degree.sort_by_key(|&node| (std::cmp::Reverse(graph.degree(node)), node));
        for &node in by_degree.iter().take(quota) {
            states.set(node, HealthState::Vaccinated);
        }

        debug!(protocol = self.acronym(), quota, "vaccination complete");
        quota as f64 / node_count as f64
    }
}
