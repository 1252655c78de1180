//! The SIR simulation engine.

use outbreak_graph::{ContactGraph, NodeId};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SirError;
use crate::frontier::{count_si_edges, Frontier};
use crate::state::{HealthState, StateStore};
use crate::vaccination::VaccinationProtocol;

/// One sampled point of the epidemic time series.
///
/// Recovered and vaccinated nodes are implicit: their combined count is
/// `node_count - susceptible - infected`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IterationRecord {
    /// Nodes still susceptible.
    pub susceptible: usize,
    /// Nodes currently infected.
    pub infected: usize,
}

/// Mutable state of a single run, rebuilt from scratch by every
/// `simulate` call.
struct RunState {
    states: StateStore,
    frontier: Frontier,
    series: Vec<IterationRecord>,
}

/// Continuous-time stochastic SIR process over a borrowed contact network.
///
/// The engine validates its parameters up front, vaccinates through the
/// configured protocol, seeds one infection, and then repeatedly chooses
/// between infection and recovery events with probabilities proportional
/// to `beta * |S-I edges|` and `|infected|`. Each `simulate` call is one
/// independent run; the internal rng stream advances between runs, so a
/// seeded engine produces a reproducible sequence of runs.
pub struct SirEngine<'g, G, P> {
    graph: &'g G,
    beta: f64,
    f: f64,
    protocol: P,
    rng: ChaCha8Rng,
}

impl<'g, G: ContactGraph, P: VaccinationProtocol> SirEngine<'g, G, P> {
    /// Create an engine.
    ///
    /// `beta` is the transmission rate per S-I edge, `f` the fraction of
    /// nodes to vaccinate before seeding. Both must lie in `[0, 1]`;
    /// anything else (including NaN) is rejected before any simulation
    /// state exists.
    pub fn new(graph: &'g G, beta: f64, f: f64, protocol: P) -> Result<Self, SirError> {
        validate_proportion("beta", beta)?;
        validate_proportion("f", f)?;
        Ok(Self {
            graph,
            beta,
            f,
            protocol,
            rng: ChaCha8Rng::from_entropy(),
        })
    }

    /// Reseed the engine's random stream for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
        self
    }

    /// Transmission rate per S-I edge.
    pub fn beta(&self) -> f64 {
        self.beta
    }

    /// Requested vaccinated fraction.
    pub fn f(&self) -> f64 {
        self.f
    }

    /// Run one simulation to completion using the engine's own rng.
    pub fn simulate(&mut self) -> Result<Vec<IterationRecord>, SirError> {
        let mut rng = self.rng.clone();
        let result = self.simulate_with_rng(&mut rng);
        self.rng = rng;
        result
    }

    /// Run one simulation to completion with a caller-supplied rng.
    ///
    /// All per-run state is created here and dropped on return; the engine
    /// itself is read-only for the duration of the run.
    pub fn simulate_with_rng(&self, rng: &mut impl Rng) -> Result<Vec<IterationRecord>, SirError> {
        let mut run = self.seed_run(rng)?;

        while !run.frontier.is_empty() {
            self.step(&mut run, rng);
            debug_assert_eq!(
                run.frontier.edge_count(),
                count_si_edges(self.graph, &run.states),
                "frontier total diverged from graph recount"
            );
        }

        debug!(ticks = run.series.len(), "simulation finished");
        Ok(run.series)
    }

    /// Reset node states, vaccinate, and infect one uniformly random node
    /// among those still susceptible.
    ///
    /// With `f = 1` no susceptible node remains; the run then terminates
    /// immediately with the single record `(0, 0)`.
    fn seed_run(&self, rng: &mut impl Rng) -> Result<RunState, SirError> {
        if self.graph.node_count() == 0 {
            return Err(SirError::EmptyGraph);
        }

        let mut states = StateStore::new(self.graph.node_count());
        let realized = self
            .protocol
            .vaccinate(self.graph, &mut states, self.f, rng);

        let candidates = states.nodes_in(HealthState::Susceptible);
        let mut frontier = Frontier::new();
        let series = if candidates.is_empty() {
            vec![IterationRecord {
                susceptible: 0,
                infected: 0,
            }]
        } else {
            let seed_node = candidates[rng.gen_range(0..candidates.len())];
            states.set(seed_node, HealthState::Infected);
            frontier.insert(seed_node, si_targets(self.graph, &states, seed_node));
            debug!(
                seed_node,
                vaccinated_fraction = realized,
                si_edges = frontier.edge_count(),
                "seeded"
            );
            vec![IterationRecord {
                susceptible: states.count(HealthState::Susceptible),
                infected: 1,
            }]
        };

        Ok(RunState {
            states,
            frontier,
            series,
        })
    }

    /// One tick of the event loop: a time-advance draw, then an
    /// infect-or-recover draw.
    ///
    /// The two draws are independent by design; folding them into one
    /// changes the statistics of the output series.
    fn step(&self, run: &mut RunState, rng: &mut impl Rng) {
        let infection_rate = self.beta * run.frontier.edge_count() as f64;
        let recovery_rate = run.frontier.infected_count() as f64;
        let total_rate = infection_rate + recovery_rate;

        // Waiting-time discretization: crossing the sampling threshold
        // copies the last record forward without changing counts.
        if rng.gen::<f64>() < 1.0 / total_rate {
            let last = *last_record(&run.series);
            run.series.push(last);
        }

        if rng.gen::<f64>() < infection_rate / total_rate {
            self.infect_event(run, rng);
        } else {
            self.recover_event(run, rng);
        }
    }

    /// Infect the susceptible endpoint of a uniformly sampled S-I edge.
    fn infect_event(&self, run: &mut RunState, rng: &mut impl Rng) {
        let (_, target) = run.frontier.sample_edge(rng);
        run.states.set(target, HealthState::Infected);

        // The new node brings its own S-I edges in, and stops being a
        // target for every infected neighbor (including the edge source).
        run.frontier
            .insert(target, si_targets(self.graph, &run.states, target));
        let infected_neighbors: Vec<NodeId> = self
            .graph
            .neighbors(target)
            .iter()
            .copied()
            .filter(|&m| m != target && run.states.get(m) == HealthState::Infected)
            .collect();
        run.frontier.detach_target(target, infected_neighbors);

        let last = last_record_mut(&mut run.series);
        last.infected += 1;
        last.susceptible -= 1;
    }

    /// Recover a uniformly random infected node.
    fn recover_event(&self, run: &mut RunState, rng: &mut impl Rng) {
        let index = rng.gen_range(0..run.frontier.infected_count());
        let node = run.frontier.node_at(index);
        run.states.set(node, HealthState::Recovered);
        run.frontier.remove(node);

        last_record_mut(&mut run.series).infected -= 1;
    }
}

fn validate_proportion(name: &'static str, value: f64) -> Result<(), SirError> {
    if value.is_finite() && (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(SirError::InvalidParameter { name, value })
    }
}

/// Susceptible neighbors of `node`, one entry per connecting edge.
fn si_targets(graph: &impl ContactGraph, states: &StateStore, node: NodeId) -> Vec<NodeId> {
    graph
        .neighbors(node)
        .iter()
        .copied()
        .filter(|&m| states.get(m) == HealthState::Susceptible)
        .collect()
}

fn last_record(series: &[IterationRecord]) -> &IterationRecord {
    series.last().expect("series holds the seeding record")
}

fn last_record_mut(series: &mut [IterationRecord]) -> &mut IterationRecord {
    series.last_mut().expect("series holds the seeding record")
}
