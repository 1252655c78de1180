//! Configuration types for batch runs.

use serde::{Deserialize, Serialize};

/// Configuration for a batch of simulation runs.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Number of independent runs to execute.
    pub num_runs: usize,

    /// Transmission rate per S-I edge.
    pub beta: f64,

    /// Fraction of nodes to vaccinate before seeding each run.
    pub f: f64,

    /// Random seed for the whole batch.
    pub seed: u64,
}

impl BatchConfig {
    /// Create a batch configuration with the given epidemic parameters.
    pub fn new(beta: f64, f: f64) -> Self {
        Self {
            num_runs: 100,
            beta,
            f,
            seed: 12345,
        }
    }

    /// Set the number of runs.
    pub fn with_runs(mut self, num_runs: usize) -> Self {
        self.num_runs = num_runs;
        self
    }

    /// Set the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self::new(0.5, 0.0)
    }
}
