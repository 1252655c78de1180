//! Outbreak batch simulator.
//!
//! Runs many independent SIR simulations against one contact network and
//! aggregates the resulting time series into summary statistics: peak
//! prevalence, final attack fraction, and their means over the batch.
//!
//! # Example
//!
//! ```ignore
//! use outbreak_simulator::{BatchConfig, BatchRunner};
//! use outbreak_core::Acquaintance;
//!
//! let config = BatchConfig::new(0.4, 0.1).with_runs(500).with_seed(42);
//! let report = BatchRunner::new(&graph, Acquaintance, config).run()?;
//!
//! println!("mean attack fraction: {:.3}", report.mean_attack_fraction());
//! println!("max peak infected:    {}", report.max_peak_infected());
//! ```

pub mod config;
pub mod report;
pub mod runner;

pub use config::BatchConfig;
pub use report::{BatchReport, RunSummary};
pub use runner::BatchRunner;
