//! Event-driven stochastic SIR epidemic simulation.
//!
//! The engine runs a continuous-time Susceptible-Infected-Recovered process
//! over a borrowed contact network, optionally vaccinating part of the
//! population first. Given the same seed it produces identical results
//! every run.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                       SirEngine                          │
//! │                                                          │
//! │  ┌─────────────────────────────────────────────────────┐ │
//! │  │  VaccinationProtocol (Acquaintance / Random / ...)  │ │
//! │  │  marks round(N*f) nodes Vaccinated before seeding   │ │
//! │  └──────────────────────────┬──────────────────────────┘ │
//! │                             ▼                            │
//! │  ┌─────────────────────────────────────────────────────┐ │
//! │  │  Frontier: infected node -> susceptible targets     │ │
//! │  │  every S-I edge, maintained in lock-step with the   │ │
//! │  │  StateStore; drives event selection                 │ │
//! │  └──────────────────────────┬──────────────────────────┘ │
//! │                             ▼                            │
//! │  ┌─────────────────────────────────────────────────────┐ │
//! │  │  Event loop: time-advance draw, then infect-or-     │ │
//! │  │  recover draw, until no node is infected            │ │
//! │  └─────────────────────────────────────────────────────┘ │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Randomness is always an explicitly passed `&mut impl rand::Rng`; nothing
//! in this crate touches a global generator.

mod engine;
mod error;
mod frontier;
mod state;
mod vaccination;

pub use engine::{IterationRecord, SirEngine};
pub use error::SirError;
pub use frontier::{count_si_edges, Frontier};
pub use state::{HealthState, StateStore};
pub use vaccination::{
    vaccination_quota, Acquaintance, DegreeTargeted, RandomVaccination, VaccinationProtocol,
};
