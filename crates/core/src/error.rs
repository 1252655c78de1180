//! Error types for the simulation engine.

use thiserror::Error;

/// Errors reported by [`crate::SirEngine`].
///
/// Both variants are fatal: `InvalidParameter` fires at construction before
/// any simulation state exists, `EmptyGraph` at seeding time. Everything
/// else the engine could get wrong is an internal invariant and panics
/// rather than surfacing as a handled error path.
#[derive(Debug, Error, PartialEq)]
pub enum SirError {
    /// A rate or fraction parameter is outside `[0, 1]`.
    #[error("invalid parameter {name}: {value} is not a proportion (0 <= {name} <= 1)")]
    InvalidParameter {
        /// Parameter name (`"beta"` or `"f"`).
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// The graph has no nodes, so no infection can be seeded.
    #[error("cannot seed an infection in an empty graph")]
    EmptyGraph,
}
