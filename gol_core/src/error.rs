// error.rs - Error type for the simulation core

use thiserror::Error;

/// Errors that can occur when constructing a simulation.
///
/// Construction is the only fallible operation in this crate: every
/// command on a live simulation is defined (or ignored) for every
/// reachable state.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GolError {
    /// Grid side length must be at least 1.
    #[error("invalid grid size: {0}")]
    InvalidSize(usize),
}
