// lib.rs - Simulation core for a toroidal Game of Life
//
// The presentation layer (gol_gui) only ever talks to `Simulation`; the
// grid and its cells are owned here and rendered by polling.

pub mod error;
pub mod grid;
pub mod patterns;
pub mod sim;

pub use error::GolError;
pub use grid::{DEFAULT_SIZE, Grid};
pub use patterns::{PATTERNS, Pattern};
pub use sim::{Message, Simulation};
