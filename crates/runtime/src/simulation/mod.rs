//! Simulation drivers.
//!
//! - [`statistical`] evaluates random grids without any animation.
//! - [`batch`] tracks an animated run of back-to-back spins; the machine drives
//!   it through the same scheduler as the reels.
pub mod batch;
pub mod statistical;

pub use batch::{BatchProgress, BatchRun};
pub use statistical::{SimulationReport, SimulationSample};
