//! Runtime orchestration for the slot machine.
//!
//! This crate wires the timed-event scheduler, the slot machine state machine,
//! and the simulation drivers into a single worker task behind a cloneable
//! [`RuntimeHandle`]. Consumers embed [`Runtime`] to drive spins and subscribe
//! to events.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`machine`] is the state machine; usable synchronously in tests and tools
//! - [`scheduler`] is the virtual-clock timer queue behind the machine
//! - [`simulation`] holds the batch and statistical drivers
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod events;
pub mod machine;
pub mod runtime;
pub mod scheduler;
pub mod simulation;

mod workers;

pub use api::{Result, RuntimeError, RuntimeHandle};
pub use events::{Event, EventBus, MachineEvent, OutcomeEvent, SimulationEvent, Topic};
pub use machine::{
    Control, Controls, MachineError, MachineState, Phase, PrimaryControl, SlotMachine,
    SpinSession,
};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
pub use scheduler::{Scheduler, TimerId};
pub use simulation::{BatchProgress, SimulationReport, SimulationSample};
