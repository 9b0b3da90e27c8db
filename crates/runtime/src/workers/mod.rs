//! Worker tasks that back the runtime orchestration.
//!
//! The machine worker is the single owner of the slot machine; every command
//! and timer expiry is serialized through it.

mod machine;

pub use machine::{Command, MachineWorker};
