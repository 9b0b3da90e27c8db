//! Unified error types surfaced by the runtime API.
//!
//! Wraps control misuse, configuration problems, and worker coordination
//! failures so clients can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use slot_core::ConfigError;

use crate::machine::MachineError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error(transparent)]
    Machine(#[from] MachineError),

    #[error("invalid slot configuration")]
    InvalidConfig(#[from] ConfigError),

    #[error("machine worker command channel closed")]
    CommandChannelClosed,

    #[error("machine worker reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("machine worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),
}

impl RuntimeError {
    /// True when the machine refused a control; the worker is still healthy.
    pub fn is_refused(&self) -> bool {
        matches!(self, RuntimeError::Machine(_))
    }
}
