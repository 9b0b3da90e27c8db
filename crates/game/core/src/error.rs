//! Error types for slot-core.
//!
//! The rules themselves cannot fail: every draw comes from a fixed finite
//! symbol set. The only rejected inputs are out-of-range digits supplied from
//! outside and timing configurations that would break reel ordering.
use thiserror::Error;

use crate::state::Millis;

/// A digit outside `0..SYMBOL_COUNT` was supplied where a [`Symbol`](crate::Symbol) is required.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum SymbolError {
    #[error("symbol {value} is out of range (expected 0..{limit})")]
    OutOfRange { value: u8, limit: u8 },
}

/// Invalid timing configuration.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("spin interval must be greater than zero")]
    ZeroSpinInterval,

    #[error("reel stagger must be greater than zero so reels settle in order")]
    ZeroReelStagger,

    #[error("deceleration step {index} is {duration}, steps must be non-zero")]
    ZeroDecelerationStep { index: usize, duration: Millis },
}
