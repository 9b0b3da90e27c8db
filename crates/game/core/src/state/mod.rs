//! Reel state representation.
//!
//! The machine keeps a [`ReelSet`] that is replaced wholesale on every update;
//! the evaluator only ever sees an immutable [`Snapshot`] copied out of it.
mod reel;
mod snapshot;
mod symbol;
mod tally;
mod time;

pub use reel::{Reel, ReelSet};
pub use snapshot::Snapshot;
pub use symbol::Symbol;
pub use tally::Tally;
pub use time::Millis;
