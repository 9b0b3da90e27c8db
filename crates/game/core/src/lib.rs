//! Deterministic slot machine rules and data types shared across clients.
//!
//! `slot-core` defines the canonical reel model, the outcome evaluator, and the
//! timing configuration. Everything here is a pure function of its inputs and
//! an injected [`rand::Rng`], so the runtime, the simulations, and tests all
//! reuse the same rules.
pub mod config;
pub mod confetti;
pub mod error;
pub mod outcome;
pub mod probability;
pub mod state;

pub use config::SlotConfig;
pub use confetti::{ConfettiBurst, ConfettiColor, ConfettiParticle};
pub use error::{ConfigError, SymbolError};
pub use outcome::{Diagonal, Outcome, WinLine, WinType, evaluate};
pub use state::{Millis, Reel, ReelSet, Snapshot, Symbol, Tally};
