//! Frontend configuration structures and loaders.
//!
//! This module contains UI-specific configuration that is shared across
//! different frontend implementations (CLI, GUI, etc.).

use std::env;

/// Frontend-specific configuration.
#[derive(Clone, Debug, Default)]
pub struct FrontendConfig {
    pub messages: MessageConfig,
    pub simulation: SimulationConfig,
}

impl FrontendConfig {
    pub const fn new(messages: MessageConfig, simulation: SimulationConfig) -> Self {
        Self {
            messages,
            simulation,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `CLI_MESSAGE_CAPACITY` - Message log capacity (default: 64)
    /// - `SLOT_BATCH_SPINS` - Spins per animated batch (default: 20)
    /// - `SLOT_MATH_SPINS` - Grids per math simulation (default: 20)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>("CLI_MESSAGE_CAPACITY") {
            config.messages.capacity = capacity.max(1);
        }
        if let Some(count) = read_env::<u32>("SLOT_BATCH_SPINS") {
            config.simulation.batch_spins = count.max(1);
        }
        if let Some(count) = read_env::<u64>("SLOT_MATH_SPINS") {
            config.simulation.math_spins = count.max(1);
        }

        config
    }
}

#[derive(Clone, Debug)]
pub struct MessageConfig {
    pub capacity: usize,
}

impl Default for MessageConfig {
    fn default() -> Self {
        Self { capacity: 64 }
    }
}

/// Counts used by the simulation controls.
#[derive(Clone, Debug)]
pub struct SimulationConfig {
    pub batch_spins: u32,
    pub math_spins: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            batch_spins: 20,
            math_spins: 20,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
