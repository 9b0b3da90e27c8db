//! Client runtime configuration structures and loaders.
use std::env;

use slot_core::{Millis, SlotConfig};

/// Configuration required to bootstrap a client runtime.
#[derive(Clone, Debug, Default)]
pub struct ClientConfig {
    pub channels: ChannelConfig,
    pub slot: SlotConfig,
    /// Fixed RNG seed for reproducible sessions.
    pub seed: Option<u64>,
    /// Names the log file; generated from the clock when unset.
    pub session_id: Option<String>,
}

impl ClientConfig {
    pub fn new(channels: ChannelConfig, slot: SlotConfig) -> Self {
        Self {
            channels,
            slot,
            seed: None,
            session_id: None,
        }
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SLOT_SEED` - RNG seed (default: OS entropy)
    /// - `SLOT_SESSION_ID` - Session identifier for log files (default: auto-generated)
    /// - `SLOT_SPIN_INTERVAL_MS` - Spin tick interval (default: 50)
    /// - `SLOT_AUTO_STOP_MS` - Auto-stop delay (default: 1500)
    /// - `SLOT_REEL_STAGGER_MS` - Per-reel stop offset (default: 600)
    /// - `SLOT_EVALUATION_DELAY_MS` - Delay before evaluating (default: 100)
    /// - `SLOT_COMMAND_BUFFER` - Command queue size (default: 32)
    /// - `SLOT_EVENT_BUFFER` - Event channel capacity per topic (default: 100)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(capacity) = read_env::<usize>("SLOT_COMMAND_BUFFER") {
            config.channels.command_buffer = capacity.max(1);
        }
        if let Some(capacity) = read_env::<usize>("SLOT_EVENT_BUFFER") {
            config.channels.event_buffer = capacity.max(1);
        }

        if let Some(ms) = read_env::<u64>("SLOT_SPIN_INTERVAL_MS") {
            config.slot.spin_interval = Millis(ms);
        }
        if let Some(ms) = read_env::<u64>("SLOT_AUTO_STOP_MS") {
            config.slot.auto_stop_delay = Millis(ms);
        }
        if let Some(ms) = read_env::<u64>("SLOT_REEL_STAGGER_MS") {
            config.slot.reel_stagger = Millis(ms);
        }
        if let Some(ms) = read_env::<u64>("SLOT_EVALUATION_DELAY_MS") {
            config.slot.evaluation_delay = Millis(ms);
        }

        config.seed = read_env::<u64>("SLOT_SEED");
        config.session_id = env::var("SLOT_SESSION_ID").ok();

        config
    }

    pub fn runtime_config(&self) -> runtime::RuntimeConfig {
        runtime::RuntimeConfig {
            slot: self.slot.clone(),
            seed: self.seed,
            event_buffer_size: self.channels.event_buffer,
            command_buffer_size: self.channels.command_buffer,
        }
    }
}

#[derive(Clone, Debug)]
pub struct ChannelConfig {
    pub command_buffer: usize,
    pub event_buffer: usize,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            command_buffer: 32,
            event_buffer: 100,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
