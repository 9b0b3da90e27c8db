//! Slot machine constants and tunable timing parameters.
use crate::error::ConfigError;
use crate::state::Millis;

/// Timing configuration for the spin, stop, and simulation schedules.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotConfig {
    /// Interval between spin ticks on each reel.
    pub spin_interval: Millis,
    /// Delay after which a spin stops on its own.
    pub auto_stop_delay: Millis,
    /// Per-reel offset of the stop sequence; reel `i` starts at `i * reel_stagger`.
    pub reel_stagger: Millis,
    /// Durations of the slow-down steps before a reel settles.
    pub deceleration_steps: Vec<Millis>,
    /// Delay between the last reel settling and the outcome evaluation.
    pub evaluation_delay: Millis,
    /// Safety margin added to the estimated duration of one batch spin.
    pub batch_buffer: Millis,
    /// Pause between two batch spins.
    pub batch_pause: Millis,
}

impl SlotConfig {
    // ===== compile-time constants =====
    pub const REEL_COUNT: usize = 3;
    pub const VISIBLE_PER_REEL: usize = 3;
    pub const SYMBOL_COUNT: u8 = 10;
    pub const CONFETTI_COUNT: usize = 50;
    /// Upper bound of a confetti particle's start delay, in seconds.
    pub const CONFETTI_MAX_DELAY: f32 = 0.5;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_SPIN_INTERVAL: Millis = Millis(50);
    pub const DEFAULT_AUTO_STOP_DELAY: Millis = Millis(1500);
    pub const DEFAULT_REEL_STAGGER: Millis = Millis(600);
    pub const DEFAULT_DECELERATION_STEPS: [Millis; 4] =
        [Millis(100), Millis(150), Millis(200), Millis(250)];
    pub const DEFAULT_EVALUATION_DELAY: Millis = Millis(100);
    pub const DEFAULT_BATCH_BUFFER: Millis = Millis(400);
    pub const DEFAULT_BATCH_PAUSE: Millis = Millis(200);

    pub fn new() -> Self {
        Self {
            spin_interval: Self::DEFAULT_SPIN_INTERVAL,
            auto_stop_delay: Self::DEFAULT_AUTO_STOP_DELAY,
            reel_stagger: Self::DEFAULT_REEL_STAGGER,
            deceleration_steps: Self::DEFAULT_DECELERATION_STEPS.to_vec(),
            evaluation_delay: Self::DEFAULT_EVALUATION_DELAY,
            batch_buffer: Self::DEFAULT_BATCH_BUFFER,
            batch_pause: Self::DEFAULT_BATCH_PAUSE,
        }
    }

    /// Rejects configurations that would spin forever or reorder reels.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.spin_interval == Millis::ZERO {
            return Err(ConfigError::ZeroSpinInterval);
        }
        if self.reel_stagger == Millis::ZERO {
            return Err(ConfigError::ZeroReelStagger);
        }
        if let Some((index, duration)) = self
            .deceleration_steps
            .iter()
            .enumerate()
            .find(|(_, step)| **step == Millis::ZERO)
        {
            return Err(ConfigError::ZeroDecelerationStep {
                index,
                duration: *duration,
            });
        }
        Ok(())
    }

    /// Offset of reel `reel`'s stop sequence relative to the stop request.
    pub fn reel_base(&self, reel: usize) -> Millis {
        Millis(self.reel_stagger.0 * reel as u64)
    }

    /// Sum of all deceleration steps.
    pub fn deceleration_total(&self) -> Millis {
        self.deceleration_steps
            .iter()
            .fold(Millis::ZERO, |acc, step| acc + *step)
    }

    /// Offset of the settle for `reel` relative to the stop request.
    pub fn settle_offset(&self, reel: usize) -> Millis {
        self.reel_base(reel) + self.deceleration_total()
    }

    /// Time from a stop request until the outcome is evaluated.
    pub fn stop_sequence_duration(&self) -> Millis {
        self.settle_offset(Self::REEL_COUNT - 1) + self.evaluation_delay
    }

    /// Worst-case wall time of one unattended spin, used to pace batch runs.
    pub fn estimated_spin_duration(&self) -> Millis {
        self.auto_stop_delay
            + self.reel_base(Self::REEL_COUNT - 1)
            + self.deceleration_total()
            + self.batch_buffer
    }
}

impl Default for SlotConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_schedule_offsets() {
        let config = SlotConfig::default();
        assert_eq!(config.deceleration_total(), Millis(700));
        assert_eq!(config.reel_base(2), Millis(1200));
        assert_eq!(config.settle_offset(0), Millis(700));
        assert_eq!(config.settle_offset(2), Millis(1900));
        assert_eq!(config.stop_sequence_duration(), Millis(2000));
        assert_eq!(config.estimated_spin_duration(), Millis(3800));
    }

    #[test]
    fn validate_rejects_zero_intervals() {
        let mut config = SlotConfig::default();
        config.spin_interval = Millis::ZERO;
        assert_eq!(config.validate(), Err(ConfigError::ZeroSpinInterval));

        let mut config = SlotConfig::default();
        config.reel_stagger = Millis::ZERO;
        assert_eq!(config.validate(), Err(ConfigError::ZeroReelStagger));

        let mut config = SlotConfig::default();
        config.deceleration_steps[2] = Millis::ZERO;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroDecelerationStep { index: 2, .. })
        ));

        assert!(SlotConfig::default().validate().is_ok());
    }

    #[test]
    fn empty_deceleration_settles_at_base() {
        let mut config = SlotConfig::default();
        config.deceleration_steps.clear();
        assert!(config.validate().is_ok());
        assert_eq!(config.settle_offset(1), Millis(600));
    }
}
