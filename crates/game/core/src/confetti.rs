//! Confetti particles spawned on a win.
use arrayvec::ArrayVec;
use rand::Rng;
use strum::{EnumCount, EnumIter, IntoEnumIterator};

use crate::config::SlotConfig;

/// Fixed five-color confetti palette.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumCount, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConfettiColor {
    Magenta,
    Blue,
    Green,
    Amber,
    Violet,
}

impl ConfettiColor {
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let index = rng.gen_range(0..Self::COUNT);
        Self::iter().nth(index).unwrap_or(Self::Magenta)
    }
}

/// One decorative particle.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConfettiParticle {
    pub id: u16,
    /// Horizontal position as a percentage of the widget width, `0..100`.
    pub left: f32,
    pub color: ConfettiColor,
    /// Start delay of the fall animation in seconds, `0..0.5`.
    pub delay: f32,
}

pub type ConfettiBurst = ArrayVec<ConfettiParticle, { SlotConfig::CONFETTI_COUNT }>;

/// Generates a full burst of particles.
pub fn burst<R: Rng + ?Sized>(rng: &mut R) -> ConfettiBurst {
    (0..SlotConfig::CONFETTI_COUNT as u16)
        .map(|id| ConfettiParticle {
            id,
            left: rng.gen_range(0.0..100.0),
            color: ConfettiColor::random(rng),
            delay: rng.gen_range(0.0..SlotConfig::CONFETTI_MAX_DELAY),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn burst_fills_palette_and_ranges() {
        let mut rng = StdRng::seed_from_u64(3);
        let particles = burst(&mut rng);
        assert_eq!(particles.len(), SlotConfig::CONFETTI_COUNT);
        assert!(particles.iter().all(|p| (0.0..100.0).contains(&p.left)));
        assert!(particles.iter().all(|p| (0.0..0.5).contains(&p.delay)));
        assert!(
            particles
                .iter()
                .enumerate()
                .all(|(index, p)| p.id as usize == index)
        );
    }

    #[test]
    fn random_color_reaches_all_variants() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut seen = [false; ConfettiColor::COUNT];
        for _ in 0..500 {
            seen[ConfettiColor::random(&mut rng) as usize] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
    }
}
