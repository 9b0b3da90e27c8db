use rand::Rng;

use super::{Snapshot, Symbol};
use crate::config::SlotConfig;

const VISIBLE: usize = SlotConfig::VISIBLE_PER_REEL;
const REELS: usize = SlotConfig::REEL_COUNT;

/// Visible window of one reel, oldest symbol at index 0.
///
/// Reels are `Copy`; every mutation returns a new value so observers holding
/// an older copy never see a half-applied update.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Reel {
    window: [Symbol; VISIBLE],
}

impl Reel {
    pub const fn new(window: [Symbol; VISIBLE]) -> Self {
        Self { window }
    }

    pub const fn window(&self) -> &[Symbol; VISIBLE] {
        &self.window
    }

    pub fn symbol(&self, row: usize) -> Symbol {
        self.window[row]
    }

    /// Drops the oldest symbol and appends `next` at the end.
    #[must_use]
    pub fn shifted(&self, next: Symbol) -> Self {
        let mut window = [Symbol::ZERO; VISIBLE];
        window[..VISIBLE - 1].copy_from_slice(&self.window[1..]);
        window[VISIBLE - 1] = next;
        Self { window }
    }

    /// One spin step: shift left and append a random symbol.
    #[must_use]
    pub fn spun<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        self.shifted(Symbol::random(rng))
    }

    /// A completely fresh window, used when a reel settles.
    pub fn settled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            window: std::array::from_fn(|_| Symbol::random(rng)),
        }
    }
}

/// The three physical reels, indexed `0..REEL_COUNT`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReelSet {
    reels: [Reel; REELS],
}

impl ReelSet {
    /// All reels showing zeros, the state at mount.
    pub fn zeroed() -> Self {
        Self::default()
    }

    pub const fn from_reels(reels: [Reel; REELS]) -> Self {
        Self { reels }
    }

    pub fn reel(&self, index: usize) -> &Reel {
        &self.reels[index]
    }

    pub fn iter(&self) -> impl Iterator<Item = &Reel> {
        self.reels.iter()
    }

    /// Returns a copy with reel `index` replaced.
    #[must_use]
    pub fn with_reel(&self, index: usize, reel: Reel) -> Self {
        let mut reels = self.reels;
        reels[index] = reel;
        Self { reels }
    }

    /// Freezes the current windows into an evaluator input.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_symbols(std::array::from_fn(|reel| *self.reels[reel].window()))
    }
}

impl From<Snapshot> for ReelSet {
    fn from(snapshot: Snapshot) -> Self {
        Self {
            reels: std::array::from_fn(|reel| Reel::new(snapshot.reel(reel))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn sym(value: u8) -> Symbol {
        Symbol::new(value).unwrap()
    }

    #[test]
    fn shifted_drops_oldest_and_appends() {
        let reel = Reel::new([sym(1), sym(2), sym(3)]);
        let next = reel.shifted(sym(4));
        assert_eq!(next.window(), &[sym(2), sym(3), sym(4)]);
        // The original value is untouched.
        assert_eq!(reel.window(), &[sym(1), sym(2), sym(3)]);
    }

    #[test]
    fn with_reel_replaces_only_target() {
        let set = ReelSet::zeroed();
        let replaced = set.with_reel(1, Reel::new([sym(7); 3]));
        assert_eq!(replaced.reel(0), &Reel::default());
        assert_eq!(replaced.reel(1).window(), &[sym(7); 3]);
        assert_eq!(replaced.reel(2), &Reel::default());
        assert_eq!(set, ReelSet::zeroed());
    }

    #[test]
    fn snapshot_is_reel_major() {
        let set = ReelSet::zeroed()
            .with_reel(0, Reel::new([sym(1), sym(2), sym(3)]))
            .with_reel(2, Reel::new([sym(7), sym(8), sym(9)]));
        let snapshot = set.snapshot();
        assert_eq!(snapshot.get(0, 2), sym(3));
        assert_eq!(snapshot.get(2, 0), sym(7));
        assert_eq!(ReelSet::from(snapshot), set);
    }

    #[test]
    fn settled_is_deterministic_for_seed() {
        let a = Reel::settled(&mut StdRng::seed_from_u64(11));
        let b = Reel::settled(&mut StdRng::seed_from_u64(11));
        assert_eq!(a, b);
    }
}
