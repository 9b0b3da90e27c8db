use std::fmt;

use rand::Rng;

use crate::config::SlotConfig;
use crate::error::SymbolError;

/// A single reel digit in `0..SlotConfig::SYMBOL_COUNT`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Symbol(u8);

impl Symbol {
    pub const ZERO: Self = Self(0);

    pub fn new(value: u8) -> Result<Self, SymbolError> {
        if value < SlotConfig::SYMBOL_COUNT {
            Ok(Self(value))
        } else {
            Err(SymbolError::OutOfRange {
                value,
                limit: SlotConfig::SYMBOL_COUNT,
            })
        }
    }

    /// Draws a symbol uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.gen_range(0..SlotConfig::SYMBOL_COUNT))
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Symbol {
    type Error = SymbolError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn rejects_out_of_range_digits() {
        assert_eq!(Symbol::new(9).map(Symbol::value), Ok(9));
        assert_eq!(
            Symbol::new(10),
            Err(SymbolError::OutOfRange {
                value: 10,
                limit: 10
            })
        );
    }

    #[test]
    fn random_draws_cover_every_digit() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; SlotConfig::SYMBOL_COUNT as usize];
        for _ in 0..1_000 {
            seen[Symbol::random(&mut rng).value() as usize] = true;
        }
        assert!(seen.iter().all(|hit| *hit));
    }
}
