use std::fmt;

use rand::Rng;

use super::Symbol;
use crate::config::SlotConfig;
use crate::error::SymbolError;

const VISIBLE: usize = SlotConfig::VISIBLE_PER_REEL;
const REELS: usize = SlotConfig::REEL_COUNT;

/// Finalized 3×3 grid indexed `[reel][row]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    cells: [[Symbol; VISIBLE]; REELS],
}

impl Snapshot {
    pub const fn from_symbols(cells: [[Symbol; VISIBLE]; REELS]) -> Self {
        Self { cells }
    }

    /// Builds a grid from raw digits, one inner array per reel.
    pub fn from_reels(reels: [[u8; VISIBLE]; REELS]) -> Result<Self, SymbolError> {
        let mut cells = [[Symbol::ZERO; VISIBLE]; REELS];
        for (reel, column) in reels.iter().enumerate() {
            for (row, value) in column.iter().enumerate() {
                cells[reel][row] = Symbol::new(*value)?;
            }
        }
        Ok(Self { cells })
    }

    /// Builds a grid from raw digits, one inner array per visible row.
    pub fn from_rows(rows: [[u8; REELS]; VISIBLE]) -> Result<Self, SymbolError> {
        let mut cells = [[Symbol::ZERO; VISIBLE]; REELS];
        for (row, line) in rows.iter().enumerate() {
            for (reel, value) in line.iter().enumerate() {
                cells[reel][row] = Symbol::new(*value)?;
            }
        }
        Ok(Self { cells })
    }

    /// Independent uniform draw for every cell.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            cells: std::array::from_fn(|_| std::array::from_fn(|_| Symbol::random(rng))),
        }
    }

    pub fn get(&self, reel: usize, row: usize) -> Symbol {
        self.cells[reel][row]
    }

    pub fn reel(&self, reel: usize) -> [Symbol; VISIBLE] {
        self.cells[reel]
    }

    pub fn row(&self, row: usize) -> [Symbol; REELS] {
        std::array::from_fn(|reel| self.cells[reel][row])
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..VISIBLE {
            if row > 0 {
                write!(f, " / ")?;
            }
            let [a, b, c] = self.row(row);
            write!(f, "{a} {b} {c}")?;
        }
        Ok(())
    }
}
