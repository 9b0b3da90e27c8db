//! Winning-line evaluation.
//!
//! [`evaluate`] is a pure function of a [`Snapshot`]: it never touches a
//! [`Tally`](crate::Tally) and returns the same [`Outcome`] for the same grid.
//! The caller applies side effects exactly once per settle.
use std::fmt;

use strum::Display;

use crate::state::{Snapshot, Symbol};

/// Direction of a diagonal line, named by how it runs from reel 0 to reel 2.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Diagonal {
    /// Top-left to bottom-right (↘).
    Down,
    /// Bottom-left to top-right (↗).
    Up,
}

impl Diagonal {
    pub const fn arrow(self) -> &'static str {
        match self {
            Self::Down => "↘",
            Self::Up => "↗",
        }
    }
}

/// Coarse classification used by the presentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "lowercase")]
pub enum WinType {
    Row,
    #[strum(serialize = "diag")]
    Diagonal,
}

/// One of the five fixed paylines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WinLine {
    Row(u8),
    Diagonal(Diagonal),
}

impl WinLine {
    /// Paylines in evaluation priority: rows top to bottom, then ↘, then ↗.
    pub const PRIORITY: [WinLine; 5] = [
        WinLine::Row(0),
        WinLine::Row(1),
        WinLine::Row(2),
        WinLine::Diagonal(Diagonal::Down),
        WinLine::Diagonal(Diagonal::Up),
    ];

    /// Grid cells `(reel, row)` covered by this line, ordered by reel.
    pub fn cells(self) -> [(usize, usize); 3] {
        match self {
            WinLine::Row(row) => {
                let row = row as usize;
                [(0, row), (1, row), (2, row)]
            }
            WinLine::Diagonal(Diagonal::Down) => [(0, 0), (1, 1), (2, 2)],
            WinLine::Diagonal(Diagonal::Up) => [(0, 2), (1, 1), (2, 0)],
        }
    }

    pub fn contains(self, reel: usize, row: usize) -> bool {
        self.cells().contains(&(reel, row))
    }

    pub const fn win_type(self) -> WinType {
        match self {
            WinLine::Row(_) => WinType::Row,
            WinLine::Diagonal(_) => WinType::Diagonal,
        }
    }

    /// Signed marker: row index for rows, -1 for ↘, -2 for ↗.
    pub const fn marker(self) -> i8 {
        match self {
            WinLine::Row(row) => row as i8,
            WinLine::Diagonal(Diagonal::Down) => -1,
            WinLine::Diagonal(Diagonal::Up) => -2,
        }
    }

    /// Banner text shown under the winner headline.
    pub const fn headline(self) -> &'static str {
        match self {
            WinLine::Row(0) => "Top row matches!",
            WinLine::Row(1) => "Middle row matches!",
            WinLine::Row(_) => "Bottom row matches!",
            WinLine::Diagonal(Diagonal::Down) => "Diagonal (↘) matches!",
            WinLine::Diagonal(Diagonal::Up) => "Diagonal (↗) matches!",
        }
    }

    /// Symbol shared by every cell of the line, if they all agree.
    fn matched_symbol(self, snapshot: &Snapshot) -> Option<Symbol> {
        let [a, b, c] = self.cells().map(|(reel, row)| snapshot.get(reel, row));
        (a == b && b == c).then_some(a)
    }
}

impl fmt::Display for WinLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WinLine::Row(row) => write!(f, "Row {row}"),
            WinLine::Diagonal(diagonal) => write!(f, "Diagonal {}", diagonal.arrow()),
        }
    }
}

/// Result of evaluating one snapshot.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome {
    win: Option<(WinLine, Symbol)>,
}

impl Outcome {
    pub const LOSS: Self = Self { win: None };

    pub const fn win(line: WinLine, symbol: Symbol) -> Self {
        Self {
            win: Some((line, symbol)),
        }
    }

    pub const fn found(&self) -> bool {
        self.win.is_some()
    }

    pub fn win_line(&self) -> Option<WinLine> {
        self.win.map(|(line, _)| line)
    }

    pub fn win_type(&self) -> Option<WinType> {
        self.win_line().map(WinLine::win_type)
    }

    pub fn symbol(&self) -> Option<Symbol> {
        self.win.map(|(_, symbol)| symbol)
    }

    /// Human-readable explanation, e.g. `Row 0 match of symbol 3`.
    pub fn reason(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.win {
            Some((line, symbol)) => write!(f, "{line} match of symbol {symbol}"),
            None => write!(f, "No winning line found"),
        }
    }
}

/// Reports the first matching payline in [`WinLine::PRIORITY`] order.
pub fn evaluate(snapshot: &Snapshot) -> Outcome {
    WinLine::PRIORITY
        .into_iter()
        .find_map(|line| {
            line.matched_symbol(snapshot)
                .map(|symbol| Outcome::win(line, symbol))
        })
        .unwrap_or(Outcome::LOSS)
}
