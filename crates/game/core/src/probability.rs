//! Closed-form win probability.
//!
//! The five paylines overlap (the diagonals share the centre cell with row 1
//! and each other, and touch rows 0 and 2 at the corners), so the chance that
//! at least one line matches is computed by inclusion–exclusion over every
//! non-empty subset of lines. For a subset, merging the cells of its lines
//! leaves `k` independent groups, and exactly `SYMBOL_COUNT^k` grids make all
//! of those lines monochrome.
use crate::config::SlotConfig;
use crate::outcome::WinLine;

const CELLS: usize = SlotConfig::REEL_COUNT * SlotConfig::VISIBLE_PER_REEL;
const LINES: usize = WinLine::PRIORITY.len();

/// Number of distinct grids.
pub fn total_grid_count() -> u64 {
    (SlotConfig::SYMBOL_COUNT as u64).pow(CELLS as u32)
}

/// Number of grids on which at least one payline matches.
pub fn winning_grid_count() -> u64 {
    let symbols = SlotConfig::SYMBOL_COUNT as i128;
    let mut count: i128 = 0;

    for mask in 1u32..(1 << LINES) {
        let mut groups = CellGroups::new();
        for (index, line) in WinLine::PRIORITY.iter().enumerate() {
            if mask & (1 << index) != 0 {
                let [first, rest @ ..] = line.cells().map(cell_index);
                for cell in rest {
                    groups.union(first, cell);
                }
            }
        }

        let grids = symbols.pow(groups.count() as u32);
        if mask.count_ones() % 2 == 1 {
            count += grids;
        } else {
            count -= grids;
        }
    }

    count as u64
}

/// Exact probability that a uniformly random grid wins.
pub fn win_probability() -> f64 {
    winning_grid_count() as f64 / total_grid_count() as f64
}

fn cell_index((reel, row): (usize, usize)) -> usize {
    reel * SlotConfig::VISIBLE_PER_REEL + row
}

/// Union-find over the nine grid cells.
struct CellGroups {
    parent: [usize; CELLS],
}

impl CellGroups {
    fn new() -> Self {
        Self {
            parent: std::array::from_fn(|cell| cell),
        }
    }

    fn find(&mut self, cell: usize) -> usize {
        let mut root = cell;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut current = cell;
        while self.parent[current] != root {
            let next = self.parent[current];
            self.parent[current] = root;
            current = next;
        }
        root
    }

    fn union(&mut self, a: usize, b: usize) {
        let (root_a, root_b) = (self.find(a), self.find(b));
        if root_a != root_b {
            self.parent[root_b] = root_a;
        }
    }

    fn count(&mut self) -> usize {
        (0..CELLS).filter(|&cell| self.find(cell) == cell).count()
    }
}
