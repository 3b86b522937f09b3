use std::io::Write;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::numeric::NumericValue;
use crate::path::{GridPath, CELL_COUNT, GRID_SIZE};
use crate::sequence::Entry;

/// Filler numbers for cells no token reaches are drawn from `1..=MAX_FILLER`.
const MAX_FILLER: i64 = 20;

/// Width of one rendered cell.
const CELL_WIDTH: usize = 6;

/// A single board square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub entry: Option<Entry>,
    /// Position along the generated path, for path cells.
    pub path_index: Option<usize>,
    /// Cleared by a spare-cell removal.
    pub removed: bool,
}

impl Cell {
    pub fn is_on_path(&self) -> bool {
        self.path_index.is_some()
    }

    /// The token a player sees, `None` once removed.
    pub fn visible_entry(&self) -> Option<Entry> {
        if self.removed {
            None
        } else {
            self.entry
        }
    }
}

/// The 10×10 board with tokens laid out for one round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>,
}

impl Default for Board {
    fn default() -> Self {
        Self {
            cells: vec![Cell::default(); CELL_COUNT],
        }
    }
}

impl Board {
    /// Lays `entries` out for `path`.
    ///
    /// Entry `i` goes to path cell `i`. Entries past the end of the path are
    /// shuffled over the remaining empty cells, and any cell still empty gets
    /// a random filler number.
    pub fn populate<R: Rng>(path: &GridPath, entries: &[Entry], rng: &mut R) -> Self {
        let mut board = Self::default();
        for (position, coord) in path.cells().iter().enumerate() {
            let cell = &mut board.cells[coord.index()];
            cell.path_index = Some(position);
            cell.entry = entries.get(position).copied();
        }

        let mut spare_entries: Vec<Entry> = entries.iter().skip(path.len()).copied().collect();
        spare_entries.shuffle(rng);
        let mut empty: Vec<usize> = (0..CELL_COUNT)
            .filter(|&index| board.cells[index].entry.is_none())
            .collect();
        empty.shuffle(rng);

        let mut spare_entries = spare_entries.into_iter();
        for index in empty {
            let entry = spare_entries
                .next()
                .unwrap_or_else(|| Entry::Number(NumericValue::Integer(rng.gen_range(1..=MAX_FILLER))));
            board.cells[index].entry = Some(entry);
        }
        board
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn cell(&self, index: usize) -> Option<&Cell> {
        self.cells.get(index)
    }

    /// Visible tokens by cell index, as the validator reads them.
    pub fn grid_entries(&self) -> Vec<Option<Entry>> {
        self.cells.iter().map(Cell::visible_entry).collect()
    }

    /// Off-path cells that are still shown.
    pub fn spare_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.is_on_path() && !cell.removed)
            .map(|(index, _)| index)
            .collect()
    }

    /// Clears `ceil(share × spare)` random spare cells and returns their
    /// indices. `share` is clamped to `0.0..=1.0`.
    pub fn remove_spare_cells<R: Rng>(&mut self, share: f64, rng: &mut R) -> Vec<usize> {
        let mut spare = self.spare_cells();
        let share = share.clamp(0.0, 1.0);
        // Bounded by the spare count, the cast is lossless.
        let count = (spare.len() as f64 * share).ceil() as usize;
        spare.shuffle(rng);
        spare.truncate(count);
        for &index in &spare {
            self.cells[index].removed = true;
        }
        spare.sort_unstable();
        spare
    }

    /// Renders the board as text, one row per line. Removed cells print as
    /// `.`; with `reveal_path` set, path cells are wrapped in brackets.
    pub fn write_to(&self, writer: &mut dyn Write, reveal_path: bool) -> std::io::Result<()> {
        for row in self.cells.chunks(GRID_SIZE) {
            let mut line = String::with_capacity(GRID_SIZE * CELL_WIDTH);
            for cell in row {
                let text = match cell.visible_entry() {
                    Some(entry) if reveal_path && cell.is_on_path() => format!("[{}]", entry),
                    Some(entry) => entry.to_string(),
                    None => ".".to_string(),
                };
                line.push_str(&format!("{:>width$}", text, width = CELL_WIDTH));
            }
            writeln!(writer, "{}", line.trim_end())?;
        }
        Ok(())
    }
}
