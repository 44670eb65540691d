//! Logical sentences about the board.
//!
//! A `Sentence` asserts that exactly `count` of `cells` are mines. Marking a
//! cell as safe or mined removes it from the sentence; a mine also lowers the
//! count, so `count <= cells.len()` holds after every mark.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::Cell;

/// Facts that no mine layout can satisfy together.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{0}")]
pub struct Conflict(pub String);

/// `{cells} = count`.
///
/// Equality is structural: same cell set and count, regardless of the order
/// cells were inserted in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSentence")]
pub struct Sentence {
    cells: FxHashSet<Cell>,
    count: usize,
}

impl Sentence {
    /// Create a new sentence.
    ///
    /// Panics if `count` exceeds the number of distinct cells.
    pub fn new(cells: impl IntoIterator<Item = Cell>, count: usize) -> Self {
        let cells: FxHashSet<Cell> = cells.into_iter().collect();
        assert!(
            count <= cells.len(),
            "Sentence claims {} mines among {} cells",
            count,
            cells.len()
        );
        Self { cells, count }
    }

    #[must_use]
    pub fn cells(&self) -> &FxHashSet<Cell> {
        &self.cells
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.count
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[must_use]
    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// No cells and no mines: says nothing.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.cells.is_empty() && self.count == 0
    }

    /// Every remaining cell is a mine.
    ///
    /// Returns `None` unless `count == cells.len()`.
    #[must_use]
    pub fn known_mines(&self) -> Option<&FxHashSet<Cell>> {
        (self.count == self.cells.len()).then_some(&self.cells)
    }

    /// Every remaining cell is safe.
    ///
    /// Returns `None` unless `count == 0`.
    #[must_use]
    pub fn known_safes(&self) -> Option<&FxHashSet<Cell>> {
        (self.count == 0).then_some(&self.cells)
    }

    /// Remove a known mine, lowering the count with it.
    ///
    /// Returns whether the cell was a member. Panics if the sentence holds no
    /// mines.
    pub fn mark_mine(&mut self, cell: Cell) -> bool {
        self.try_mark_mine(cell)
            .unwrap_or_else(|conflict| panic!("{}", conflict))
    }

    /// Remove a known safe cell.
    ///
    /// Returns whether the cell was a member. Panics if the remaining cells
    /// cannot hold `count` mines.
    pub fn mark_safe(&mut self, cell: Cell) -> bool {
        self.try_mark_safe(cell)
            .unwrap_or_else(|conflict| panic!("{}", conflict))
    }

    /// Like `mark_mine`, but reports a conflict instead of panicking.
    ///
    /// The sentence is unchanged on error.
    pub fn try_mark_mine(&mut self, cell: Cell) -> Result<bool, Conflict> {
        if !self.cells.contains(&cell) {
            return Ok(false);
        }
        if self.count == 0 {
            return Err(Conflict(format!(
                "Mine {} marked in {}, which holds no mines",
                cell, self
            )));
        }
        self.cells.remove(&cell);
        self.count -= 1;
        Ok(true)
    }

    /// Like `mark_safe`, but reports a conflict instead of panicking.
    ///
    /// The sentence is unchanged on error.
    pub fn try_mark_safe(&mut self, cell: Cell) -> Result<bool, Conflict> {
        if !self.cells.contains(&cell) {
            return Ok(false);
        }
        if self.count == self.cells.len() {
            return Err(Conflict(format!(
                "Safe cell {} leaves {} with too few cells for its mines",
                cell, self
            )));
        }
        self.cells.remove(&cell);
        Ok(true)
    }

    /// Check whether every cell of `other` is also in `self`.
    #[must_use]
    pub fn is_superset(&self, other: &Sentence) -> bool {
        self.cells.is_superset(&other.cells)
    }

    /// Cells in row-major order.
    #[must_use]
    pub fn sorted_cells(&self) -> Vec<Cell> {
        let mut cells: Vec<_> = self.cells.iter().copied().collect();
        cells.sort_unstable();
        cells
    }
}

/// Unvalidated wire form of `Sentence`.
#[derive(Deserialize)]
struct RawSentence {
    cells: FxHashSet<Cell>,
    count: usize,
}

impl TryFrom<RawSentence> for Sentence {
    type Error = Conflict;

    fn try_from(raw: RawSentence) -> Result<Self, Self::Error> {
        if raw.count > raw.cells.len() {
            return Err(Conflict(format!(
                "Sentence claims {} mines among {} cells",
                raw.count,
                raw.cells.len()
            )));
        }
        Ok(Self {
            cells: raw.cells,
            count: raw.count,
        })
    }
}

impl std::fmt::Display for Sentence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let cells: Vec<String> = self.sorted_cells().iter().map(ToString::to_string).collect();
        write!(f, "{{{}}} = {}", cells.join(", "), self.count)
    }
}
