//! Board coordinates.
//!
//! A `Cell` is a `(row, col)` pair. Cells order row-major, so the smallest
//! cell of a set is the top-left-most one; the agent relies on this to pick
//! safe moves deterministically.
//!
//! ```
//! use minesweeper_ai::core::Cell;
//!
//! let cell = Cell::new(0, 0);
//! let neighbors = cell.neighbors(3, 3);
//! assert_eq!(neighbors.len(), 3);
//! assert!(neighbors.contains(&Cell::new(1, 1)));
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Neighbor list. A cell has at most 8 neighbors, so this never spills.
pub type Neighbors = SmallVec<[Cell; 8]>;

/// A board coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    /// Create a new cell.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Check whether this cell lies on a `height` x `width` grid.
    #[must_use]
    pub const fn in_bounds(self, height: usize, width: usize) -> bool {
        self.row < height && self.col < width
    }

    /// In-bounds cells within one row and column, excluding the cell itself.
    ///
    /// Returned in row-major order.
    #[must_use]
    pub fn neighbors(self, height: usize, width: usize) -> Neighbors {
        let mut out = Neighbors::new();
        let rows = self.row.saturating_sub(1)..=(self.row + 1).min(height.saturating_sub(1));
        for row in rows {
            let cols = self.col.saturating_sub(1)..=(self.col + 1).min(width.saturating_sub(1));
            for col in cols {
                let neighbor = Cell::new(row, col);
                if neighbor != self && neighbor.in_bounds(height, width) {
                    out.push(neighbor);
                }
            }
        }
        out
    }

    /// Iterate every cell of a `height` x `width` grid in row-major order.
    pub fn all(height: usize, width: usize) -> impl Iterator<Item = Cell> {
        (0..height).flat_map(move |row| (0..width).map(move |col| Cell::new(row, col)))
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self::new(row, col)
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
