//! The board the agent plays against.
//!
//! The knowledge base never sees the board. A driver asks the board for the
//! neighbor count of each revealed cell and forwards it as an observation.
//! `Board` is that seam; `Minefield` is the standard randomly mined board.

mod minefield;

pub use minefield::Minefield;

use crate::core::Cell;

/// Ground truth for one game.
///
/// ## Implementation Notes
///
/// - `is_mine` and `nearby_mines` are only called with in-bounds cells
/// - `nearby_mines` counts the up-to-8 neighbors, never the cell itself
/// - `won` must not hold while a non-mine is flagged
pub trait Board {
    fn height(&self) -> usize;

    fn width(&self) -> usize;

    /// Check whether `cell` holds a mine.
    fn is_mine(&self, cell: Cell) -> bool;

    /// Number of mines adjacent to `cell`.
    fn nearby_mines(&self, cell: Cell) -> usize {
        cell.neighbors(self.height(), self.width())
            .into_iter()
            .filter(|&n| self.is_mine(n))
            .count()
    }

    /// Flag `cell` as a suspected mine.
    fn flag(&mut self, cell: Cell);

    /// Every mine flagged and nothing else.
    fn won(&self) -> bool;
}
