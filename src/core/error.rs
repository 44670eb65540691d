//! Error types.
//!
//! Only caller-supplied input can fail. Broken engine invariants are bugs and
//! panic instead of surfacing here.

use thiserror::Error;

use super::Cell;

/// Invalid board configuration.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Board dimensions must be non-zero (got {height} x {width})")]
    EmptyBoard { height: usize, width: usize },

    #[error("Board of {height} x {width} cells is too large to address")]
    BoardTooLarge { height: usize, width: usize },

    #[error("Too many mines: a {height} x {width} board holds at most {max} mines, requested {requested}")]
    TooManyMines {
        height: usize,
        width: usize,
        max: usize,
        requested: usize,
    },

    #[error("Mine {cell} lies outside the {height} x {width} board")]
    MineOutOfBounds {
        cell: Cell,
        height: usize,
        width: usize,
    },

    #[error("Mine layout has {actual} distinct mines, expected {expected}")]
    MineCountMismatch { expected: usize, actual: usize },
}

/// Observation rejected by the knowledge base.
///
/// A rejected observation leaves the knowledge base untouched.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ObservationError {
    #[error("Cell {cell} lies outside the {height} x {width} board")]
    OutOfBounds {
        cell: Cell,
        height: usize,
        width: usize,
    },

    #[error("Cell {cell} is a known mine and cannot be revealed")]
    KnownMine { cell: Cell },

    #[error("Cell {cell} has {neighbors} neighbors but reported {count} nearby mines")]
    ImpossibleCount {
        cell: Cell,
        count: usize,
        neighbors: usize,
    },

    #[error("Cell {cell} reported {count} nearby mines, but known facts allow {min}..={max}")]
    InconsistentCount {
        cell: Cell,
        count: usize,
        min: usize,
        max: usize,
    },

    #[error("Cell {cell} reported {count} nearby mines, which contradicts known facts: {reason}")]
    Contradiction {
        cell: Cell,
        count: usize,
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_messages() {
        let err = ConfigError::TooManyMines {
            height: 2,
            width: 2,
            max: 4,
            requested: 5,
        };
        assert_eq!(
            err.to_string(),
            "Too many mines: a 2 x 2 board holds at most 4 mines, requested 5"
        );
    }

    #[test]
    fn test_observation_error_messages() {
        let err = ObservationError::InconsistentCount {
            cell: Cell::new(1, 1),
            count: 0,
            min: 1,
            max: 3,
        };
        assert_eq!(
            err.to_string(),
            "Cell (1, 1) reported 0 nearby mines, but known facts allow 1..=3"
        );
    }
}
