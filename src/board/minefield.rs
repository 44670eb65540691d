//! A rectangular minefield with flagging.

use rustc_hash::FxHashSet;

use crate::core::{BoardConfig, Cell, ConfigError, GameRng};

use super::Board;

/// Mine layout plus the cells the player has flagged.
///
/// The game is won once the flagged cells are exactly the mines.
#[derive(Clone, Debug)]
pub struct Minefield {
    config: BoardConfig,
    board: Vec<bool>,
    mines: FxHashSet<Cell>,
    flagged: FxHashSet<Cell>,
}

impl Minefield {
    /// Place `config.mines()` mines uniformly at random.
    #[must_use]
    pub fn new(config: BoardConfig, rng: &mut GameRng) -> Self {
        let picks = rng.sample_indices(config.cell_count(), config.mines());
        let mines = picks
            .into_iter()
            .map(|index| Cell::new(index / config.width(), index % config.width()));
        Self::build(config, mines)
    }

    /// Use a fixed mine layout.
    ///
    /// Fails if a mine lies off the board or the number of distinct mines
    /// differs from `config.mines()`.
    pub fn from_mines(
        config: BoardConfig,
        mines: impl IntoIterator<Item = Cell>,
    ) -> Result<Self, ConfigError> {
        let mines: FxHashSet<Cell> = mines.into_iter().collect();
        if let Some(&cell) = mines
            .iter()
            .find(|cell| !cell.in_bounds(config.height(), config.width()))
        {
            return Err(ConfigError::MineOutOfBounds {
                cell,
                height: config.height(),
                width: config.width(),
            });
        }
        if mines.len() != config.mines() {
            return Err(ConfigError::MineCountMismatch {
                expected: config.mines(),
                actual: mines.len(),
            });
        }
        Ok(Self::build(config, mines))
    }

    fn build(config: BoardConfig, mines: impl IntoIterator<Item = Cell>) -> Self {
        let mut board = vec![false; config.cell_count()];
        let mut set = FxHashSet::default();
        for cell in mines {
            board[cell.row * config.width() + cell.col] = true;
            set.insert(cell);
        }
        Self {
            config,
            board,
            mines: set,
            flagged: FxHashSet::default(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    /// Every mine on the board.
    #[must_use]
    pub fn mines(&self) -> &FxHashSet<Cell> {
        &self.mines
    }

    #[must_use]
    pub fn flagged(&self) -> &FxHashSet<Cell> {
        &self.flagged
    }
}

impl Board for Minefield {
    fn height(&self) -> usize {
        self.config.height()
    }

    fn width(&self) -> usize {
        self.config.width()
    }

    fn is_mine(&self, cell: Cell) -> bool {
        debug_assert!(
            cell.in_bounds(self.height(), self.width()),
            "Cell {} lies outside the board",
            cell
        );
        self.board[cell.row * self.config.width() + cell.col]
    }

    fn flag(&mut self, cell: Cell) {
        self.flagged.insert(cell);
    }

    fn won(&self) -> bool {
        self.flagged == self.mines
    }
}
