//! The playing agent.
//!
//! An `Agent` owns one `KnowledgeBase` and one RNG. It plays a known-safe
//! cell whenever it has one and otherwise guesses uniformly among cells that
//! are neither played nor known mines.
//!
//! Agents share nothing; run several games in parallel by giving each its own
//! agent.
//!
//! ```
//! use minesweeper_ai::agent::{Agent, Strategy};
//! use minesweeper_ai::core::{BoardConfig, Cell};
//!
//! let config = BoardConfig::new(3, 3, 1).unwrap();
//! let mut agent = Agent::new(&config, 42);
//!
//! // Nothing known yet: the first move is a guess
//! let first = agent.next_move().unwrap();
//! assert_eq!(first.strategy, Strategy::Random);
//!
//! agent.add_knowledge(Cell::new(1, 1), 0).unwrap();
//! assert_eq!(agent.next_move().unwrap().strategy, Strategy::Safe);
//! ```

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{BoardConfig, Cell, GameRng, ObservationError};
use crate::knowledge::KnowledgeBase;

/// How a move was chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Strategy {
    /// Deduced safe by the knowledge base.
    Safe,
    /// Uniform guess among open cells.
    Random,
}

/// A chosen cell and the strategy that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub cell: Cell,
    pub strategy: Strategy,
}

/// Knowledge-based Minesweeper player.
#[derive(Clone, Debug)]
pub struct Agent {
    knowledge: KnowledgeBase,
    rng: GameRng,
}

impl Agent {
    /// Create an agent for `config`, guessing from a stream seeded by `seed`.
    #[must_use]
    pub fn new(config: &BoardConfig, seed: u64) -> Self {
        Self::with_rng(config, GameRng::new(seed))
    }

    /// Create an agent that guesses with the given RNG.
    #[must_use]
    pub fn with_rng(config: &BoardConfig, rng: GameRng) -> Self {
        Self {
            knowledge: KnowledgeBase::for_board(config),
            rng,
        }
    }

    /// The agent's knowledge base.
    #[must_use]
    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    #[must_use]
    pub fn moves_made(&self) -> &FxHashSet<Cell> {
        self.knowledge.moves_made()
    }

    #[must_use]
    pub fn safes(&self) -> &FxHashSet<Cell> {
        self.knowledge.safes()
    }

    #[must_use]
    pub fn mines(&self) -> &FxHashSet<Cell> {
        self.knowledge.mines()
    }

    /// See [`KnowledgeBase::add_knowledge`].
    pub fn add_knowledge(&mut self, cell: Cell, count: usize) -> Result<(), ObservationError> {
        self.knowledge.add_knowledge(cell, count)
    }

    /// See [`KnowledgeBase::mark_mine`].
    pub fn mark_mine(&mut self, cell: Cell) {
        self.knowledge.mark_mine(cell);
    }

    /// See [`KnowledgeBase::mark_safe`].
    pub fn mark_safe(&mut self, cell: Cell) {
        self.knowledge.mark_safe(cell);
    }

    /// Lowest unplayed known-safe cell, if any.
    #[must_use]
    pub fn safe_move(&self) -> Option<Cell> {
        self.knowledge.safe_move()
    }

    /// Uniform choice among cells neither played nor known mines.
    ///
    /// Returns `None` once the board is exhausted.
    pub fn random_move(&mut self) -> Option<Cell> {
        let open = self.knowledge.open_cells();
        self.rng.choose(&open).copied()
    }

    /// Safe move if one is known, otherwise a random move.
    pub fn next_move(&mut self) -> Option<Move> {
        if let Some(cell) = self.safe_move() {
            return Some(Move { cell, strategy: Strategy::Safe });
        }
        self.random_move().map(|cell| Move { cell, strategy: Strategy::Random })
    }
}
