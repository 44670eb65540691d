//! # minesweeper-ai
//!
//! A knowledge-based Minesweeper agent.
//!
//! The agent never guesses probabilities. It keeps propositional sentences of
//! the form `{cells} = count` ("exactly `count` of these cells are mines"),
//! resolves each new observation against what it already knows, and plays a
//! cell only when it is certain the cell is safe. When nothing is certain it
//! falls back to a uniform random guess.
//!
//! ## Modules
//!
//! - `core`: Cells, board configuration, deterministic RNG, errors
//! - `knowledge`: Sentences, pairwise subset resolution, the knowledge base
//! - `agent`: Move selection on top of a knowledge base
//! - `board`: The `Board` seam and a randomly mined `Minefield`
//! - `play`: Game loop and multi-game simulation
//!
//! ## Example
//!
//! ```
//! use minesweeper_ai::core::{BoardConfig, Cell};
//! use minesweeper_ai::knowledge::KnowledgeBase;
//!
//! let mut kb = KnowledgeBase::for_board(&BoardConfig::new(1, 2, 1).unwrap());
//! kb.add_knowledge(Cell::new(0, 0), 1).unwrap();
//!
//! // The only neighbor must be the mine
//! assert!(kb.mines().contains(&Cell::new(0, 1)));
//! ```

pub mod core;
pub mod knowledge;
pub mod agent;
pub mod board;
pub mod play;

// Re-export commonly used types
pub use crate::core::{
    Cell, BoardConfig, GameRng, GameRngState,
    ConfigError, ObservationError,
};

pub use crate::knowledge::{Sentence, KnowledgeBase, KnowledgeSnapshot, Deduction, Inferences};

pub use crate::agent::{Agent, Move, Strategy};

pub use crate::board::{Board, Minefield};

pub use crate::play::{
    play_game, play_seeded, replay, simulate, GameReport, Outcome, PlayConfig, PlayStats,
};
