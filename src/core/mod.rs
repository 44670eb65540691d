//! Core types: cells, board configuration, RNG, errors.
//!
//! Everything here is independent of the inference engine and shared by the
//! knowledge base, the agent, and the board.

pub mod cell;
pub mod config;
pub mod error;
pub mod rng;

pub use cell::{Cell, Neighbors};
pub use config::BoardConfig;
pub use error::{ConfigError, ObservationError};
pub use rng::{GameRng, GameRngState};
