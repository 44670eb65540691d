//! Playing games: an `Agent` against a `Board`.
//!
//! - `play_game`: one game until won, lost, or stuck
//! - `play_seeded` / `replay`: a game on a seeded `Minefield`, and again from
//!   its recorded generator state
//! - `simulate`: many seeded games, aggregated into `PlayStats`
//!
//! ```
//! use minesweeper_ai::core::BoardConfig;
//! use minesweeper_ai::play::{simulate, PlayConfig};
//!
//! let config = PlayConfig::new(BoardConfig::beginner()).with_games(3).with_seed(1);
//! let stats = simulate(&config).unwrap();
//! assert_eq!(stats.games, 3);
//! ```

mod config;
mod runner;
mod stats;

pub use config::PlayConfig;
pub use runner::{play_game, play_seeded, replay, simulate, GameReport, Outcome};
pub use stats::PlayStats;
