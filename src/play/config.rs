//! Play configuration parameters.

use serde::{Deserialize, Serialize};

use crate::core::BoardConfig;

/// Configuration for playing one or many games.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlayConfig {
    /// Board to play on.
    pub board: BoardConfig,

    /// Number of games for `simulate`.
    pub games: usize,

    /// Master seed. Each game forks its own generator from it.
    pub seed: u64,

    /// Maximum moves per game (0 = one per cell).
    pub max_moves: usize,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self {
            board: BoardConfig::default(),
            games: 100,
            seed: 42,
            max_moves: 0,
        }
    }
}

impl PlayConfig {
    /// Create a new config for the given board.
    pub fn new(board: BoardConfig) -> Self {
        Self {
            board,
            ..Self::default()
        }
    }

    /// Set the number of games.
    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    /// Set the master seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the per-game move limit.
    pub fn with_max_moves(mut self, max: usize) -> Self {
        self.max_moves = max;
        self
    }

    /// Move limit actually applied to a game.
    ///
    /// Every move reveals a new cell, so a game never needs more moves than
    /// the board has cells.
    pub fn effective_max_moves(&self) -> usize {
        if self.max_moves == 0 {
            self.board.cell_count()
        } else {
            self.max_moves
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PlayConfig::default();
        assert_eq!(config.board, BoardConfig::default());
        assert_eq!(config.games, 100);
        assert_eq!(config.seed, 42);
        assert_eq!(config.effective_max_moves(), 64);
    }

    #[test]
    fn test_builder_pattern() {
        let config = PlayConfig::new(BoardConfig::expert())
            .with_games(5)
            .with_seed(123)
            .with_max_moves(10);

        assert_eq!(config.board.width(), 30);
        assert_eq!(config.games, 5);
        assert_eq!(config.seed, 123);
        assert_eq!(config.effective_max_moves(), 10);
    }

    #[test]
    fn test_serialization() {
        let config = PlayConfig::default().with_seed(9);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: PlayConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.seed, 9);
        assert_eq!(deserialized.board, config.board);
    }
}
