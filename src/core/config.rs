//! Board configuration.
//!
//! `BoardConfig` fixes the grid dimensions and mine count for one game. The
//! knowledge base only needs `height` and `width`; the minefield also needs
//! `mines`.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;

/// Validated board dimensions and mine count.
///
/// Deserializing runs the same validation as `BoardConfig::new`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoardConfig")]
pub struct BoardConfig {
    height: usize,
    width: usize,
    mines: usize,
}

impl BoardConfig {
    /// Create a new board configuration.
    ///
    /// Fails when either dimension is zero, when the cell count does not fit
    /// in `usize`, or when `mines` exceeds the cell count.
    pub fn new(height: usize, width: usize, mines: usize) -> Result<Self, ConfigError> {
        if height == 0 || width == 0 {
            return Err(ConfigError::EmptyBoard { height, width });
        }
        let max = height
            .checked_mul(width)
            .ok_or(ConfigError::BoardTooLarge { height, width })?;
        if mines > max {
            return Err(ConfigError::TooManyMines {
                height,
                width,
                max,
                requested: mines,
            });
        }
        Ok(Self { height, width, mines })
    }

    /// 9x9 with 10 mines.
    #[must_use]
    pub const fn beginner() -> Self {
        Self { height: 9, width: 9, mines: 10 }
    }

    /// 16x16 with 40 mines.
    #[must_use]
    pub const fn intermediate() -> Self {
        Self { height: 16, width: 16, mines: 40 }
    }

    /// 16x30 with 99 mines.
    #[must_use]
    pub const fn expert() -> Self {
        Self { height: 16, width: 30, mines: 99 }
    }

    /// Same dimensions, different mine count.
    pub fn with_mines(self, mines: usize) -> Result<Self, ConfigError> {
        Self::new(self.height, self.width, mines)
    }

    #[must_use]
    pub const fn height(&self) -> usize {
        self.height
    }

    #[must_use]
    pub const fn width(&self) -> usize {
        self.width
    }

    #[must_use]
    pub const fn mines(&self) -> usize {
        self.mines
    }

    /// Total number of cells.
    #[must_use]
    pub const fn cell_count(&self) -> usize {
        self.height * self.width
    }
}

/// Unvalidated wire form of `BoardConfig`.
#[derive(Deserialize)]
struct RawBoardConfig {
    height: usize,
    width: usize,
    mines: usize,
}

impl TryFrom<RawBoardConfig> for BoardConfig {
    type Error = ConfigError;

    fn try_from(raw: RawBoardConfig) -> Result<Self, Self::Error> {
        Self::new(raw.height, raw.width, raw.mines)
    }
}

impl Default for BoardConfig {
    /// 8x8 with 8 mines.
    fn default() -> Self {
        Self { height: 8, width: 8, mines: 8 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = BoardConfig::default();
        assert_eq!(config.height(), 8);
        assert_eq!(config.width(), 8);
        assert_eq!(config.mines(), 8);
        assert_eq!(config.cell_count(), 64);
    }

    #[test]
    fn test_presets() {
        assert_eq!(BoardConfig::beginner().mines(), 10);
        assert_eq!(BoardConfig::intermediate().cell_count(), 256);
        assert_eq!(BoardConfig::expert().width(), 30);
    }

    #[test]
    fn test_rejects_empty_board() {
        assert_eq!(
            BoardConfig::new(0, 5, 0),
            Err(ConfigError::EmptyBoard { height: 0, width: 5 })
        );
    }

    #[test]
    fn test_rejects_too_many_mines() {
        let err = BoardConfig::new(2, 3, 7).unwrap_err();
        assert_eq!(
            err,
            ConfigError::TooManyMines {
                height: 2,
                width: 3,
                max: 6,
                requested: 7,
            }
        );

        // Fully mined is allowed
        assert!(BoardConfig::new(2, 3, 6).is_ok());
    }

    #[test]
    fn test_rejects_overflowing_dimensions() {
        assert_eq!(
            BoardConfig::new(usize::MAX, 2, 0),
            Err(ConfigError::BoardTooLarge {
                height: usize::MAX,
                width: 2,
            })
        );
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: BoardConfig = serde_json::from_str(r#"{"height":2,"width":3,"mines":6}"#).unwrap();
        assert_eq!(ok, BoardConfig::new(2, 3, 6).unwrap());

        let err = serde_json::from_str::<BoardConfig>(r#"{"height":2,"width":3,"mines":7}"#)
            .unwrap_err();
        assert!(err.to_string().contains("Too many mines"), "{}", err);

        assert!(serde_json::from_str::<BoardConfig>(r#"{"height":0,"width":3,"mines":0}"#).is_err());
    }

    #[test]
    fn test_with_mines() {
        let config = BoardConfig::beginner().with_mines(3).unwrap();
        assert_eq!(config.height(), 9);
        assert_eq!(config.mines(), 3);
        assert!(BoardConfig::beginner().with_mines(82).is_err());
    }

    #[test]
    fn test_serialization() {
        let config = BoardConfig::expert();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: BoardConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }
}
