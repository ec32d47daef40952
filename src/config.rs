use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::types::Player;

pub const DEFAULT_BOARD_SIZE: usize = 8;

/// When a game counts as finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TerminationRule {
    /// Only a completely filled board ends the game.
    BoardFull,
    /// The game ends as soon as neither player has a legal move.
    #[default]
    NoLegalMoves,
}

/// Engine configuration supplied at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub height: usize,
    pub width: usize,
    pub first_player: Player,
    pub termination: TerminationRule,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            height: DEFAULT_BOARD_SIZE,
            width: DEFAULT_BOARD_SIZE,
            first_player: Player::Red,
            termination: TerminationRule::default(),
        }
    }
}

impl GameConfig {
    pub fn with_size(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            ..Self::default()
        }
    }

    /// The starting cross needs an even number of rows and columns.
    pub fn validate(&self) -> Result<(), EngineError> {
        let valid = |side: usize| side >= 2 && side % 2 == 0;
        if !valid(self.height) || !valid(self.width) {
            return Err(EngineError::InvalidDimensions {
                height: self.height,
                width: self.width,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_standard_eight_by_eight() {
        let config = GameConfig::default();

        assert_eq!((config.height, config.width), (8, 8));
        assert_eq!(config.first_player, Player::Red);
        assert_eq!(config.termination, TerminationRule::NoLegalMoves);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_odd_and_degenerate_sizes() {
        for (height, width) in [(7, 8), (8, 5), (0, 8), (2, 0)] {
            assert_eq!(
                GameConfig::with_size(height, width).validate(),
                Err(EngineError::InvalidDimensions { height, width })
            );
        }
        assert!(GameConfig::with_size(2, 2).validate().is_ok());
        assert!(GameConfig::with_size(6, 10).validate().is_ok());
    }
}
