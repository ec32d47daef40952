use thiserror::Error;

/// Errors reported by the board engine.
///
/// Every error is raised before any mutation, so a failed call never leaves a
/// partially applied move behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("({x}, {y}) is outside the {width}x{height} board")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error("invalid player code {0}: expected 1 (red) or 2 (blue)")]
    InvalidPlayer(u8),

    #[error("invalid direction ({dx}, {dy}): each axis must be in [-1, 1] and not both zero")]
    InvalidDirection { dx: i32, dy: i32 },

    #[error("illegal move at ({x}, {y})")]
    IllegalMove { x: usize, y: usize },

    #[error("invalid board size {height}x{width}: both sides must be even and at least 2")]
    InvalidDimensions { height: usize, width: usize },
}

impl EngineError {
    /// `IllegalMove` is the only error expected during normal play; the rest
    /// are caller bugs.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::IllegalMove { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_display_names_board_size() {
        let err = EngineError::OutOfBounds {
            x: 8,
            y: 0,
            width: 8,
            height: 8,
        };
        assert_eq!(err.to_string(), "(8, 0) is outside the 8x8 board");
    }

    #[test]
    fn only_illegal_move_is_recoverable() {
        assert!(EngineError::IllegalMove { x: 0, y: 0 }.is_recoverable());
        assert!(!EngineError::InvalidPlayer(3).is_recoverable());
        assert!(!EngineError::InvalidDirection { dx: 2, dy: 0 }.is_recoverable());
        assert!(
            !EngineError::InvalidDimensions {
                height: 7,
                width: 8
            }
            .is_recoverable()
        );
    }
}
