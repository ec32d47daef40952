use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Wire code for an empty cell in snapshots.
pub const CELL_EMPTY: u8 = 0;
pub const PLAYER_RED: u8 = 1;
pub const PLAYER_BLUE: u8 = 2;

/// One of the two sides. `Red` moves first by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    Red,
    Blue,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::Red, Player::Blue];

    pub fn opponent(self) -> Self {
        match self {
            Self::Red => Self::Blue,
            Self::Blue => Self::Red,
        }
    }

    /// +1 for red, -1 for blue.
    pub fn sign(self) -> i8 {
        match self {
            Self::Red => 1,
            Self::Blue => -1,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::Red => PLAYER_RED,
            Self::Blue => PLAYER_BLUE,
        }
    }
}

impl TryFrom<u8> for Player {
    type Error = EngineError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            PLAYER_RED => Ok(Self::Red),
            PLAYER_BLUE => Ok(Self::Blue),
            other => Err(EngineError::InvalidPlayer(other)),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Red => f.write_str("red"),
            Self::Blue => f.write_str("blue"),
        }
    }
}

/// Occupant of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Player),
}

impl Cell {
    pub fn owner(self) -> Option<Player> {
        match self {
            Self::Empty => None,
            Self::Occupied(player) => Some(player),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Self::Empty
    }

    /// Signed value used by the directional scan: 0, +1 or -1.
    pub fn value(self) -> i8 {
        self.owner().map_or(0, Player::sign)
    }

    pub fn code(self) -> u8 {
        self.owner().map_or(CELL_EMPTY, Player::code)
    }
}

/// A board coordinate: `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

/// A unit step towards one of the 8 neighbouring cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    dx: i32,
    dy: i32,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction { dx: -1, dy: -1 },
        Direction { dx: 0, dy: -1 },
        Direction { dx: 1, dy: -1 },
        Direction { dx: -1, dy: 0 },
        Direction { dx: 1, dy: 0 },
        Direction { dx: -1, dy: 1 },
        Direction { dx: 0, dy: 1 },
        Direction { dx: 1, dy: 1 },
    ];

    pub fn new(dx: i32, dy: i32) -> Result<Self, EngineError> {
        if !(-1..=1).contains(&dx) || !(-1..=1).contains(&dy) || (dx == 0 && dy == 0) {
            return Err(EngineError::InvalidDirection { dx, dy });
        }
        Ok(Self { dx, dy })
    }

    pub fn dx(self) -> i32 {
        self.dx
    }

    pub fn dy(self) -> i32 {
        self.dy
    }
}

/// What a successful move changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoveOutcome {
    pub player: Player,
    pub placed: Position,
    /// Converted discs, grouped by direction and ordered outward from `placed`.
    pub flipped: Vec<Position>,
    pub next_turn: Player,
}

impl MoveOutcome {
    /// The opponent had no reply, so the mover plays again.
    pub fn passed(&self) -> bool {
        self.next_turn == self.player
    }
}

/// Result of comparing disc counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Outcome {
    Winner(Player),
    Draw,
}

/// Public game state handed to a presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub width: usize,
    pub height: usize,
    /// Row-major cell codes: 0=empty, 1=red, 2=blue.
    pub board: Vec<u8>,
    pub current_player: u8,
    pub red_count: usize,
    pub blue_count: usize,
    pub is_board_full: bool,
    pub is_game_over: bool,
}

/// Final score. `winner` is 0 on a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GameResult {
    pub winner: u8,
    pub red_count: usize,
    pub blue_count: usize,
}
