pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod types;
pub mod wasm;

pub use board::Board;
pub use config::{GameConfig, TerminationRule};
pub use error::EngineError;
pub use game::Game;
pub use types::{Cell, Direction, GameResult, GameState, MoveOutcome, Outcome, Player, Position};
