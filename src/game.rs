use crate::board::Board;
use crate::config::{GameConfig, TerminationRule};
use crate::error::EngineError;
use crate::types::{Cell, GameResult, GameState, MoveOutcome, Outcome, Player, Position};

/// The board engine: one board plus the side to move.
///
/// State changes only through [`Game::initialize`], [`Game::reset`] and the
/// `apply_move` family. Drive one instance per game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    config: GameConfig,
    board: Board,
    turn: Player,
}

impl Game {
    pub fn new(config: GameConfig) -> Result<Self, EngineError> {
        let board = Board::new(config.height, config.width)?;
        log::info!(
            "new {}x{} game, {} to move",
            config.height,
            config.width,
            config.first_player
        );
        Ok(Self {
            config,
            board,
            turn: config.first_player,
        })
    }

    /// Starts over on a `height` x `width` board, keeping the rest of the config.
    pub fn initialize(&mut self, height: usize, width: usize) -> Result<(), EngineError> {
        let config = GameConfig {
            height,
            width,
            ..self.config
        };
        *self = Self::new(config)?;
        Ok(())
    }

    /// Starts over with the current dimensions.
    pub fn reset(&mut self) {
        log::info!("reset {}x{} game", self.config.height, self.config.width);
        self.board = Board::new(self.config.height, self.config.width)
            .unwrap_or_else(|_| unreachable!("config was validated on construction"));
        self.turn = self.config.first_player;
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_turn(&self) -> Player {
        self.turn
    }

    pub fn is_legal_move(&self, x: usize, y: usize) -> Result<bool, EngineError> {
        self.board.is_legal_move(x, y, self.turn)
    }

    pub fn is_legal_move_for(
        &self,
        x: usize,
        y: usize,
        player: Player,
    ) -> Result<bool, EngineError> {
        self.board.is_legal_move(x, y, player)
    }

    pub fn valid_direction(
        &self,
        x: usize,
        y: usize,
        dx: i32,
        dy: i32,
        player: Player,
    ) -> Result<bool, EngineError> {
        self.board.valid_direction(x, y, dx, dy, player)
    }

    pub fn has_any_legal_move(&self, player: Player) -> bool {
        self.board.has_any_legal_move(player)
    }

    pub fn legal_moves(&self) -> Vec<Position> {
        self.board.legal_moves(self.turn)
    }

    pub fn legal_moves_for(&self, player: Player) -> Vec<Position> {
        self.board.legal_moves(player)
    }

    /// Plays `(x, y)` for the side to move.
    pub fn apply_move(&mut self, x: usize, y: usize) -> Result<MoveOutcome, EngineError> {
        self.apply_move_for(x, y, self.turn)
    }

    /// Plays `(x, y)` for `player`, flips the captured discs and passes the
    /// turn to the opponent, or back to `player` when the opponent cannot move.
    pub fn apply_move_for(
        &mut self,
        x: usize,
        y: usize,
        player: Player,
    ) -> Result<MoveOutcome, EngineError> {
        let flipped = self.board.place(x, y, player).inspect_err(|err| {
            log::trace!("{player} rejected at ({x}, {y}): {err}");
        })?;

        self.turn = player.opponent();
        if !self.board.has_any_legal_move(self.turn) {
            log::trace!("{} has no legal move, {player} plays again", self.turn);
            self.turn = player;
        }

        log::debug!(
            "{player} played ({x}, {y}), flipped {}, {} to move",
            flipped.len(),
            self.turn
        );

        if self.is_game_over() {
            log::info!(
                "game over: red {} blue {}",
                self.count(Player::Red),
                self.count(Player::Blue)
            );
        }

        Ok(MoveOutcome {
            player,
            placed: Position::new(x, y),
            flipped,
            next_turn: self.turn,
        })
    }

    pub fn count(&self, player: Player) -> usize {
        self.board.count(player)
    }

    pub fn cell_owner(&self, x: usize, y: usize) -> Result<Cell, EngineError> {
        self.board.cell(x, y)
    }

    pub fn is_board_full(&self) -> bool {
        self.board.is_full()
    }

    /// Terminal check according to the configured [`TerminationRule`].
    pub fn is_game_over(&self) -> bool {
        match self.config.termination {
            TerminationRule::BoardFull => self.board.is_full(),
            TerminationRule::NoLegalMoves => Player::ALL
                .iter()
                .all(|&player| !self.board.has_any_legal_move(player)),
        }
    }

    pub fn outcome(&self) -> Outcome {
        let red = self.count(Player::Red);
        let blue = self.count(Player::Blue);
        if red > blue {
            Outcome::Winner(Player::Red)
        } else if blue > red {
            Outcome::Winner(Player::Blue)
        } else {
            Outcome::Draw
        }
    }

    pub fn to_game_state(&self) -> GameState {
        GameState {
            width: self.board.width(),
            height: self.board.height(),
            board: self.board.to_codes(),
            current_player: self.turn.code(),
            red_count: self.count(Player::Red),
            blue_count: self.count(Player::Blue),
            is_board_full: self.is_board_full(),
            is_game_over: self.is_game_over(),
        }
    }

    pub fn to_game_result(&self) -> GameResult {
        GameResult {
            winner: match self.outcome() {
                Outcome::Winner(player) => player.code(),
                Outcome::Draw => 0,
            },
            red_count: self.count(Player::Red),
            blue_count: self.count(Player::Blue),
        }
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, turn: Player) {
        self.config.height = board.height();
        self.config.width = board.width();
        self.board = board;
        self.turn = turn;
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new(GameConfig::default())
            .unwrap_or_else(|_| unreachable!("default config is valid"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PLAYER_RED;

    #[test]
    fn initial_state_is_correct() {
        let game = Game::default();
        let state = game.to_game_state();

        assert_eq!(game.current_turn(), Player::Red);
        assert_eq!(state.red_count, 2);
        assert_eq!(state.blue_count, 2);
        assert_eq!(state.board.iter().filter(|&&code| code != 0).count(), 4);
        assert!(!state.is_game_over);
        assert!(!state.is_board_full);
        assert_eq!(game.legal_moves().len(), 4);
    }

    #[test]
    fn first_player_is_configurable() {
        let config = GameConfig {
            first_player: Player::Blue,
            ..GameConfig::default()
        };
        let game = Game::new(config).unwrap();

        assert_eq!(game.current_turn(), Player::Blue);
        assert!(game.is_legal_move(2, 3).unwrap());
    }

    #[test]
    fn legal_move_flips_and_alternates_turn() {
        let mut game = Game::default();

        let outcome = game.apply_move(4, 2).unwrap();

        assert_eq!(outcome.player, Player::Red);
        assert_eq!(outcome.flipped, vec![Position::new(4, 3)]);
        assert_eq!(outcome.next_turn, Player::Blue);
        assert!(!outcome.passed());
        assert_eq!(game.current_turn(), Player::Blue);
        assert_eq!(game.count(Player::Red), 4);
        assert_eq!(game.count(Player::Blue), 1);
        assert_eq!(game.cell_owner(4, 3), Ok(Cell::Occupied(Player::Red)));
    }

    #[test]
    fn illegal_move_is_rejected_without_mutation() {
        let mut game = Game::default();
        let before = game.clone();

        for _ in 0..3 {
            let err = game.apply_move(0, 0).unwrap_err();
            assert_eq!(err, EngineError::IllegalMove { x: 0, y: 0 });
            assert!(err.is_recoverable());
        }
        assert_eq!(game, before);
    }

    #[test]
    fn out_of_bounds_is_not_recoverable() {
        let mut game = Game::default();

        let err = game.apply_move(8, 8).unwrap_err();
        assert!(matches!(err, EngineError::OutOfBounds { x: 8, y: 8, .. }));
        assert!(!err.is_recoverable());
        assert!(game.cell_owner(0, 8).is_err());
        assert!(game.is_legal_move(9, 0).is_err());
    }

    #[test]
    fn explicit_player_form_ignores_current_turn() {
        let mut game = Game::default();

        assert!(!game.is_legal_move(2, 3).unwrap());
        assert!(game.is_legal_move_for(2, 3, Player::Blue).unwrap());

        let outcome = game.apply_move_for(2, 3, Player::Blue).unwrap();
        assert_eq!(outcome.flipped, vec![Position::new(3, 3)]);
        assert_eq!(game.current_turn(), Player::Red);
    }

    #[test]
    fn opponent_without_reply_passes_back_to_mover() {
        let mut game = Game::default();
        game.set_board_for_test(
            Board::from_rows(&["RB..", "....", "..BR", "...."]),
            Player::Red,
        );

        let outcome = game.apply_move(2, 0).unwrap();

        assert_eq!(outcome.flipped, vec![Position::new(1, 0)]);
        // Blue still owns (2, 2) but cannot bracket anything.
        assert!(!game.has_any_legal_move(Player::Blue));
        assert!(outcome.passed());
        assert_eq!(game.current_turn(), Player::Red);
    }

    #[test]
    fn termination_rules_differ_when_both_sides_are_stuck() {
        let rows = ["RR..", "....", "....", "...."];
        let mut standard = Game::default();
        standard.set_board_for_test(Board::from_rows(&rows), Player::Blue);

        let mut simplified = Game::new(GameConfig {
            termination: TerminationRule::BoardFull,
            ..GameConfig::default()
        })
        .unwrap();
        simplified.set_board_for_test(Board::from_rows(&rows), Player::Blue);

        assert!(!standard.is_board_full());
        assert!(standard.is_game_over());
        assert!(!simplified.is_game_over());
        assert_eq!(standard.outcome(), Outcome::Winner(Player::Red));
    }

    #[test]
    fn full_board_ends_the_game_and_reports_result() {
        let mut game = Game::default();
        game.set_board_for_test(Board::from_rows(&["RB.B", "RRRR", "RRRR", "BBBB"]), Player::Red);

        let outcome = game.apply_move(2, 0).unwrap();

        assert_eq!(outcome.flipped, vec![Position::new(1, 0)]);
        assert!(game.is_board_full());
        assert!(game.is_game_over());
        assert_eq!(
            game.to_game_result(),
            GameResult {
                winner: PLAYER_RED,
                red_count: 11,
                blue_count: 5,
            }
        );
    }

    #[test]
    fn initialize_resizes_and_reset_restores_start() {
        let mut game = Game::default();
        game.apply_move(4, 2).unwrap();

        game.reset();
        assert_eq!(game, Game::default());

        game.initialize(6, 4).unwrap();
        assert_eq!(game.board().height(), 6);
        assert_eq!(game.board().width(), 4);
        assert_eq!(game.cell_owner(1, 2), Ok(Cell::Occupied(Player::Red)));

        assert_eq!(
            game.initialize(5, 4),
            Err(EngineError::InvalidDimensions {
                height: 5,
                width: 4
            })
        );
        assert_eq!(game.board().height(), 6);
    }
}
