use std::fmt;

use crate::config::{DEFAULT_BOARD_SIZE, GameConfig};
use crate::error::EngineError;
use crate::types::{Cell, Direction, Player, Position};

/// Reversi board stored as a dense row-major grid of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates a `height` x `width` board holding the starting cross:
    /// red on the top-left/bottom-right centre cells, blue on the other diagonal.
    pub fn new(height: usize, width: usize) -> Result<Self, EngineError> {
        GameConfig::with_size(height, width).validate()?;

        let mut board = Self {
            height,
            width,
            cells: vec![Cell::Empty; height * width],
        };

        let (top, left) = (height / 2 - 1, width / 2 - 1);
        board.set(Position::new(left, top), Cell::Occupied(Player::Red));
        board.set(Position::new(left + 1, top), Cell::Occupied(Player::Blue));
        board.set(Position::new(left, top + 1), Cell::Occupied(Player::Blue));
        board.set(Position::new(left + 1, top + 1), Cell::Occupied(Player::Red));

        Ok(board)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn is_in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Returns the cell at `(x, y)`.
    pub fn cell(&self, x: usize, y: usize) -> Result<Cell, EngineError> {
        let pos = self.checked(x, y)?;
        Ok(self.get(pos))
    }

    /// Whether placing `player` at the empty cell `(x, y)` would bracket a run
    /// of opponent discs in direction `(dx, dy)`.
    pub fn valid_direction(
        &self,
        x: usize,
        y: usize,
        dx: i32,
        dy: i32,
        player: Player,
    ) -> Result<bool, EngineError> {
        let pos = self.checked(x, y)?;
        let dir = Direction::new(dx, dy)?;
        Ok(self.bracketed_run(pos, dir, player) > 0)
    }

    /// A move is legal on an empty cell that brackets at least one run.
    pub fn is_legal_move(&self, x: usize, y: usize, player: Player) -> Result<bool, EngineError> {
        let pos = self.checked(x, y)?;
        Ok(self.is_legal_at(pos, player))
    }

    pub fn has_any_legal_move(&self, player: Player) -> bool {
        self.positions().any(|pos| self.is_legal_at(pos, player))
    }

    /// Legal moves for `player` in row-major order.
    pub fn legal_moves(&self, player: Player) -> Vec<Position> {
        self.positions()
            .filter(|&pos| self.is_legal_at(pos, player))
            .collect()
    }

    /// Places one disc and flips captured discs.
    /// Returns the flipped positions; the board is untouched when the move is illegal.
    pub fn place(&mut self, x: usize, y: usize, player: Player) -> Result<Vec<Position>, EngineError> {
        let pos = self.checked(x, y)?;
        let flips = self.collect_flips(pos, player);
        if flips.is_empty() {
            return Err(EngineError::IllegalMove { x, y });
        }

        self.set(pos, Cell::Occupied(player));
        for &flip in &flips {
            self.set(flip, Cell::Occupied(player));
        }

        Ok(flips)
    }

    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.owner() == Some(player))
            .count()
    }

    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_empty()).count()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Row-major cell codes: 0=empty, 1=red, 2=blue.
    pub fn to_codes(&self) -> Vec<u8> {
        self.cells.iter().map(|cell| cell.code()).collect()
    }

    pub(crate) fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Position::new(x, y)))
    }

    fn is_legal_at(&self, pos: Position, player: Player) -> bool {
        self.get(pos).is_empty()
            && Direction::ALL
                .iter()
                .any(|&dir| self.bracketed_run(pos, dir, player) > 0)
    }

    fn collect_flips(&self, pos: Position, player: Player) -> Vec<Position> {
        if !self.get(pos).is_empty() {
            return Vec::new();
        }

        let mut flips = Vec::new();
        for dir in Direction::ALL {
            let run = self.bracketed_run(pos, dir, player);
            let mut current = pos;
            for _ in 0..run {
                // The run was just scanned, so every step stays on the board.
                if let Some(next) = self.step(current, dir) {
                    flips.push(next);
                    current = next;
                }
            }
        }
        flips
    }

    /// Number of opponent discs between `pos` and the nearest own disc along
    /// `dir`, or 0 when the run is empty, interrupted by a gap, or runs off the board.
    fn bracketed_run(&self, pos: Position, dir: Direction, player: Player) -> usize {
        let own = player.sign();
        let mut run = 0;
        let mut current = pos;

        while let Some(next) = self.step(current, dir) {
            let value = self.get(next).value();
            if value == -own {
                run += 1;
            } else if value == own {
                return run;
            } else {
                return 0;
            }
            current = next;
        }

        0
    }

    fn step(&self, pos: Position, dir: Direction) -> Option<Position> {
        let x = pos.x.checked_add_signed(dir.dx() as isize)?;
        let y = pos.y.checked_add_signed(dir.dy() as isize)?;
        self.is_in_bounds(x, y).then_some(Position::new(x, y))
    }

    fn checked(&self, x: usize, y: usize) -> Result<Position, EngineError> {
        if !self.is_in_bounds(x, y) {
            return Err(EngineError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(Position::new(x, y))
    }

    fn get(&self, pos: Position) -> Cell {
        self.cells[pos.y * self.width + pos.x]
    }

    fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.y * self.width + pos.x] = cell;
    }

    /// Builds a board from rows of `.`, `R` and `B`.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows[0].len();
        let cells = rows
            .iter()
            .flat_map(|row| row.chars())
            .map(|ch| match ch {
                'R' => Cell::Occupied(Player::Red),
                'B' => Cell::Occupied(Player::Blue),
                _ => Cell::Empty,
            })
            .collect::<Vec<_>>();
        assert_eq!(cells.len(), height * width, "ragged test board");
        Self {
            height,
            width,
            cells,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE, DEFAULT_BOARD_SIZE).unwrap_or_else(|_| unreachable!("default size is valid"))
    }
}

/// One row per line, cells as signed values (` 0`, ` 1`, `-1`).
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (y, row) in self.cells.chunks(self.width).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for (x, cell) in row.iter().enumerate() {
                if x > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{:2}", cell.value())?;
            }
        }
        Ok(())
    }
}
