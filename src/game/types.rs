//! Core domain types for tic-tac-toe.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// Errors reported by board and engine operations.
///
/// All four are expected, recoverable conditions: a failed operation
/// leaves state unchanged, and the caller sees the specific reason.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// A coordinate was outside {0, 1, 2}.
    #[display("Coordinate out of range (must be 0-2)")]
    OutOfRange,

    /// The target cell is already marked.
    #[display("Cell is already occupied")]
    CellOccupied,

    /// A play was attempted after the outcome was decided.
    #[display("Game is already over")]
    GameAlreadyOver,

    /// An undo was attempted with no moves in the history.
    #[display("No moves to undo")]
    NothingToUndo,
}

impl std::error::Error for GameError {}

/// 3x3 tic-tac-toe board, addressed by `(x, y)` with `x, y` in `{0, 1, 2}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order: index `3*y + x`.
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    fn index(x: usize, y: usize) -> Result<usize, GameError> {
        if x > 2 || y > 2 {
            return Err(GameError::OutOfRange);
        }
        Ok(3 * y + x)
    }

    /// Gets the occupancy of the cell at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> Result<Square, GameError> {
        Ok(self.squares[Self::index(x, y)?])
    }

    /// Marks the cell at `(x, y)` for `player`.
    ///
    /// The engine pre-checks occupancy, but the board refuses to
    /// overwrite a mark rather than trusting its caller.
    pub fn set(&mut self, x: usize, y: usize, player: Player) -> Result<(), GameError> {
        let idx = Self::index(x, y)?;
        if self.squares[idx] != Square::Empty {
            return Err(GameError::CellOccupied);
        }
        self.squares[idx] = Square::Occupied(player);
        Ok(())
    }

    /// Resets the cell at `(x, y)` to empty. Used only by undo.
    pub fn clear(&mut self, x: usize, y: usize) -> Result<(), GameError> {
        let idx = Self::index(x, y)?;
        self.squares[idx] = Square::Empty;
        Ok(())
    }

    /// Sets all 9 cells to empty.
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Checks if the cell at `(x, y)` is empty. Out-of-range is not empty.
    pub fn is_empty(&self, x: usize, y: usize) -> bool {
        matches!(self.get(x, y), Ok(Square::Empty))
    }

    /// Returns all squares in row-major order.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.squares
            .iter()
            .filter(|s| **s != Square::Empty)
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// A recorded placement: one player marking one cell.
///
/// Created when the engine accepts a play, immutable afterwards,
/// and owned exclusively by the engine's history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Column of the placement (0-2).
    pub x: usize,
    /// Row of the placement (0-2).
    pub y: usize,
    /// The player who made the placement.
    pub player: Player,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} -> ({}, {})", self.player, self.x, self.y)
    }
}

/// The game's current result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Game is ongoing.
    Ongoing,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Won(player) => Some(*player),
            _ => None,
        }
    }

    /// Returns true if the game has been decided.
    pub fn is_decided(&self) -> bool {
        *self != Outcome::Ongoing
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ongoing => write!(f, "In progress"),
            Outcome::Won(player) => write!(f, "Player {:?} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}
