//! Pure projection from engine state to the wire-facing snapshot.

use crate::game::{GameEngine, Outcome, Player, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// One cell of the board as the client sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellView {
    /// `"X"`, `"O"`, or `""` for an empty cell.
    pub text: String,
    /// True iff the cell is empty and the game is still ongoing.
    pub playable: bool,
    /// Column (0-2).
    pub x: usize,
    /// Row (0-2).
    pub y: usize,
}

/// Snapshot of the whole game, shaped for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameView {
    /// All 9 cells in row-major order: index `3*y + x`.
    pub cells: Vec<CellView>,
    /// `"X"`, `"O"`, `"no winner yet"`, or `"draw"`.
    pub winner: String,
}

/// Label shown while the game has no winner and is not drawn.
pub const NO_WINNER_LABEL: &str = "no winner yet";

/// Label shown when the board filled with no winner.
pub const DRAW_LABEL: &str = "draw";

/// Projects the engine state into a [`GameView`].
///
/// Stateless and read-only; the cell ordering and winner labels are
/// part of the external contract.
#[instrument(skip(engine))]
pub fn project(engine: &GameEngine) -> GameView {
    let decided = engine.outcome().is_decided();

    let mut cells = Vec::with_capacity(9);
    for y in 0..3 {
        for x in 0..3 {
            // Coordinates come from the loop bounds, always in range.
            let square = engine
                .board()
                .get(x, y)
                .unwrap_or(Square::Empty);
            let text = match square {
                Square::Occupied(Player::X) => "X",
                Square::Occupied(Player::O) => "O",
                Square::Empty => "",
            };
            cells.push(CellView {
                text: text.to_string(),
                playable: square == Square::Empty && !decided,
                x,
                y,
            });
        }
    }

    let winner = match engine.outcome() {
        Outcome::Won(Player::X) => "X".to_string(),
        Outcome::Won(Player::O) => "O".to_string(),
        Outcome::Draw => DRAW_LABEL.to_string(),
        Outcome::Ongoing => NO_WINNER_LABEL.to_string(),
    };

    GameView { cells, winner }
}
