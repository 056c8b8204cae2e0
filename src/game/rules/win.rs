//! Win detection logic for tic-tac-toe.

use super::super::types::{Board, Player, Square};
use tracing::instrument;

/// The 8 winning lines as `(x, y)` triples: 3 rows, 3 columns, 2 diagonals.
///
/// Evaluated in this fixed order; after any single legal move at most
/// one line can be newly completed, so first match is the only match.
const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Columns
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(2, 0), (1, 1), (0, 2)],
];

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if that player has three in a row,
/// `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    for [(ax, ay), (bx, by), (cx, cy)] in LINES {
        // Coordinates come from the fixed table above, always in range.
        let sq = board.get(ax, ay).ok()?;
        if sq != Square::Empty
            && board.get(bx, by).ok() == Some(sq)
            && board.get(cx, cy).ok() == Some(sq)
        {
            return match sq {
                Square::Occupied(player) => Some(player),
                Square::Empty => None,
            };
        }
    }

    None
}
