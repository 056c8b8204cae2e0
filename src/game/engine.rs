//! The game engine: move validation, win/draw detection, undo.

use super::rules;
use super::types::{Board, GameError, Move, Outcome, Player, Square};
use tracing::{debug, instrument, warn};

/// Tic-tac-toe game engine.
///
/// Owns the board, the active turn, the move history, and the derived
/// outcome. Validation fully precedes mutation, so every rejected
/// operation leaves state exactly as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    current_turn: Player,
    history: Vec<Move>,
    outcome: Outcome,
}

impl GameEngine {
    /// Creates an engine holding a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_turn: Player::X,
            history: Vec::new(),
            outcome: Outcome::Ongoing,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    pub fn current_turn(&self) -> Player {
        self.current_turn
    }

    /// Returns the move history, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Starts a new game: empty board, empty history, X to move.
    ///
    /// Always succeeds; there is no precondition.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        debug!("Starting new game");
        self.board.reset();
        self.history.clear();
        self.current_turn = Player::X;
        self.outcome = Outcome::Ongoing;
    }

    /// Plays the current player's mark at `(x, y)`.
    ///
    /// Validates, in order: coordinates in range, game not yet decided,
    /// target cell empty. Any failure is a no-op reporting the reason.
    /// On success the move is recorded, the outcome is recomputed, and
    /// the turn passes to the opponent only if the game is still ongoing.
    ///
    /// # Errors
    ///
    /// `OutOfRange`, `GameAlreadyOver`, or `CellOccupied`.
    #[instrument(skip(self), fields(player = ?self.current_turn))]
    pub fn play(&mut self, x: usize, y: usize) -> Result<(), GameError> {
        // Range check first: probing the cell covers it.
        let square = self.board.get(x, y).inspect_err(|e| {
            warn!(x, y, error = %e, "Rejected play: coordinates out of range");
        })?;

        if self.outcome.is_decided() {
            warn!(x, y, outcome = %self.outcome, "Rejected play: game already over");
            return Err(GameError::GameAlreadyOver);
        }

        if square != Square::Empty {
            warn!(x, y, "Rejected play: cell occupied");
            return Err(GameError::CellOccupied);
        }

        let player = self.current_turn;
        self.board.set(x, y, player)?;
        self.history.push(Move { x, y, player });
        self.recompute_outcome();

        // A winning (or drawing) move does not advance the turn.
        if self.outcome == Outcome::Ongoing {
            self.current_turn = player.opponent();
        }

        debug!(x, y, ?player, outcome = %self.outcome, "Move accepted");
        Ok(())
    }

    /// Undoes the most recent move.
    ///
    /// Pops the last move, clears its cell, hands the turn back to its
    /// mover, and recomputes the outcome from the smaller board. That
    /// recomputation restores `Ongoing` whenever the undone move was
    /// the winning (or drawing) one.
    ///
    /// # Errors
    ///
    /// `NothingToUndo` if the history is empty; state is unchanged.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> Result<(), GameError> {
        let last = self.history.pop().ok_or_else(|| {
            warn!("Rejected undo: no moves in history");
            GameError::NothingToUndo
        })?;

        self.board.clear(last.x, last.y)?;
        self.current_turn = last.player;
        self.recompute_outcome();

        debug!(%last, outcome = %self.outcome, "Move undone");
        Ok(())
    }

    /// Recomputes the outcome from the board alone.
    ///
    /// Runs after every play and every undo; never cached across moves,
    /// so undo stays correct without reverse-patching any win state.
    fn recompute_outcome(&mut self) {
        self.outcome = if let Some(winner) = rules::check_winner(&self.board) {
            Outcome::Won(winner)
        } else if rules::is_full(&self.board) {
            Outcome::Draw
        } else {
            Outcome::Ongoing
        };
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
