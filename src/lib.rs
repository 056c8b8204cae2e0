//! Tic-tac-toe game engine with an HTTP API.
//!
//! # Architecture
//!
//! - **Game**: the board state machine, move validation, win/draw
//!   detection, and the move-history-backed undo.
//! - **View**: pure projection from engine state to the wire-shaped
//!   snapshot (cell text, playable flags, winner label).
//! - **Server**: axum routes exposing `newgame`, `play`, and `undo`
//!   against the single live game.
//!
//! # Example
//!
//! ```
//! use tictactoe_server::{GameEngine, Outcome, Player};
//!
//! let mut engine = GameEngine::new();
//! engine.play(0, 0)?;
//! assert_eq!(engine.current_turn(), Player::O);
//! engine.undo()?;
//! assert_eq!(engine.outcome(), Outcome::Ongoing);
//! # Ok::<(), tictactoe_server::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod game;
mod server;
mod view;

// Crate-level exports - CLI
pub use cli::Cli;

// Crate-level exports - Server
pub use server::{AppState, router};

// Crate-level exports - View projection
pub use view::{CellView, DRAW_LABEL, GameView, NO_WINNER_LABEL, project};

// Crate-level exports - Game engine
pub use game::{Board, GameEngine, GameError, Move, Outcome, Player, Square, check_winner, is_full};
