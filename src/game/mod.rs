mod engine;
mod rules;
mod types;

pub use engine::GameEngine;
pub use rules::{check_winner, is_full};
pub use types::{Board, GameError, Move, Outcome, Player, Square};
