//! HTTP transport: axum routes wrapping the game engine.

use crate::game::{GameEngine, GameError};
use crate::view::{self, GameView};
use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::{Arc, Mutex};
use tracing::{info, instrument, warn};

/// Shared application state: the single live game.
///
/// One engine for the whole process, behind one exclusive lock. The
/// lock is held only for the duration of one engine operation; every
/// operation is synchronous and in-memory, so it is never held across
/// an await point.
#[derive(Debug, Clone)]
pub struct AppState {
    engine: Arc<Mutex<GameEngine>>,
}

impl AppState {
    /// Creates state holding a fresh game.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating application state with a new game");
        Self {
            engine: Arc::new(Mutex::new(GameEngine::new())),
        }
    }

    /// Runs `f` against the engine under the lock, then projects the
    /// resulting state.
    fn with_engine<F>(&self, f: F) -> GameView
    where
        F: FnOnce(&mut GameEngine),
    {
        let mut engine = self.engine.lock().unwrap();
        f(&mut engine);
        view::project(&engine)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Query parameters for the play endpoint.
///
/// Kept as raw strings so extraction never rejects the request; bad
/// input maps to the engine's `OutOfRange` rejection and the current
/// state is returned unchanged.
#[derive(Debug, Deserialize)]
pub struct PlayParams {
    x: Option<String>,
    y: Option<String>,
}

/// Builds the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/newgame", get(new_game))
        .route("/play", get(play))
        .route("/undo", get(undo))
        .with_state(state)
}

/// `GET /newgame` - resets the game and returns the fresh state.
#[instrument(skip(state))]
async fn new_game(State(state): State<AppState>) -> Json<GameView> {
    info!("Starting new game");
    Json(state.with_engine(|engine| engine.new_game()))
}

/// `GET /play?x=&y=` - plays at the given cell.
///
/// A rejected move is not an HTTP error: the engine guarantees the
/// rejection was a no-op, so the body is simply the unchanged state.
#[instrument(skip(state))]
async fn play(State(state): State<AppState>, Query(params): Query<PlayParams>) -> Json<GameView> {
    let view = state.with_engine(|engine| {
        let result = parse_coord(params.x.as_deref())
            .and_then(|x| parse_coord(params.y.as_deref()).map(|y| (x, y)))
            .and_then(|(x, y)| engine.play(x, y));
        match result {
            Ok(()) => info!(x = ?params.x, y = ?params.y, "Move accepted"),
            Err(e) => warn!(x = ?params.x, y = ?params.y, error = %e, "Move rejected"),
        }
    });
    Json(view)
}

/// `GET /undo` - reverts the most recent move.
#[instrument(skip(state))]
async fn undo(State(state): State<AppState>) -> Json<GameView> {
    let view = state.with_engine(|engine| match engine.undo() {
        Ok(()) => info!("Move undone"),
        Err(e) => warn!(error = %e, "Undo rejected"),
    });
    Json(view)
}

/// Parses one coordinate query parameter.
///
/// Missing, non-integer, and out-of-range values all collapse into
/// `OutOfRange`, matching the engine's taxonomy.
fn parse_coord(raw: Option<&str>) -> Result<usize, GameError> {
    let value: usize = raw
        .and_then(|s| s.trim().parse().ok())
        .ok_or(GameError::OutOfRange)?;
    if value > 2 {
        return Err(GameError::OutOfRange);
    }
    Ok(value)
}
