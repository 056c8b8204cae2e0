//! Tests for the game engine: invariants, rejection no-ops, undo.

use tictactoe_server::{GameEngine, GameError, Outcome, Player, Square};

/// Plays a sequence of (x, y) moves, asserting each is accepted.
fn play_all(engine: &mut GameEngine, moves: &[(usize, usize)]) {
    for &(x, y) in moves {
        engine.play(x, y).unwrap();
    }
}

#[test]
fn test_new_engine_is_fresh() {
    let engine = GameEngine::new();
    assert_eq!(engine.current_turn(), Player::X);
    assert_eq!(engine.outcome(), Outcome::Ongoing);
    assert!(engine.history().is_empty());
    assert_eq!(engine.board().occupied_count(), 0);
}

#[test]
fn test_history_tracks_occupied_cells() {
    let mut engine = GameEngine::new();
    play_all(&mut engine, &[(0, 0), (1, 1), (2, 2), (0, 1)]);

    assert_eq!(engine.history().len(), 4);
    assert_eq!(engine.board().occupied_count(), 4);
}

#[test]
fn test_turn_alternates_on_success() {
    let mut engine = GameEngine::new();
    assert_eq!(engine.current_turn(), Player::X);

    engine.play(0, 0).unwrap();
    assert_eq!(engine.current_turn(), Player::O);

    engine.play(1, 1).unwrap();
    assert_eq!(engine.current_turn(), Player::X);
}

#[test]
fn test_rejected_play_keeps_turn() {
    let mut engine = GameEngine::new();
    engine.play(0, 0).unwrap();
    assert_eq!(engine.current_turn(), Player::O);

    // Occupied cell: rejected, still O's turn.
    assert_eq!(engine.play(0, 0), Err(GameError::CellOccupied));
    assert_eq!(engine.current_turn(), Player::O);
}

#[test]
fn test_out_of_range_play_is_noop() {
    let mut engine = GameEngine::new();
    engine.play(0, 0).unwrap();
    let before = engine.clone();

    assert_eq!(engine.play(5, 5), Err(GameError::OutOfRange));
    assert_eq!(engine.play(0, 3), Err(GameError::OutOfRange));
    assert_eq!(engine.play(3, 0), Err(GameError::OutOfRange));
    assert_eq!(engine, before);
}

#[test]
fn test_occupied_play_is_noop() {
    let mut engine = GameEngine::new();
    engine.play(1, 1).unwrap();
    let before = engine.clone();

    assert_eq!(engine.play(1, 1), Err(GameError::CellOccupied));
    assert_eq!(engine, before);
}

#[test]
fn test_play_after_win_is_noop() {
    let mut engine = GameEngine::new();
    // X: (0,0) (1,0) (2,0) wins the top row; O interleaves.
    play_all(&mut engine, &[(0, 0), (0, 1), (1, 0), (0, 2), (2, 0)]);
    assert_eq!(engine.outcome(), Outcome::Won(Player::X));
    let before = engine.clone();

    assert_eq!(engine.play(1, 1), Err(GameError::GameAlreadyOver));
    assert_eq!(engine, before);
}

#[test]
fn test_winning_move_does_not_advance_turn() {
    let mut engine = GameEngine::new();
    play_all(&mut engine, &[(0, 0), (0, 1), (1, 0), (0, 2), (2, 0)]);

    assert_eq!(engine.outcome(), Outcome::Won(Player::X));
    assert_eq!(engine.current_turn(), Player::X);
}

#[test]
fn test_all_winning_lines_both_players() {
    const LINES: [[(usize, usize); 3]; 8] = [
        [(0, 0), (1, 0), (2, 0)],
        [(0, 1), (1, 1), (2, 1)],
        [(0, 2), (1, 2), (2, 2)],
        [(0, 0), (0, 1), (0, 2)],
        [(1, 0), (1, 1), (1, 2)],
        [(2, 0), (2, 1), (2, 2)],
        [(0, 0), (1, 1), (2, 2)],
        [(2, 0), (1, 1), (0, 2)],
    ];

    for line in LINES {
        for winner in [Player::X, Player::O] {
            let mut board = tictactoe_server::Board::new();
            for (x, y) in line {
                board.set(x, y, winner).unwrap();
            }
            assert_eq!(
                tictactoe_server::check_winner(&board),
                Some(winner),
                "line {:?} should be won by {:?}",
                line,
                winner
            );
        }
    }
}

#[test]
fn test_full_board_without_line_is_draw() {
    let mut engine = GameEngine::new();
    // X O X / O X X / O X O column-by-column, alternating legally:
    // X: (0,0) (2,0) (1,1) (2,1) (1,2)
    // O: (1,0) (0,1) (0,2) (2,2)
    play_all(
        &mut engine,
        &[
            (0, 0),
            (1, 0),
            (2, 0),
            (0, 1),
            (1, 1),
            (0, 2),
            (2, 1),
            (2, 2),
            (1, 2),
        ],
    );

    assert_eq!(engine.outcome(), Outcome::Draw);
    assert_eq!(engine.history().len(), 9);
}

#[test]
fn test_undo_empty_history_is_noop() {
    let mut engine = GameEngine::new();
    let before = engine.clone();

    assert_eq!(engine.undo(), Err(GameError::NothingToUndo));
    assert_eq!(engine, before);
}

#[test]
fn test_undo_reverts_single_move() {
    let mut engine = GameEngine::new();
    let before = engine.clone();

    engine.play(1, 1).unwrap();
    engine.undo().unwrap();

    assert_eq!(engine, before);
}

#[test]
fn test_undo_is_exact_inverse_at_every_depth() {
    let moves = [(0, 0), (1, 1), (2, 2), (1, 0), (0, 2)];
    for depth in 0..moves.len() {
        let mut engine = GameEngine::new();
        for &(x, y) in &moves[..depth] {
            engine.play(x, y).unwrap();
        }
        let before = engine.clone();

        let (x, y) = moves[depth];
        engine.play(x, y).unwrap();
        engine.undo().unwrap();

        assert_eq!(engine, before, "play({x},{y}); undo() changed state");
    }
}

#[test]
fn test_undo_winning_move_restores_ongoing() {
    let mut engine = GameEngine::new();
    play_all(&mut engine, &[(0, 0), (0, 1), (1, 0), (0, 2), (2, 0)]);
    assert_eq!(engine.outcome(), Outcome::Won(Player::X));

    engine.undo().unwrap();

    assert_eq!(engine.outcome(), Outcome::Ongoing);
    assert_eq!(engine.current_turn(), Player::X);
    assert_eq!(engine.history().len(), 4);
    assert!(engine.board().is_empty(2, 0));
}

#[test]
fn test_undo_draw_restores_ongoing() {
    let mut engine = GameEngine::new();
    play_all(
        &mut engine,
        &[
            (0, 0),
            (1, 0),
            (2, 0),
            (0, 1),
            (1, 1),
            (0, 2),
            (2, 1),
            (2, 2),
            (1, 2),
        ],
    );
    assert_eq!(engine.outcome(), Outcome::Draw);

    engine.undo().unwrap();
    assert_eq!(engine.outcome(), Outcome::Ongoing);
}

#[test]
fn test_undo_all_the_way_back() {
    let mut engine = GameEngine::new();
    let fresh = engine.clone();
    play_all(&mut engine, &[(0, 0), (1, 1), (2, 2)]);

    engine.undo().unwrap();
    engine.undo().unwrap();
    engine.undo().unwrap();

    assert_eq!(engine, fresh);
    assert_eq!(engine.undo(), Err(GameError::NothingToUndo));
}

#[test]
fn test_new_game_resets_everything() {
    let mut engine = GameEngine::new();
    play_all(&mut engine, &[(0, 0), (0, 1), (1, 0), (0, 2), (2, 0)]);
    assert_eq!(engine.outcome(), Outcome::Won(Player::X));

    engine.new_game();

    assert_eq!(engine, GameEngine::new());
}

#[test]
fn test_board_refuses_overwrite() {
    let mut board = tictactoe_server::Board::new();
    board.set(0, 0, Player::X).unwrap();

    assert_eq!(board.set(0, 0, Player::O), Err(GameError::CellOccupied));
    assert_eq!(board.get(0, 0), Ok(Square::Occupied(Player::X)));
}
