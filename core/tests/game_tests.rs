// SPDX-License-Identifier: MIT OR Apache-2.0

use weiqi_core::{Color, Coord, GameError, GameSession, Move};

#[test]
fn session_starts_empty_black_to_move() {
    let session = GameSession::new(9).unwrap();
    let state = session.state();
    assert_eq!(state.board_size, 9);
    assert_eq!(state.current_player, Color::Black);
    assert_eq!(state.consecutive_passes, 0);
    assert!(!state.game_over);
    assert_eq!(session.valid_moves().len(), 81);
}

#[test]
fn unsupported_sizes_are_rejected() {
    assert_eq!(
        GameSession::new(10).unwrap_err(),
        GameError::UnsupportedBoardSize(10)
    );
    let mut session = GameSession::new(9).unwrap();
    assert_eq!(
        session.reset(7).unwrap_err(),
        GameError::UnsupportedBoardSize(7)
    );
    // The failed reset left the session untouched
    assert_eq!(session.state().board_size, 9);
}

#[test]
fn turns_alternate_and_scores_update() {
    let mut session = GameSession::new(9).unwrap();

    session.apply_move(Coord::new(4, 4)).unwrap();
    assert_eq!(session.state().current_player, Color::White);
    // Lone black stone owns the rest of the board under area scoring
    assert_eq!(session.state().score.black, 81);

    session.apply_move(Coord::new(2, 2)).unwrap();
    assert_eq!(session.state().current_player, Color::Black);
    // The open region now touches both colors
    assert_eq!(session.state().score.black, 1);
    assert_eq!(session.state().score.white, 1);
}

#[test]
fn illegal_moves_leave_state_unchanged() {
    let mut session = GameSession::new(9).unwrap();
    session.apply_move(Coord::new(4, 4)).unwrap();

    let before = session.state().clone();
    assert_eq!(
        session.apply_move(Coord::new(4, 4)).unwrap_err(),
        GameError::Occupied
    );
    assert_eq!(
        session.apply_move(Coord::new(9, 9)).unwrap_err(),
        GameError::OutOfBounds
    );

    let after = session.state();
    assert_eq!(after.current_player, before.current_player);
    assert_eq!(after.moves.len(), before.moves.len());
    assert_eq!(after.board, before.board);
}

#[test]
fn two_passes_end_the_game() {
    let mut session = GameSession::new(9).unwrap();
    session.apply_move(Coord::new(4, 4)).unwrap();

    session.pass().unwrap();
    assert!(!session.state().game_over);
    assert_eq!(session.state().consecutive_passes, 1);

    session.pass().unwrap();
    assert!(session.state().game_over);

    // Terminal: every mutating call short of reset is rejected
    assert_eq!(
        session.apply_move(Coord::new(5, 5)).unwrap_err(),
        GameError::GameOver
    );
    assert_eq!(session.pass().unwrap_err(), GameError::GameOver);
    assert!(session.valid_moves().is_empty());
}

#[test]
fn a_move_resets_the_pass_counter() {
    let mut session = GameSession::new(9).unwrap();
    session.pass().unwrap();
    session.apply_move(Coord::new(3, 3)).unwrap();
    assert_eq!(session.state().consecutive_passes, 0);

    session.pass().unwrap();
    assert!(!session.state().game_over);
}

#[test]
fn reset_is_the_only_exit_from_game_over() {
    let mut session = GameSession::new(9).unwrap();
    session.pass().unwrap();
    session.pass().unwrap();
    assert!(session.state().game_over);

    session.reset(13).unwrap();
    let state = session.state();
    assert!(!state.game_over);
    assert_eq!(state.board_size, 13);
    assert_eq!(state.current_player, Color::Black);
    assert!(state.moves.is_empty());
    assert_eq!(state.captures, (0, 0));
}

#[test]
fn captures_update_totals_and_ko_point() {
    let mut session = GameSession::new(9).unwrap();

    // Corner ko setup played out move by move:
    //   W at (0,0) ends up captured by Black playing (0,1).
    session.apply_move(Coord::new(1, 0)).unwrap(); // B
    session.apply_move(Coord::new(0, 0)).unwrap(); // W
    session.apply_move(Coord::new(5, 5)).unwrap(); // B elsewhere
    session.apply_move(Coord::new(1, 1)).unwrap(); // W
    session.apply_move(Coord::new(6, 5)).unwrap(); // B elsewhere
    session.apply_move(Coord::new(0, 2)).unwrap(); // W

    // Black captures the corner stone
    session.apply_move(Coord::new(0, 1)).unwrap();
    let state = session.state();
    assert_eq!(state.captures, (1, 0));
    assert_eq!(state.last_captured, Some(Coord::new(0, 0)));
    assert_eq!(state.board.get(Coord::new(0, 0)), None);

    // White may not recapture immediately
    assert!(!session.valid_moves().contains(&Coord::new(0, 0)));
    assert_eq!(
        session.apply_move(Coord::new(0, 0)).unwrap_err(),
        GameError::KoViolation
    );

    // White plays elsewhere; Black responds; now the recapture is legal
    session.apply_move(Coord::new(7, 7)).unwrap(); // W
    assert_eq!(session.state().last_captured, None);
    session.apply_move(Coord::new(6, 6)).unwrap(); // B
    assert!(session.valid_moves().contains(&Coord::new(0, 0)));
    session.apply_move(Coord::new(0, 0)).unwrap(); // W recaptures
    assert_eq!(session.state().captures, (1, 1));
}

#[test]
fn history_records_moves_and_passes() {
    let mut session = GameSession::new(9).unwrap();
    session.apply_move(Coord::new(2, 2)).unwrap();
    session.pass().unwrap();
    session.apply_move(Coord::new(6, 6)).unwrap();

    assert_eq!(
        session.state().moves,
        vec![
            Move::Place(Coord::new(2, 2)),
            Move::Pass,
            Move::Place(Coord::new(6, 6)),
        ]
    );
}

#[test]
fn game_state_round_trips_through_json() {
    let mut session = GameSession::new(9).unwrap();
    session.apply_move(Coord::new(4, 4)).unwrap();
    session.pass().unwrap();

    let json = serde_json::to_string(session.state()).unwrap();
    let restored: weiqi_core::GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.board, session.state().board);
    assert_eq!(restored.current_player, session.state().current_player);
    assert_eq!(restored.moves, session.state().moves);
}

#[test]
fn games_always_terminate() {
    // Black greedily fills the board while White only passes; the session
    // must reach game over (either White runs out of legal moves after a
    // black stone, or the final exchange ends in two passes).
    let mut session = GameSession::new(9).unwrap();

    for _ in 0..400 {
        if session.state().game_over {
            break;
        }
        match session.state().current_player {
            Color::White => {
                session.pass().unwrap();
            }
            Color::Black => match session.valid_moves().first().copied() {
                Some(coord) => {
                    session.apply_move(coord).unwrap();
                }
                None => {
                    session.pass().unwrap();
                }
            },
        }
    }

    assert!(session.state().game_over, "game did not terminate");
}
