// SPDX-License-Identifier: MIT OR Apache-2.0

//! Move legality and capture resolution
//!
//! This layer is a pure transformation over board snapshots: it has no
//! notion of a session or whose turn it is. Every simulation happens on a
//! cloned board so callers can keep reading the position they passed in.
//!
//! The ko rule implemented here is the single-move-lookback variant:
//! recapturing at the point just vacated by a single-stone capture is
//! illegal for exactly one turn. It is deliberately weaker than positional
//! superko.

use std::collections::HashSet;

use crate::group::{count_liberties, find_group};
use crate::{Board, Color, Coord, GameError};

/// Result of applying a stone placement to a board snapshot.
#[derive(Debug, Clone)]
pub struct MoveOutcome {
    /// The board after the stone was placed and captures resolved
    pub board: Board,
    /// Coordinates of the opponent stones removed by this move
    pub captured: Vec<Coord>,
    /// The captured stone's coordinate when exactly one stone fell;
    /// this is the ko candidate the *next* move must be checked against
    pub ko_candidate: Option<Coord>,
}

/// Remove every zero-liberty group of `color` from the board.
///
/// Each group is visited once, so a multi-stone group counts its stones
/// exactly one time. Returns the new board and the removed coordinates.
pub fn remove_dead_stones(board: &Board, color: Color) -> (Board, Vec<Coord>) {
    let mut result = board.clone();
    let mut removed = Vec::new();
    let mut visited: HashSet<Coord> = HashSet::new();

    for coord in board.coords() {
        if board.get(coord) != Some(color) || visited.contains(&coord) {
            continue;
        }

        let group = find_group(board, coord);
        visited.extend(group.iter().copied());

        if count_liberties(board, &group) == 0 {
            for stone in &group {
                result.remove(*stone);
            }
            removed.extend(group);
        }
    }

    (result, removed)
}

/// Check whether placing `color` at `coord` would be suicide.
///
/// The simulation captures the opponent's dead groups first, so a move
/// that frees its own liberties by capturing is correctly not suicide.
/// Occupied cells are never suicide (they are rejected as occupied).
pub fn is_suicide(board: &Board, coord: Coord, color: Color) -> bool {
    if !board.is_empty(coord) {
        return false;
    }

    let mut temp = board.clone();
    temp.place(coord, color);
    let (after_captures, _) = remove_dead_stones(&temp, color.opposite());

    let own_group = find_group(&after_captures, coord);
    count_liberties(&after_captures, &own_group) == 0
}

/// Check whether placing `color` at `coord` violates the ko rule.
///
/// Illegal iff `coord` is the point vacated by the previous move's
/// single-stone capture and playing there would again capture exactly
/// one stone.
pub fn is_ko(board: &Board, coord: Coord, color: Color, last_captured: Option<Coord>) -> bool {
    let ko_point = match last_captured {
        Some(point) => point,
        None => return false,
    };
    if coord != ko_point || !board.is_empty(coord) {
        return false;
    }

    let mut temp = board.clone();
    temp.place(coord, color);
    let (_, captured) = remove_dead_stones(&temp, color.opposite());

    captured.len() == 1
}

/// Classify a prospective move, returning the reason it is illegal.
pub fn check_move(
    board: &Board,
    coord: Coord,
    color: Color,
    last_captured: Option<Coord>,
) -> Result<(), GameError> {
    if !coord.is_valid(board.size()) {
        return Err(GameError::OutOfBounds);
    }
    if board.get(coord).is_some() {
        return Err(GameError::Occupied);
    }
    if is_ko(board, coord, color, last_captured) {
        tracing::debug!(?coord, "ko violation detected");
        return Err(GameError::KoViolation);
    }
    if is_suicide(board, coord, color) {
        return Err(GameError::Suicide);
    }
    Ok(())
}

/// Every empty cell that is neither suicide nor ko, in row-major order.
pub fn valid_moves(board: &Board, color: Color, last_captured: Option<Coord>) -> Vec<Coord> {
    board
        .coords()
        .filter(|&coord| {
            board.get(coord).is_none()
                && !is_ko(board, coord, color, last_captured)
                && !is_suicide(board, coord, color)
        })
        .collect()
}

/// Place a stone and resolve captures.
///
/// The caller is expected to have validated the move via [`check_move`]
/// or [`valid_moves`]; this function only transforms the snapshot.
pub fn make_move(board: &Board, coord: Coord, color: Color) -> MoveOutcome {
    let mut next = board.clone();
    next.place(coord, color);

    let (next, captured) = remove_dead_stones(&next, color.opposite());
    let ko_candidate = match captured.as_slice() {
        [single] => Some(*single),
        _ => None,
    };

    MoveOutcome {
        board: next,
        captured,
        ko_candidate,
    }
}
