// SPDX-License-Identifier: MIT OR Apache-2.0

//! Medium tier: single-ply heuristic search
//!
//! Each candidate move gets a scalar score:
//!
//! ```text
//!   weight(coord)                    positional table, center/hoshi over edges
//! + 25 * stones captured by playing here
//! + 30 * atari kill (this point is the sole liberty of an opponent group)
//! +  5 * own group's liberties after the move
//! - 10 * stones the opponent could capture in reply
//! ```
//!
//! The argmax wins; ties break to the first candidate in row-major scan
//! order, which keeps the choice deterministic.

use std::collections::HashSet;

use weiqi_core::board::is_star_point;
use weiqi_core::group::{count_liberties, find_group};
use weiqi_core::{rules, Board, Color, Coord};

use crate::{Difficulty, Strategy};

const CAPTURE_BONUS: i32 = 25;
const ATARI_KILL_BONUS: i32 = 30;
const LIBERTY_BONUS: i32 = 5;
const REPLY_CAPTURE_PENALTY: i32 = 10;

/// One-ply lookahead over a static evaluation.
pub struct HeuristicAi;

impl HeuristicAi {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HeuristicAi {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for HeuristicAi {
    fn choose_move(
        &self,
        board: &Board,
        color: Color,
        last_captured: Option<Coord>,
    ) -> Option<Coord> {
        let mut best: Option<(Coord, i32)> = None;

        for coord in rules::valid_moves(board, color, last_captured) {
            let score = score_move(board, coord, color);
            // Strict comparison keeps the first-found move on ties.
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((coord, score));
            }
        }

        best.map(|(coord, _)| coord)
    }

    fn difficulty(&self) -> Difficulty {
        Difficulty::Medium
    }
}

fn score_move(board: &Board, coord: Coord, color: Color) -> i32 {
    let outcome = rules::make_move(board, coord, color);

    let captured = outcome.captured.len() as i32;

    // Is this point the sole liberty of some opponent group?
    let opponent = color.opposite();
    let mut atari_kill = 0;
    for neighbor in board.adjacent_coords(coord) {
        if board.get(neighbor) == Some(opponent) {
            let group = find_group(board, neighbor);
            if count_liberties(board, &group) == 1 {
                atari_kill = 1;
                break;
            }
        }
    }

    let own_group = find_group(&outcome.board, coord);
    let own_liberties = count_liberties(&outcome.board, &own_group) as i32;

    positional_weight(coord, board.size())
        + CAPTURE_BONUS * captured
        + ATARI_KILL_BONUS * atari_kill
        + LIBERTY_BONUS * own_liberties
        - REPLY_CAPTURE_PENALTY * reply_captures(&outcome.board, color)
}

/// Stones the opponent could capture on the very next move: the total
/// size of the mover's groups left with a single liberty.
fn reply_captures(board: &Board, color: Color) -> i32 {
    let mut visited: HashSet<Coord> = HashSet::new();
    let mut total = 0;

    for coord in board.coords() {
        if board.get(coord) != Some(color) || visited.contains(&coord) {
            continue;
        }
        let group = find_group(board, coord);
        visited.extend(group.iter().copied());
        if count_liberties(board, &group) == 1 {
            total += group.len() as i32;
        }
    }

    total
}

/// Static positional weight: distance from the edge, capped at the
/// fourth line, with a bonus on star points.
fn positional_weight(coord: Coord, size: u8) -> i32 {
    let x = coord.x as i32;
    let y = coord.y as i32;
    let last = size as i32 - 1;
    let edge_distance = x.min(y).min(last - x).min(last - y);

    let mut weight = edge_distance.min(3) * 2;
    if is_star_point(coord, size) {
        weight += 4;
    }
    weight
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn center_outweighs_edge() {
        assert!(positional_weight(Coord::new(4, 4), 9) > positional_weight(Coord::new(0, 4), 9));
    }

    #[test]
    fn star_point_gets_bonus() {
        assert!(positional_weight(Coord::new(2, 2), 9) > positional_weight(Coord::new(2, 3), 9));
    }
}
