// SPDX-License-Identifier: MIT OR Apache-2.0

//! Area scoring via territory flood-fill

use std::collections::{HashSet, VecDeque};

use serde::{Deserialize, Serialize};

use crate::{Board, Color, Coord};

/// Area score for a board position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreSheet {
    /// Black stones on board plus Black territory
    pub black: u16,
    /// White stones on board plus White territory
    pub white: u16,
    /// Territory ownership per cell, row-major; None for stones and
    /// neutral regions
    pub territory: Vec<Option<Color>>,
}

impl ScoreSheet {
    /// The leading color, or None on a tie
    pub fn winner(&self) -> Option<Color> {
        match self.black.cmp(&self.white) {
            std::cmp::Ordering::Greater => Some(Color::Black),
            std::cmp::Ordering::Less => Some(Color::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Compute the area score of a board.
///
/// Every maximal connected region of empty cells is flood-filled once and
/// assigned to a color iff stones of exactly one color border it; regions
/// touching both colors are neutral. Ownership depends only on the *set*
/// of bordering colors, so the result is independent of traversal order.
pub fn score_board(board: &Board) -> ScoreSheet {
    let size = board.size() as usize;
    let mut territory: Vec<Option<Color>> = vec![None; size * size];
    let mut seen: HashSet<Coord> = HashSet::new();

    let mut terr_black = 0u16;
    let mut terr_white = 0u16;

    for coord in board.coords() {
        if board.get(coord).is_some() || seen.contains(&coord) {
            continue;
        }

        let (region, borders) = region_and_borders(board, coord, &mut seen);
        if borders.len() == 1 {
            let owner = *borders.iter().next().expect("border set is non-empty");
            for cell in &region {
                territory[cell.y as usize * size + cell.x as usize] = Some(owner);
            }
            match owner {
                Color::Black => terr_black += region.len() as u16,
                Color::White => terr_white += region.len() as u16,
            }
        }
    }

    ScoreSheet {
        black: board.count_stones(Color::Black) as u16 + terr_black,
        white: board.count_stones(Color::White) as u16 + terr_white,
        territory,
    }
}

/// BFS over empty points; returns (region coords, bordering stone colors)
fn region_and_borders(
    board: &Board,
    start: Coord,
    global_seen: &mut HashSet<Coord>,
) -> (Vec<Coord>, HashSet<Color>) {
    let mut queue = VecDeque::from([start]);
    let mut region = vec![start];
    let mut borders = HashSet::new();
    global_seen.insert(start);

    while let Some(coord) = queue.pop_front() {
        for neighbor in board.adjacent_coords(coord) {
            match board.get(neighbor) {
                Some(color) => {
                    borders.insert(color);
                }
                None => {
                    if global_seen.insert(neighbor) {
                        region.push(neighbor);
                        queue.push_back(neighbor);
                    }
                }
            }
        }
    }

    (region, borders)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_board_is_all_neutral() {
        let board = Board::new(9);
        let score = score_board(&board);
        assert_eq!(score.black, 0);
        assert_eq!(score.white, 0);
        assert!(score.territory.iter().all(Option::is_none));
    }

    #[test]
    fn single_stone_owns_the_rest() {
        let mut board = Board::new(5);
        board.place(Coord::new(2, 2), Color::Black);
        let score = score_board(&board);
        // 1 stone + 24 territory cells
        assert_eq!(score.black, 25);
        assert_eq!(score.white, 0);
        assert_eq!(score.winner(), Some(Color::Black));
    }
}
