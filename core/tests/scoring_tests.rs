// SPDX-License-Identifier: MIT OR Apache-2.0

use weiqi_core::scoring::score_board;
use weiqi_core::{Board, Color, Coord};

fn board_with(size: u8, stones: &[(u8, u8, Color)]) -> Board {
    let mut board = Board::new(size);
    for &(x, y, color) in stones {
        assert!(board.place(Coord::new(x, y), color), "bad test setup at ({x},{y})");
    }
    board
}

#[test]
fn empty_board_scores_zero() {
    let score = score_board(&Board::new(9));
    assert_eq!(score.black, 0);
    assert_eq!(score.white, 0);
    assert_eq!(score.winner(), None);
    assert!(score.territory.iter().all(Option::is_none));
}

#[test]
fn enclosed_point_is_territory() {
    // Black box around (1,1); with no white stones anywhere, the outside
    // region borders only black too, so black owns the whole board.
    // B B B . .
    // B . B . .
    // B B B . .
    let stones = [
        (0, 0, Color::Black),
        (1, 0, Color::Black),
        (2, 0, Color::Black),
        (0, 1, Color::Black),
        (2, 1, Color::Black),
        (0, 2, Color::Black),
        (1, 2, Color::Black),
        (2, 2, Color::Black),
    ];
    let board = board_with(9, &stones);
    let score = score_board(&board);

    // 8 stones + every empty cell (inside and outside the box)
    assert_eq!(score.black, 81);
    assert_eq!(score.white, 0);
    assert_eq!(score.territory[1 * 9 + 1], Some(Color::Black));
    assert_eq!(score.winner(), Some(Color::Black));
}

#[test]
fn region_bordering_both_colors_is_neutral() {
    let stones = [
        (0, 0, Color::Black),
        (1, 0, Color::Black),
        (2, 0, Color::Black),
        (0, 1, Color::Black),
        (2, 1, Color::Black),
        (0, 2, Color::Black),
        (1, 2, Color::Black),
        (2, 2, Color::Black),
        (5, 5, Color::White),
    ];
    let board = board_with(9, &stones);
    let score = score_board(&board);

    // The enclosed point still belongs to black; the outside region now
    // touches both colors and is neutral.
    assert_eq!(score.black, 8 + 1);
    assert_eq!(score.white, 1);
    assert_eq!(score.territory[1 * 9 + 1], Some(Color::Black));
    assert_eq!(score.territory[5 * 9 + 6], None);
}

#[test]
fn stones_are_not_territory_cells() {
    let board = board_with(9, &[(4, 4, Color::Black)]);
    let score = score_board(&board);
    assert_eq!(score.territory[4 * 9 + 4], None);
    assert_eq!(score.black, 81);
}

#[test]
fn opposing_walls_split_the_board() {
    // Black wall on column 3, white wall on column 5, both full height:
    // left region is black's, right region is white's, and column 4
    // between the walls touches both.
    let mut stones = Vec::new();
    for y in 0..9 {
        stones.push((3, y, Color::Black));
        stones.push((5, y, Color::White));
    }
    let board = board_with(9, &stones);
    let score = score_board(&board);

    assert_eq!(score.black, 9 + 27); // wall + columns 0..=2
    assert_eq!(score.white, 9 + 27); // wall + columns 6..=8
    assert_eq!(score.territory[4 * 9 + 1], Some(Color::Black));
    assert_eq!(score.territory[4 * 9 + 7], Some(Color::White));
    assert_eq!(score.territory[4 * 9 + 4], None);
    assert_eq!(score.winner(), None);
}

#[test]
fn scoring_is_deterministic() {
    let stones = [
        (2, 2, Color::Black),
        (6, 6, Color::White),
        (3, 5, Color::Black),
        (5, 3, Color::White),
    ];
    let board = board_with(9, &stones);
    assert_eq!(score_board(&board), score_board(&board));
}
