// SPDX-License-Identifier: MIT OR Apache-2.0

//! ASCII board rendering for the CLI.

use weiqi_core::board::is_star_point;
use weiqi_core::{Board, Color, Coord};

/// Render the board as ASCII art
pub fn render_board(board: &Board) -> String {
    let size = board.size();
    let mut output = String::new();

    // Column labels
    output.push_str("   ");
    for col in 0..size {
        output.push(' ');
        output.push(column_char(col));
    }
    output.push('\n');

    for row in 0..size {
        // Row number (1-indexed)
        output.push_str(&format!("{:2} ", row + 1));

        for col in 0..size {
            let coord = Coord::new(col, row);
            let symbol = match board.get(coord) {
                Some(Color::Black) => '●',
                Some(Color::White) => '○',
                None => {
                    if is_star_point(coord, size) {
                        '+'
                    } else {
                        '·'
                    }
                }
            };
            output.push(' ');
            output.push(symbol);
        }

        output.push_str(&format!(" {}", row + 1));
        output.push('\n');
    }

    // Column labels again at the bottom
    output.push_str("   ");
    for col in 0..size {
        output.push(' ');
        output.push(column_char(col));
    }
    output.push('\n');

    output
}

/// Convert a column index to a column character (A-T, skipping I)
pub fn column_char(col: u8) -> char {
    if col < 8 {
        (b'A' + col) as char
    } else {
        (b'A' + col + 1) as char // Skip 'I'
    }
}

/// Parse a human move like "D4" or "k10" into a coordinate.
pub fn parse_coord(input: &str, board_size: u8) -> Option<Coord> {
    let input = input.trim();
    let mut chars = input.chars();
    let letter = chars.next()?.to_ascii_uppercase();

    // 'I' is not used on a goban
    let col = match letter {
        'A'..='H' => letter as u8 - b'A',
        'J'..='T' => letter as u8 - b'A' - 1,
        _ => return None,
    };

    let row: u8 = chars.as_str().parse().ok()?;
    if row == 0 {
        return None;
    }
    let coord = Coord::new(col, row - 1);
    coord.is_valid(board_size).then_some(coord)
}

/// Format a coordinate the way players read it ("D4")
pub fn format_coord(coord: Coord) -> String {
    format!("{}{}", column_char(coord.x), coord.y + 1)
}
