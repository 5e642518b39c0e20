// SPDX-License-Identifier: MIT OR Apache-2.0

//! Board representation and manipulation

use serde::{Deserialize, Serialize};

use crate::{Color, Coord};

/// Board sizes accepted by the engine.
pub const SUPPORTED_SIZES: [u8; 3] = [9, 13, 19];

/// Represents the Go board with stones and empty positions.
///
/// The board has value semantics: cloning produces an independent snapshot,
/// which is how the rules layer and the AI simulate moves without touching
/// the position a caller may still be reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// Size of the board (9, 13 or 19)
    size: u8,
    /// Positions on the board, row-major
    positions: Vec<Option<Color>>,
}

impl Board {
    /// Create a new empty board with the specified size
    pub fn new(size: u8) -> Self {
        let cells = (size as usize) * (size as usize);
        Self {
            size,
            positions: vec![None; cells],
        }
    }

    /// Get the size of the board
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Get the stone at the specified coordinate
    pub fn get(&self, coord: Coord) -> Option<Color> {
        if !coord.is_valid(self.size) {
            return None;
        }
        self.positions[self.coord_to_index(coord)]
    }

    /// Check whether a coordinate is in bounds and empty
    pub fn is_empty(&self, coord: Coord) -> bool {
        coord.is_valid(self.size) && self.get(coord).is_none()
    }

    /// Place a stone at the specified coordinate
    ///
    /// Returns false if the coordinate is out of bounds or occupied.
    pub fn place(&mut self, coord: Coord, color: Color) -> bool {
        if !coord.is_valid(self.size) {
            return false;
        }
        let idx = self.coord_to_index(coord);
        if self.positions[idx].is_some() {
            return false;
        }
        self.positions[idx] = Some(color);
        true
    }

    /// Remove a stone at the specified coordinate
    pub fn remove(&mut self, coord: Coord) -> bool {
        if !coord.is_valid(self.size) {
            return false;
        }
        let idx = self.coord_to_index(coord);
        if self.positions[idx].is_none() {
            return false;
        }
        self.positions[idx] = None;
        true
    }

    /// Get adjacent coordinates (up, down, left, right), in bounds only
    pub fn adjacent_coords(&self, coord: Coord) -> Vec<Coord> {
        let mut result = Vec::with_capacity(4);
        let x = coord.x;
        let y = coord.y;

        if y > 0 {
            result.push(Coord::new(x, y - 1));
        }
        if y < self.size - 1 {
            result.push(Coord::new(x, y + 1));
        }
        if x > 0 {
            result.push(Coord::new(x - 1, y));
        }
        if x < self.size - 1 {
            result.push(Coord::new(x + 1, y));
        }

        result
    }

    /// Iterate over every coordinate of the board in row-major order
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        let size = self.size;
        (0..size).flat_map(move |y| (0..size).map(move |x| Coord::new(x, y)))
    }

    /// Count stones of the specified color on the board
    pub fn count_stones(&self, color: Color) -> usize {
        self.positions
            .iter()
            .filter(|stone| **stone == Some(color))
            .count()
    }

    /// Convert a coordinate to a vector index
    fn coord_to_index(&self, coord: Coord) -> usize {
        (coord.y as usize) * (self.size as usize) + (coord.x as usize)
    }
}

/// Check if a coordinate is a star point (hoshi) for the given board size.
///
/// Used by front ends for rendering and by the heuristic AI's positional
/// weights.
pub fn is_star_point(coord: Coord, board_size: u8) -> bool {
    let (x, y) = (coord.x, coord.y);

    match board_size {
        9 => {
            // 9x9 has star points at (2,2), (2,6), (4,4), (6,2), (6,6)
            matches!((x, y), (2, 2) | (2, 6) | (4, 4) | (6, 2) | (6, 6))
        }
        13 => {
            // 13x13 has star points at (3,3), (3,9), (6,6), (9,3), (9,9)
            matches!((x, y), (3, 3) | (3, 9) | (6, 6) | (9, 3) | (9, 9))
        }
        19 => {
            // 19x19 has star points at corners, sides, and center
            matches!(
                (x, y),
                (3, 3) | (3, 9) | (3, 15) |
                (9, 3) | (9, 9) | (9, 15) |
                (15, 3) | (15, 9) | (15, 15)
            )
        }
        _ => false,
    }
}
