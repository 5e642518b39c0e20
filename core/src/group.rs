// SPDX-License-Identifier: MIT OR Apache-2.0

//! Connected-group discovery and liberty counting
//!
//! Groups are derived on demand from a board snapshot, never stored. Both
//! functions are pure and O(board area) in the worst case.

use std::collections::HashSet;

use crate::{Board, Coord};

/// Find all stones in the group connected to the stone at `coord`.
///
/// Flood-fills over same-colored orthogonal neighbors. Returns an empty
/// vector when the starting cell is empty or out of bounds.
pub fn find_group(board: &Board, coord: Coord) -> Vec<Coord> {
    let target_color = match board.get(coord) {
        Some(color) => color,
        None => return Vec::new(),
    };

    let mut group = Vec::new();
    let mut visited = HashSet::new();
    let mut queue = vec![coord];

    while let Some(current) = queue.pop() {
        if !visited.insert(current) {
            continue;
        }
        group.push(current);

        for neighbor in board.adjacent_coords(current) {
            if board.get(neighbor) == Some(target_color) && !visited.contains(&neighbor) {
                queue.push(neighbor);
            }
        }
    }

    group
}

/// Count the liberties of a group of stones.
///
/// A liberty is a distinct empty cell adjacent to at least one member of
/// the group; shared liberties are counted once.
pub fn count_liberties(board: &Board, group: &[Coord]) -> usize {
    let mut liberties = HashSet::new();

    for &coord in group {
        for neighbor in board.adjacent_coords(coord) {
            if board.get(neighbor).is_none() {
                liberties.insert(neighbor);
            }
        }
    }

    liberties.len()
}
