// SPDX-License-Identifier: MIT OR Apache-2.0

//! Easy tier: uniform-random move selection

use std::sync::atomic::AtomicU64;

use rand::seq::SliceRandom;

use weiqi_core::{rules, Board, Color, Coord};

use crate::{invocation_rng, Difficulty, Strategy};

/// Picks uniformly among the legal moves.
///
/// The ko point is deliberately ignored here (`last_captured` is dropped);
/// the session re-validates the choice before committing it, so the worst
/// case is a rejected move, never an illegal board.
pub struct RandomAi {
    seed: Option<u64>,
    invocations: AtomicU64,
}

impl RandomAi {
    pub fn new() -> Self {
        Self {
            seed: None,
            invocations: AtomicU64::new(0),
        }
    }

    /// Deterministic variant for tests and reproducible games.
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            invocations: AtomicU64::new(0),
        }
    }
}

impl Default for RandomAi {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomAi {
    fn choose_move(
        &self,
        board: &Board,
        color: Color,
        _last_captured: Option<Coord>,
    ) -> Option<Coord> {
        let moves = rules::valid_moves(board, color, None);
        let mut rng = invocation_rng(self.seed, &self.invocations);
        moves.choose(&mut rng).copied()
    }

    fn difficulty(&self) -> Difficulty {
        Difficulty::Easy
    }
}
