// SPDX-License-Identifier: MIT OR Apache-2.0

//! Weiqi AI - Tiered move-selection strategies
//!
//! Three interchangeable strategies behind one trait:
//! - [`RandomAi`] (Easy): uniform choice over legal moves
//! - [`HeuristicAi`] (Medium): single-ply scored search
//! - [`MctsAi`] (Hard): time-boxed Monte Carlo Tree Search with UCT
//!
//! Strategies are stateless between calls and safe to share; the
//! [`AiRegistry`] hands out one instance per difficulty. The async
//! bridge to a session owner lives in [`driver`].

#![deny(unsafe_code)]
#![deny(clippy::all)]

pub mod driver;
pub mod heuristic;
pub mod mcts;
pub mod random;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use weiqi_core::{Board, Color, Coord};

pub use driver::AiDriver;
pub use heuristic::HeuristicAi;
pub use mcts::{MctsAi, MctsConfig};
pub use random::RandomAi;

/// AI difficulty tier, mapping 1:1 onto a strategy implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Difficulty {
    /// Uniform-random move selection
    Easy,
    /// Single-ply heuristic search
    Medium,
    /// Time-boxed Monte Carlo Tree Search
    Hard,
}

/// A move-selection policy.
///
/// `choose_move` never mutates the board it is given; all lookahead runs
/// on clones. `None` means "no legal move, pass" and is a normal outcome,
/// not an error.
pub trait Strategy: Send + Sync {
    /// Pick a move for `color` on the given position, or None to pass.
    fn choose_move(
        &self,
        board: &Board,
        color: Color,
        last_captured: Option<Coord>,
    ) -> Option<Coord>;

    /// The difficulty tier this strategy implements.
    fn difficulty(&self) -> Difficulty;
}

/// One strategy instance per difficulty, owned by the composition root.
///
/// This replaces a process-wide factory cache: the registry is constructed
/// once next to the session that uses it, and lookups hand out shared
/// references to the same instances.
#[derive(Clone)]
pub struct AiRegistry {
    easy: Arc<dyn Strategy>,
    medium: Arc<dyn Strategy>,
    hard: Arc<dyn Strategy>,
}

impl AiRegistry {
    /// Build a registry with the default strategy for each tier.
    pub fn new() -> Self {
        Self {
            easy: Arc::new(RandomAi::new()),
            medium: Arc::new(HeuristicAi::new()),
            hard: Arc::new(MctsAi::new(MctsConfig::default())),
        }
    }

    /// Build a registry whose randomized strategies derive from `seed`,
    /// for reproducible games and tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            easy: Arc::new(RandomAi::seeded(seed)),
            medium: Arc::new(HeuristicAi::new()),
            hard: Arc::new(MctsAi::new(MctsConfig {
                seed: Some(seed),
                ..MctsConfig::default()
            })),
        }
    }

    /// Look up the strategy for a difficulty tier.
    pub fn strategy(&self, difficulty: Difficulty) -> Arc<dyn Strategy> {
        match difficulty {
            Difficulty::Easy => Arc::clone(&self.easy),
            Difficulty::Medium => Arc::clone(&self.medium),
            Difficulty::Hard => Arc::clone(&self.hard),
        }
    }
}

impl Default for AiRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-call RNG for a shared strategy instance.
///
/// With a fixed seed each invocation still gets a distinct, reproducible
/// stream; without one the RNG is seeded from entropy.
pub(crate) fn invocation_rng(seed: Option<u64>, invocations: &AtomicU64) -> SmallRng {
    let n = invocations.fetch_add(1, Ordering::Relaxed);
    match seed {
        Some(seed) => SmallRng::seed_from_u64(seed.wrapping_add(n.wrapping_mul(0x9e37_79b9_7f4a_7c15))),
        None => SmallRng::from_entropy(),
    }
}
