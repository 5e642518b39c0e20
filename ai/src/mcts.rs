// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hard tier: time-boxed Monte Carlo Tree Search with UCT selection
//!
//! Each `choose_move` call builds a fresh tree: select down the tree by
//! UCT while nodes are fully expanded, expand one untried move, run a
//! random playout with a soft capture bias, and backpropagate the result.
//! The wall-clock budget is the primary cutoff; the iteration cap is a
//! safety bound. The answer is the root child with the most visits, the
//! robust-child criterion, not the noisier best win rate.

use std::sync::atomic::AtomicU64;
use std::time::{Duration, Instant};

use rand::seq::SliceRandom;
use rand::Rng;

use weiqi_core::group::{count_liberties, find_group};
use weiqi_core::scoring::score_board;
use weiqi_core::{rules, Board, Color, Coord};

use crate::{invocation_rng, Difficulty, Strategy};

/// Tuning knobs for the search.
#[derive(Debug, Clone)]
pub struct MctsConfig {
    /// Wall-clock budget per move; re-measured on every invocation
    pub budget: Duration,
    /// Safety bound on iterations within the budget
    pub max_iterations: u32,
    /// UCT exploration constant
    pub exploration: f64,
    /// Probability that a playout step prefers a capturing move
    pub capture_bias: f64,
    /// Fixed RNG seed for reproducible searches
    pub seed: Option<u64>,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            budget: Duration::from_millis(1500),
            max_iterations: 20_000,
            exploration: std::f64::consts::SQRT_2,
            capture_bias: 0.75,
            seed: None,
        }
    }
}

/// Monte Carlo Tree Search strategy. Holds no state between calls.
pub struct MctsAi {
    config: MctsConfig,
    invocations: AtomicU64,
}

impl MctsAi {
    pub fn new(config: MctsConfig) -> Self {
        Self {
            config,
            invocations: AtomicU64::new(0),
        }
    }
}

impl Default for MctsAi {
    fn default() -> Self {
        Self::new(MctsConfig::default())
    }
}

struct Node {
    board: Board,
    last_captured: Option<Coord>,
    /// Player to move from this position
    to_move: Color,
    /// The move that produced this node (None at the root)
    mv: Option<Coord>,
    /// The player who made `mv`
    player: Color,
    wins: f64,
    visits: u32,
    untried: Vec<Coord>,
    children: Vec<Node>,
}

impl Node {
    fn root(board: Board, to_move: Color, last_captured: Option<Coord>, untried: Vec<Coord>) -> Self {
        Self {
            board,
            last_captured,
            to_move,
            mv: None,
            player: to_move.opposite(),
            wins: 0.0,
            visits: 0,
            untried,
            children: Vec::new(),
        }
    }

    fn from_move(parent: &Node, mv: Coord) -> Self {
        let outcome = rules::make_move(&parent.board, mv, parent.to_move);
        let to_move = parent.to_move.opposite();
        let untried = rules::valid_moves(&outcome.board, to_move, outcome.ko_candidate);
        Self {
            board: outcome.board,
            last_captured: outcome.ko_candidate,
            to_move,
            mv: Some(mv),
            player: parent.to_move,
            wins: 0.0,
            visits: 0,
            untried,
            children: Vec::new(),
        }
    }

    fn uct(&self, parent_visits: u32, exploration: f64) -> f64 {
        let visits = self.visits as f64;
        self.wins / visits + exploration * ((parent_visits as f64).ln() / visits).sqrt()
    }
}

impl Strategy for MctsAi {
    fn choose_move(
        &self,
        board: &Board,
        color: Color,
        last_captured: Option<Coord>,
    ) -> Option<Coord> {
        let moves = rules::valid_moves(board, color, last_captured);
        match moves.len() {
            0 => return None,
            // A forced move needs no search.
            1 => return Some(moves[0]),
            _ => {}
        }

        let mut rng = invocation_rng(self.config.seed, &self.invocations);
        let deadline = Instant::now() + self.config.budget;
        let mut root = Node::root(board.clone(), color, last_captured, moves);

        let mut iterations = 0u32;
        while iterations < self.config.max_iterations && Instant::now() < deadline {
            iterations += 1;

            // Select: descend while fully expanded and non-terminal.
            let mut path = Vec::new();
            {
                let mut node = &root;
                while node.untried.is_empty() && !node.children.is_empty() {
                    let idx = best_uct(node, self.config.exploration);
                    path.push(idx);
                    node = &node.children[idx];
                }
            }

            // Expand one untried move, if any remain at the leaf.
            {
                let node = node_mut(&mut root, &path);
                if !node.untried.is_empty() {
                    let pick = rng.gen_range(0..node.untried.len());
                    let mv = node.untried.swap_remove(pick);
                    let child = Node::from_move(node, mv);
                    node.children.push(child);
                    path.push(node.children.len() - 1);
                }
            }

            // Simulate from the leaf position.
            let winner = {
                let leaf = node_ref(&root, &path);
                playout(
                    leaf.board.clone(),
                    leaf.to_move,
                    leaf.last_captured,
                    self.config.capture_bias,
                    deadline,
                    &mut rng,
                )
            };

            // Backpropagate along the path, root included.
            root.visits += 1;
            root.wins += credit(root.player, winner);
            let mut node = &mut root;
            for &idx in &path {
                node = &mut node.children[idx];
                node.visits += 1;
                node.wins += credit(node.player, winner);
            }
        }

        let best = root.children.iter().max_by_key(|child| child.visits);
        tracing::debug!(
            iterations,
            children = root.children.len(),
            visits = best.map(|b| b.visits).unwrap_or(0),
            "mcts search finished"
        );
        best.and_then(|child| child.mv)
    }

    fn difficulty(&self) -> Difficulty {
        Difficulty::Hard
    }
}

fn credit(player: Color, winner: Option<Color>) -> f64 {
    match winner {
        Some(w) if w == player => 1.0,
        Some(_) => 0.0,
        None => 0.5,
    }
}

fn best_uct(node: &Node, exploration: f64) -> usize {
    node.children
        .iter()
        .enumerate()
        .max_by(|(_, a), (_, b)| {
            a.uct(node.visits, exploration)
                .partial_cmp(&b.uct(node.visits, exploration))
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(idx, _)| idx)
        .unwrap_or(0)
}

fn node_ref<'a>(root: &'a Node, path: &[usize]) -> &'a Node {
    path.iter().fold(root, |node, &idx| &node.children[idx])
}

fn node_mut<'a>(root: &'a mut Node, path: &[usize]) -> &'a mut Node {
    path.iter().fold(root, |node, &idx| &mut node.children[idx])
}

/// Play random legal moves until two consecutive passes, the move cap or
/// the deadline, then score the board.
fn playout(
    mut board: Board,
    mut to_move: Color,
    mut ko: Option<Coord>,
    capture_bias: f64,
    deadline: Instant,
    rng: &mut impl Rng,
) -> Option<Color> {
    let area = (board.size() as usize) * (board.size() as usize);
    let move_cap = 2 * area;
    let mut passes = 0u8;

    for turn in 0..move_cap {
        if passes >= 2 {
            break;
        }
        // The deadline check is amortized; a few extra moves are fine.
        if turn % 8 == 0 && Instant::now() >= deadline {
            break;
        }

        let mv = choose_playout_move(&board, to_move, ko, capture_bias, rng);
        match mv {
            Some(coord) => {
                let outcome = rules::make_move(&board, coord, to_move);
                board = outcome.board;
                ko = outcome.ko_candidate;
                passes = 0;
            }
            None => {
                ko = None;
                passes += 1;
            }
        }
        to_move = to_move.opposite();
    }

    score_board(&board).winner()
}

/// Pick a playout move: with probability `capture_bias` prefer a legal
/// capturing move (the liberty of an opponent group in atari), otherwise
/// the first legal cell of a shuffled scan. None means pass.
fn choose_playout_move(
    board: &Board,
    to_move: Color,
    ko: Option<Coord>,
    capture_bias: f64,
    rng: &mut impl Rng,
) -> Option<Coord> {
    if rng.gen_bool(capture_bias) {
        let mut captures = capture_points(board, to_move);
        captures.shuffle(rng);
        if let Some(coord) = captures
            .into_iter()
            .find(|&c| rules::check_move(board, c, to_move, ko).is_ok())
        {
            return Some(coord);
        }
    }

    let mut empties: Vec<Coord> = board
        .coords()
        .filter(|&c| board.get(c).is_none())
        .collect();
    empties.shuffle(rng);
    empties
        .into_iter()
        .find(|&c| rules::check_move(board, c, to_move, ko).is_ok())
}

/// Sole liberties of opponent groups in atari: playing one captures.
fn capture_points(board: &Board, to_move: Color) -> Vec<Coord> {
    let opponent = to_move.opposite();
    let mut points = Vec::new();
    let mut visited = std::collections::HashSet::new();

    for coord in board.coords() {
        if board.get(coord) != Some(opponent) || visited.contains(&coord) {
            continue;
        }
        let group = find_group(board, coord);
        visited.extend(group.iter().copied());
        if count_liberties(board, &group) == 1 {
            for &stone in &group {
                for neighbor in board.adjacent_coords(stone) {
                    if board.get(neighbor).is_none() {
                        points.push(neighbor);
                    }
                }
            }
        }
    }

    points.sort_by_key(|c| (c.y, c.x));
    points.dedup();
    points
}
